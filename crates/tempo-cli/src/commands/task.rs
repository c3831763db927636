//! Task management commands.

use chrono::NaiveDate;
use clap::Subcommand;

use tempo_core::model::{NewTask, Priority, TaskPatch};
use tempo_core::storage::Store;

use super::{active_user, print_json};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Due time (HH:mm)
        #[arg(long)]
        time: Option<String>,
        /// Priority: low, medium, or high
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List tasks, newest first
    List,
    /// Toggle a task's completion
    Done {
        /// Task ID
        id: String,
        /// Mark as pending again instead
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Rm {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = active_user(&store)?;

    match action {
        TaskAction::Add {
            title,
            description,
            date,
            time,
            priority,
        } => {
            let priority = Priority::parse(&priority)
                .ok_or_else(|| format!("invalid priority: {priority}"))?;
            let task = store.create_task(
                &user.id,
                &NewTask {
                    title,
                    description,
                    date,
                    time,
                    priority: Some(priority),
                },
            )?;
            print_json(&task)?;
        }
        TaskAction::List => {
            let tasks = store.list_tasks(&user.id)?;
            print_json(&tasks)?;
        }
        TaskAction::Done { id, undo } => {
            let task = store.update_task(
                &user.id,
                &id,
                &TaskPatch {
                    completed: Some(!undo),
                    ..TaskPatch::default()
                },
            )?;
            print_json(&task)?;
        }
        TaskAction::Rm { id } => {
            store.delete_task(&user.id, &id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
