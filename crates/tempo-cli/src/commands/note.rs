//! Note management commands.

use clap::Subcommand;

use tempo_core::model::{NewNote, NotePatch};
use tempo_core::storage::Store;

use super::{active_user, print_json};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a new note
    Add {
        /// Note title
        title: String,
        /// Note content
        #[arg(long)]
        content: Option<String>,
    },
    /// List notes, most recently updated first
    List,
    /// Update a note's title or content
    Edit {
        /// Note ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Rm {
        /// Note ID
        id: String,
    },
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = active_user(&store)?;

    match action {
        NoteAction::Add { title, content } => {
            let note = store.create_note(&user.id, &NewNote { title, content })?;
            print_json(&note)?;
        }
        NoteAction::List => {
            let notes = store.list_notes(&user.id)?;
            print_json(&notes)?;
        }
        NoteAction::Edit { id, title, content } => {
            let note = store.update_note(&user.id, &id, &NotePatch { title, content })?;
            print_json(&note)?;
        }
        NoteAction::Rm { id } => {
            store.delete_note(&user.id, &id)?;
            println!("Note deleted: {id}");
        }
    }
    Ok(())
}
