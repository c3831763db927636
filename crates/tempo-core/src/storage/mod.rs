mod config;
pub mod store;

pub use config::Config;
pub use store::Store;

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `TEMPO_DATA_DIR` overrides the location entirely (used by tests).
/// Otherwise this is `~/.config/tempo[-dev]/` based on `TEMPO_ENV`; set
/// `TEMPO_ENV=dev` to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    if let Ok(dir) = std::env::var("TEMPO_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TEMPO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tempo-dev")
    } else {
        base_dir.join("tempo")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
