use std::env;
use std::path::PathBuf;

/// Maximum number of characters allowed in a project, epic, or issue name
pub const NAME_MAX_LENGTH: usize = 64;

/// Maximum number of characters allowed in a description
pub const DESCRIPTION_MAX_LENGTH: usize = 512;

/// File name of the SQLite database inside the Spriint directory
pub const DATABASE_FILE: &str = "spriint.db";

/// Get the path to the Spriint directory (~/.spriint)
pub fn spriint_dir() -> PathBuf {
    // HOME wins so tests can redirect it
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join(".spriint");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".spriint")
}

/// Default location of the database (~/.spriint/spriint.db)
pub fn default_database_path() -> PathBuf {
    spriint_dir().join(DATABASE_FILE)
}
