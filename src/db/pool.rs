//! SQLite connection wrapper (lightweight for CLI usage).

use crate::utils::path::expand_tilde;
use rusqlite::{Connection, Result};
use std::fs;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating its parent directory if needed.
    pub fn new(path: &str) -> Result<Self> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            // a failure here surfaces as an open error just below
            let _ = fs::create_dir_all(parent);
        }

        let conn = Connection::open(&path)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}
