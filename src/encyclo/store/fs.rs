use super::StorageBackend;
use crate::error::{EncycloError, Result};
use crate::model::Database;
use std::fs;
use std::path::PathBuf;

/// File-backed storage: the whole database in one JSON file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(EncycloError::Io)?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Database> {
        if !self.path.exists() {
            return Ok(Database::new());
        }
        let content = fs::read_to_string(&self.path).map_err(EncycloError::Io)?;
        let db: Database = serde_json::from_str(&content).map_err(EncycloError::Serialization)?;
        Ok(db)
    }

    fn save(&mut self, db: &Database) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(db).map_err(EncycloError::Serialization)?;

        // Atomic write: never leave a half-written database behind
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EncycloError::Storage(format!("Invalid path: {}", self.path.display())))?;
        let tmp_file = self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()));
        fs::write(&tmp_file, content).map_err(EncycloError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(EncycloError::Io)?;

        Ok(())
    }
}
