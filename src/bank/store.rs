use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::bank::models::QuestionBank;

#[derive(Debug, thiserror::Error)]
pub enum BankStoreError {
    #[error("Invalid bank name '{0}'")]
    InvalidName(String),

    #[error("Question bank '{0}' does not exist")]
    NotFound(String),

    #[error("Failed to access bank storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize question bank: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Question banks stored as `<name>.json` files in one directory.
#[derive(Debug, Clone)]
pub struct BankStore {
    directory: PathBuf,
}

impl BankStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub async fn save(&self, name: &str, bank: &QuestionBank) -> Result<(), BankStoreError> {
        let path = self.path_for(name)?;
        tokio::fs::create_dir_all(&self.directory).await?;

        let bytes = serde_json::to_vec_pretty(bank)?;
        tokio::fs::write(&path, bytes).await?;
        info!("Saved question bank '{}' to {}", name, path.display());

        Ok(())
    }

    /// Loads a bank and pads every category to `rows` slots.
    pub async fn load(&self, name: &str, rows: usize) -> Result<QuestionBank, BankStoreError> {
        let path = self.path_for(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BankStoreError::NotFound(name.into()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut bank: QuestionBank = serde_json::from_slice(&bytes)?;
        bank.pad_to(rows);
        debug!("Loaded question bank '{}'", name);

        Ok(bank)
    }

    pub async fn list(&self) -> Result<Vec<String>, BankStoreError> {
        let mut entries = match tokio::fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if valid_name(stem) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    pub async fn is_reachable(&self) -> bool {
        tokio::fs::create_dir_all(&self.directory).await.is_ok()
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, BankStoreError> {
        if !valid_name(name) {
            return Err(BankStoreError::InvalidName(name.into()));
        }

        Ok(self.directory.join(format!("{}.json", name)))
    }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
