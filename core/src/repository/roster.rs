use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::model::roster::Roster;

#[derive(Clone, Debug)]
pub struct FileRosterRepository {
    path: PathBuf,
}

impl FileRosterRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The stored roster, or the estate defaults when none has been saved.
    pub fn load(&self) -> Result<Roster> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file, using defaults");
            return Ok(Roster::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let roster: Roster = serde_json::from_str(&content)
            .with_context(|| format!("Malformed roster {}", self.path.display()))?;
        Ok(roster)
    }

    pub fn save(&self, roster: &Roster) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(roster)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let repo = FileRosterRepository::new(tmp.path().join("roster.json"));
        assert_eq!(repo.load().unwrap(), Roster::default());
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let repo = FileRosterRepository::new(tmp.path().join("estate/roster.json"));
        let roster = Roster {
            workers: vec!["F30 - Nadee".into()],
            sections: vec!["5A".into(), "5B".into()],
        };
        repo.save(&roster).unwrap();
        assert_eq!(repo.load().unwrap(), roster);
    }
}
