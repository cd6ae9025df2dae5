use std::path::PathBuf;

use anyhow::{anyhow, Result};

const DEFAULT_DIR_NAME: &str = ".teaestate";
const SHEETS_DIR_NAME: &str = "sheets";
const ROSTER_FILE_NAME: &str = "roster.json";

/// Where sheets and the roster live.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Uses `data_dir` when given (the CLI fills it from `--data-dir` or
    /// `TEAESTATE_DATA_DIR`), else `~/.teaestate`.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        Ok(Self { data_dir })
    }

    pub fn sheets_dir(&self) -> PathBuf {
        self.data_dir.join(SHEETS_DIR_NAME)
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(ROSTER_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir() {
        let config = AppConfig::resolve(Some(PathBuf::from("/srv/estate"))).unwrap();
        assert_eq!(config.sheets_dir(), PathBuf::from("/srv/estate/sheets"));
        assert_eq!(config.roster_path(), PathBuf::from("/srv/estate/roster.json"));
    }
}
