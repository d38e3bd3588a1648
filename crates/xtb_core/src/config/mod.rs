//! Configuration resolution for a batch run.
//!
//! A settings file (optional) and caller overrides collapse into one
//! validated [`BatchConfig`] before orchestration starts. Everything past
//! this point treats the configuration as immutable.

mod settings;

pub use settings::{BatchSettings, ExecutableSettings, Settings};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::{BatchError, BatchResult};
use crate::models::RunMode;

/// Errors that can occur while loading a settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Fully resolved configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Root folder scanned for structure files.
    pub root: PathBuf,
    /// Calculation requested for every input.
    pub mode: RunMode,
    /// Worker count forwarded to xtb. Validated to be >= 1.
    pub parallel: u32,
    /// Explicit xtb path; `None` means search PATH at batch start.
    pub executable: Option<PathBuf>,
}

impl BatchConfig {
    /// Build a config from file settings alone.
    pub fn from_settings(settings: &Settings) -> Self {
        let executable = if settings.executable.path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&settings.executable.path))
        };

        Self {
            root: PathBuf::from(&settings.batch.root_folder),
            mode: settings.batch.mode,
            parallel: settings.executable.parallel,
            executable,
        }
    }

    /// Check configuration-tier invariants.
    ///
    /// Failures here abort the run before any job starts; they are the
    /// only way this system exits non-zero.
    pub fn validate(&self) -> BatchResult<()> {
        if !self.root.is_dir() {
            return Err(BatchError::RootNotFound(self.root.clone()));
        }
        if self.parallel < 1 {
            return Err(BatchError::InvalidParallelism(self.parallel));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_settings_missing_file() {
        let result = load_settings(Path::new("/nonexistent/settings.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_settings_reads_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[batch]\nmode = \"ohess\"\n\n[executable]\nparallel = 8\n",
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.batch.mode, RunMode::OptimizeAndHessian);
        assert_eq!(settings.executable.parallel, 8);
    }

    #[test]
    fn load_settings_rejects_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "batch = not toml").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn from_settings_maps_empty_path_to_none() {
        let settings = Settings::default();
        let config = BatchConfig::from_settings(&settings);
        assert!(config.executable.is_none());

        let mut settings = Settings::default();
        settings.executable.path = "/opt/xtb/bin/xtb".to_string();
        let config = BatchConfig::from_settings(&settings);
        assert_eq!(config.executable, Some(PathBuf::from("/opt/xtb/bin/xtb")));
    }

    #[test]
    fn validate_rejects_missing_root() {
        let config = BatchConfig {
            root: PathBuf::from("/nonexistent/structures"),
            mode: RunMode::Optimize,
            parallel: 1,
            executable: None,
        };
        assert!(matches!(config.validate(), Err(BatchError::RootNotFound(_))));
    }

    #[test]
    fn validate_rejects_zero_parallelism() {
        let dir = tempdir().unwrap();
        let config = BatchConfig {
            root: dir.path().to_path_buf(),
            mode: RunMode::Optimize,
            parallel: 0,
            executable: None,
        };
        assert!(matches!(
            config.validate(),
            Err(BatchError::InvalidParallelism(0))
        ));
    }

    #[test]
    fn validate_accepts_existing_root() {
        let dir = tempdir().unwrap();
        let config = BatchConfig {
            root: dir.path().to_path_buf(),
            mode: RunMode::HessianOnly,
            parallel: 4,
            executable: None,
        };
        assert!(config.validate().is_ok());
    }
}
