//! Settings struct with TOML-based sections.
//!
//! Every field carries a serde default so a partial settings file is
//! valid; missing sections fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::models::RunMode;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// What to run and where.
    #[serde(default)]
    pub batch: BatchSettings,

    /// How to invoke xtb.
    #[serde(default)]
    pub executable: ExecutableSettings,
}

/// Batch-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Root folder scanned recursively for structure files.
    #[serde(default = "default_root_folder")]
    pub root_folder: String,

    /// Run mode: "opt", "ohess", or "hess".
    #[serde(default)]
    pub mode: RunMode,
}

fn default_root_folder() -> String {
    ".".to_string()
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            root_folder: default_root_folder(),
            mode: RunMode::default(),
        }
    }
}

/// xtb executable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutableSettings {
    /// Explicit path to the xtb executable. Empty means: search PATH.
    #[serde(default)]
    pub path: String,

    /// Worker count forwarded to xtb via `--parallel`. Must be >= 1.
    #[serde(default = "default_parallel")]
    pub parallel: u32,
}

fn default_parallel() -> u32 {
    1
}

impl Default for ExecutableSettings {
    fn default() -> Self {
        Self {
            path: String::new(),
            parallel: default_parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_document() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.batch.root_folder, ".");
        assert_eq!(settings.batch.mode, RunMode::Optimize);
        assert!(settings.executable.path.is_empty());
        assert_eq!(settings.executable.parallel, 1);
    }

    #[test]
    fn partial_document_keeps_defaults_elsewhere() {
        let content = "[batch]\nmode = \"hess\"\n";
        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(settings.batch.mode, RunMode::HessianOnly);
        assert_eq!(settings.batch.root_folder, ".");
        assert_eq!(settings.executable.parallel, 1);
    }

    #[test]
    fn roundtrips_through_toml() {
        let mut settings = Settings::default();
        settings.batch.mode = RunMode::OptimizeAndHessian;
        settings.executable.parallel = 4;

        let serialized = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.batch.mode, RunMode::OptimizeAndHessian);
        assert_eq!(parsed.executable.parallel, 4);
    }
}
