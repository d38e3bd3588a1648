//! Core enums used throughout the driver.

use serde::{Deserialize, Serialize};

/// Operating mode for a batch run.
///
/// Fixed at configuration time and immutable afterwards. The mode decides
/// which structure files are eligible input, how per-job workspace
/// directories are prefixed, and which calculation flag xtb receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunMode {
    /// Geometry optimization (`--opt vtight`).
    #[default]
    #[serde(rename = "opt")]
    Optimize,
    /// Optimization followed by a Hessian calculation (`--ohess vtight`).
    #[serde(rename = "ohess")]
    OptimizeAndHessian,
    /// Hessian only, on a previously optimized geometry (`--hess`).
    #[serde(rename = "hess")]
    HessianOnly,
}

impl RunMode {
    /// Prefix for per-job workspace directory names.
    pub fn dir_prefix(&self) -> &'static str {
        match self {
            RunMode::Optimize => "opt_",
            RunMode::OptimizeAndHessian => "ohess_",
            RunMode::HessianOnly => "hess_",
        }
    }

    /// Mode-specific xtb arguments.
    pub fn xtb_args(&self) -> &'static [&'static str] {
        match self {
            RunMode::Optimize => &["--opt", "vtight"],
            RunMode::OptimizeAndHessian => &["--ohess", "vtight"],
            RunMode::HessianOnly => &["--hess"],
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Optimize => write!(f, "opt"),
            RunMode::OptimizeAndHessian => write!(f, "ohess"),
            RunMode::HessianOnly => write!(f, "hess"),
        }
    }
}

impl std::str::FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opt" => Ok(RunMode::Optimize),
            "ohess" => Ok(RunMode::OptimizeAndHessian),
            "hess" => Ok(RunMode::HessianOnly),
            other => Err(format!("Unknown run mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_prefix_per_mode() {
        assert_eq!(RunMode::Optimize.dir_prefix(), "opt_");
        assert_eq!(RunMode::OptimizeAndHessian.dir_prefix(), "ohess_");
        assert_eq!(RunMode::HessianOnly.dir_prefix(), "hess_");
    }

    #[test]
    fn xtb_args_per_mode() {
        assert_eq!(RunMode::Optimize.xtb_args(), ["--opt", "vtight"]);
        assert_eq!(RunMode::OptimizeAndHessian.xtb_args(), ["--ohess", "vtight"]);
        assert_eq!(RunMode::HessianOnly.xtb_args(), ["--hess"]);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("opt".parse::<RunMode>().unwrap(), RunMode::Optimize);
        assert_eq!("ohess".parse::<RunMode>().unwrap(), RunMode::OptimizeAndHessian);
        assert_eq!("hess".parse::<RunMode>().unwrap(), RunMode::HessianOnly);
        assert!("fast".parse::<RunMode>().is_err());
    }

    #[test]
    fn display_matches_from_str() {
        for mode in [
            RunMode::Optimize,
            RunMode::OptimizeAndHessian,
            RunMode::HessianOnly,
        ] {
            assert_eq!(mode.to_string().parse::<RunMode>().unwrap(), mode);
        }
    }
}
