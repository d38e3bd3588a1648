//! xtb command-line construction.
//!
//! The chemistry parameters are fixed on purpose: this driver always runs
//! neutral, closed-shell systems in implicit water. Only the parallelism
//! hint and the run mode vary between batches.

use std::path::Path;

use crate::models::RunMode;

/// Total molecular charge passed to every job.
pub const CHARGE: i32 = 0;

/// Number of unpaired electrons passed to every job.
pub const UNPAIRED_ELECTRONS: u32 = 0;

/// Implicit solvation model identifier.
pub const SOLVENT: &str = "h2o";

/// Build the full xtb argument list for one job.
///
/// Pure: the same `(mode, parallel, input)` always yields the identical
/// sequence. The input path is always the final argument. Parallelism is
/// validated at configuration time, not here.
pub fn build_args(mode: RunMode, parallel: u32, input: &Path) -> Vec<String> {
    let mut args = vec![
        "--chrg".to_string(),
        CHARGE.to_string(),
        "--uhf".to_string(),
        UNPAIRED_ELECTRONS.to_string(),
        "--gbsa".to_string(),
        SOLVENT.to_string(),
        "--parallel".to_string(),
        parallel.to_string(),
    ];
    args.extend(mode.xtb_args().iter().map(|s| s.to_string()));
    args.push(input.to_string_lossy().to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn same_inputs_same_args() {
        let input = PathBuf::from("/data/mol.xyz");
        let first = build_args(RunMode::Optimize, 4, &input);
        let second = build_args(RunMode::Optimize, 4, &input);
        assert_eq!(first, second);
    }

    #[test]
    fn input_path_is_last() {
        let input = PathBuf::from("/data/mol.xyz");
        for mode in [
            RunMode::Optimize,
            RunMode::OptimizeAndHessian,
            RunMode::HessianOnly,
        ] {
            let args = build_args(mode, 1, &input);
            assert_eq!(args.last().unwrap(), "/data/mol.xyz");
        }
    }

    #[test]
    fn mode_flag_present_exactly_once() {
        let input = PathBuf::from("mol.xyz");

        let args = build_args(RunMode::Optimize, 1, &input);
        assert_eq!(args.iter().filter(|a| *a == "--opt").count(), 1);
        assert!(!args.contains(&"--ohess".to_string()));
        assert!(!args.contains(&"--hess".to_string()));

        let args = build_args(RunMode::OptimizeAndHessian, 1, &input);
        assert_eq!(args.iter().filter(|a| *a == "--ohess").count(), 1);

        let args = build_args(RunMode::HessianOnly, 1, &input);
        assert_eq!(args.iter().filter(|a| *a == "--hess").count(), 1);
        assert!(!args.contains(&"vtight".to_string()));
    }

    #[test]
    fn fixed_parameters_and_parallelism_forwarded() {
        let input = PathBuf::from("mol.xyz");
        let args = build_args(RunMode::Optimize, 6, &input);

        let expect_pair = |flag: &str, value: &str| {
            let pos = args.iter().position(|a| a == flag).unwrap();
            assert_eq!(args[pos + 1], value);
        };
        expect_pair("--chrg", "0");
        expect_pair("--uhf", "0");
        expect_pair("--gbsa", "h2o");
        expect_pair("--parallel", "6");
    }
}
