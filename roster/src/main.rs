//! Student roster reporter.
//!
//! Reads `input.txt`, writes the summary report to `output.txt`. Paths and the
//! grade policy can come from `roster.toml` or from flags.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::debug;

use roster::core::types::GradePolicy;
use roster::exit_codes;
use roster::io::config::{
    ConfigOverrides, DEFAULT_CONFIG_PATH, RosterConfig, apply_overrides, load_config,
};
use roster::logging;
use roster::run::run_roster;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Parse a student list and write a summary report"
)]
struct Cli {
    /// TOML config file. Missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Student list to read (default `input.txt`).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Report destination (default `output.txt`).
    #[arg(long)]
    output: Option<PathBuf>,

    /// How to handle non-numeric grades (default: record grade 0).
    #[arg(long, value_enum)]
    grade_policy: Option<GradeArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GradeArg {
    /// Skip the line.
    Strict,
    /// Record grade 0.
    Lenient,
}

impl From<GradeArg> for GradePolicy {
    fn from(arg: GradeArg) -> Self {
        match arg {
            GradeArg::Strict => GradePolicy::Strict,
            GradeArg::Lenient => GradePolicy::Lenient,
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let cfg = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            println!("Error: {err:#}");
            std::process::exit(exit_codes::INVALID);
        }
    };

    let code = {
        let mut stdout = std::io::stdout().lock();
        match run_roster(&cfg, &mut stdout) {
            Ok(outcome) => outcome.exit_code(),
            Err(err) => {
                eprintln!("Error: {err:#}");
                exit_codes::IO_FAILURE
            }
        }
    };
    std::process::exit(code);
}

/// CLI flag > config file > default.
fn resolve_config(cli: &Cli) -> Result<RosterConfig> {
    let base = load_config(&cli.config)?;
    let overrides = ConfigOverrides {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
        grade_policy: cli.grade_policy.map(GradePolicy::from),
    };
    let cfg = apply_overrides(base, &overrides)?;
    debug!(?cfg, "config resolved");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args_uses_defaults() {
        let cli = Cli::parse_from(["roster"]);
        assert_eq!(cli.config, PathBuf::from("roster.toml"));
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.grade_policy.is_none());
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::parse_from([
            "roster",
            "--input",
            "in.txt",
            "--output",
            "out.txt",
            "--grade-policy",
            "lenient",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.grade_policy, Some(GradeArg::Lenient));
    }

    #[test]
    fn resolve_prefers_flags_over_config_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = temp.path().join("roster.toml");
        std::fs::write(
            &config,
            "input_path = \"a.txt\"\noutput_path = \"b.txt\"\ngrade_policy = \"strict\"\n",
        )
        .expect("write config");

        let cli = Cli::parse_from([
            "roster",
            "--config",
            config.to_str().expect("utf8 path"),
            "--output",
            "c.txt",
            "--grade-policy",
            "lenient",
        ]);
        let cfg = resolve_config(&cli).expect("resolve");
        assert_eq!(cfg.input_path, PathBuf::from("a.txt"));
        assert_eq!(cfg.output_path, PathBuf::from("c.txt"));
        assert_eq!(cfg.grade_policy, GradePolicy::Lenient);
    }
}
