//! Orchestration for a single roster run: read, parse, render, write.
//!
//! I/O failures are reported to the operator and never abort the run early:
//! a failed read still produces an (empty) report, and a failed write only
//! loses the rendered text.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::parser::parse_roster;
use crate::core::report::render_report;
use crate::core::types::{SkipReason, SkippedLine};
use crate::exit_codes;
use crate::io::config::RosterConfig;
use crate::io::roster_file::{read_roster, write_report};

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Records included in the report.
    pub students: usize,
    /// Lines skipped (blank or rejected).
    pub skipped: usize,
    pub read_failed: bool,
    pub write_failed: bool,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.read_failed || self.write_failed {
            exit_codes::IO_FAILURE
        } else {
            exit_codes::OK
        }
    }
}

/// Run the roster pipeline for `cfg`, writing operator messages to `out`.
///
/// Returns an error only when `out` itself cannot be written.
pub fn run_roster<W: Write>(cfg: &RosterConfig, out: &mut W) -> Result<RunOutcome> {
    debug!(
        input = %cfg.input_path.display(),
        output = %cfg.output_path.display(),
        policy = ?cfg.grade_policy,
        "starting roster run"
    );

    let (contents, read_failed) = match read_roster(&cfg.input_path) {
        Ok(contents) => (contents, false),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "input read failed");
            writeln!(out, "Error: {err:#}").context("write operator message")?;
            (String::new(), true)
        }
    };

    let parsed = parse_roster(&contents, cfg.grade_policy);
    for skipped in &parsed.skipped {
        writeln!(out, "{}", skip_message(skipped)).context("write operator message")?;
    }
    debug!(
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "roster parsed"
    );

    let report = render_report(&parsed.records);
    let write_failed = match write_report(&cfg.output_path, &report) {
        Ok(()) => {
            info!(path = %cfg.output_path.display(), students = parsed.records.len(), "report written");
            writeln!(
                out,
                "Wrote {} students to {}.",
                parsed.records.len(),
                cfg.output_path.display()
            )
            .context("write operator message")?;
            false
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "report write failed");
            writeln!(out, "Error: {err:#}").context("write operator message")?;
            true
        }
    };

    Ok(RunOutcome {
        students: parsed.records.len(),
        skipped: parsed.skipped.len(),
        read_failed,
        write_failed,
    })
}

/// Operator-facing notice for a skipped line.
pub fn skip_message(skipped: &SkippedLine) -> String {
    let reason = &skipped.reason;
    match reason {
        SkipReason::Blank => format!("{reason}. Skipping."),
        SkipReason::InvalidFormat { .. } => format!("{reason}: {}", skipped.content),
        SkipReason::InvalidGrade { .. } | SkipReason::InvalidIep { .. } => {
            format!("{reason} (line {}). Skipping.", skipped.line_no)
        }
    }
}
