//! Test-only helpers for roster configs and inputs.

use std::fs;
use std::path::Path;

use crate::core::types::GradePolicy;
use crate::io::config::RosterConfig;

/// Config pointing at `input.txt` / `output.txt` inside `dir`.
pub fn config_in(dir: &Path, grade_policy: GradePolicy) -> RosterConfig {
    RosterConfig {
        input_path: dir.join("input.txt"),
        output_path: dir.join("output.txt"),
        grade_policy,
    }
}

/// Write `lines` to `dir/input.txt`, newline-terminated.
pub fn write_input(dir: &Path, lines: &[&str]) {
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(dir.join("input.txt"), contents).expect("write input.txt");
}

/// Read `dir/output.txt`.
pub fn read_output(dir: &Path) -> String {
    fs::read_to_string(dir.join("output.txt")).expect("read output.txt")
}
