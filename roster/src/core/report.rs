//! Rendering of the student summary report.

use crate::core::types::StudentRecord;

/// Render the report text for `records`, one line per record in the given order.
///
/// Every line, including the last, is newline-terminated.
pub fn render_report(records: &[StudentRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!(
        "There are {} students in the student list.",
        records.len()
    ));
    lines.push("The students are:".to_string());
    lines.extend(records.iter().map(StudentRecord::to_string));

    let mut buf = lines.join("\n");
    buf.push('\n');
    buf
}
