//! Line parsing for roster input.
//!
//! Accepted line shapes (fields separated by a single space):
//!
//! - `First Last Grade IEP`
//! - `First Middle Last Grade IEP`
//!
//! Every field parser returns a `Result`; a line produces a record only if all
//! of its fields parse. Parsing a whole document is a fold over its lines.

use crate::core::types::{GradePolicy, ParsedRoster, SkipReason, SkippedLine, StudentRecord};

const FIELD_SEPARATOR: char = ' ';

/// Parse every line of `input`, keeping records and skipped lines in input order.
pub fn parse_roster(input: &str, policy: GradePolicy) -> ParsedRoster {
    split_lines(input)
        .enumerate()
        .fold(ParsedRoster::default(), |mut parsed, (idx, raw)| {
            let line = raw.trim();
            let outcome = if line.is_empty() {
                Err(SkipReason::Blank)
            } else {
                parse_line(line, policy)
            };
            match outcome {
                Ok(record) => parsed.records.push(record),
                Err(reason) => parsed.skipped.push(SkippedLine {
                    line_no: idx + 1,
                    content: line.to_string(),
                    reason,
                }),
            }
            parsed
        })
}

/// Split on `\r\n`, `\n`, `\r` and the Unicode line separators.
///
/// `\r\n` counts as one break, and a single trailing break does not start
/// another line.
fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let body = input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix(is_line_break))
        .unwrap_or(input);
    (!input.is_empty())
        .then_some(body)
        .into_iter()
        .flat_map(|body| body.split("\r\n"))
        .flat_map(|chunk| chunk.split(is_line_break))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Parse one trimmed, non-empty line into a record.
pub fn parse_line(line: &str, policy: GradePolicy) -> Result<StudentRecord, SkipReason> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields.as_slice() {
        [first, last, grade, iep] => Ok(StudentRecord::without_middle(
            *first,
            *last,
            parse_grade(grade, policy)?,
            parse_iep(iep)?,
        )),
        [first, middle, last, grade, iep] => Ok(StudentRecord::new(
            *first,
            *middle,
            *last,
            parse_grade(grade, policy)?,
            parse_iep(iep)?,
        )),
        _ => Err(SkipReason::InvalidFormat {
            fields: fields.len(),
        }),
    }
}

/// Parse a base-10 grade. `Lenient` maps any failure to 0.
pub fn parse_grade(token: &str, policy: GradePolicy) -> Result<i64, SkipReason> {
    match (token.parse::<i64>(), policy) {
        (Ok(grade), _) => Ok(grade),
        (Err(_), GradePolicy::Lenient) => Ok(0),
        (Err(_), GradePolicy::Strict) => Err(SkipReason::InvalidGrade {
            token: token.to_string(),
        }),
    }
}

/// `y`/`n` in any case; everything else is rejected.
pub fn parse_iep(token: &str) -> Result<bool, SkipReason> {
    match token.to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(SkipReason::InvalidIep {
            token: token.to_string(),
        }),
    }
}
