// codec.rs — Line-oriented text encoding for persisted goal state.
//
// Layout of a saved file:
//
//   line 1: score
//   line 2: streak days
//   line 3: last event date (ISO-8601, `0001-01-01T00:00:00.0000000` = never)
//   line 4..: one goal per line, `<TypeTag>:<field>,<field>,...`
//
// Fields are positional and unescaped. The type tag is split off at the
// first ':' and the remainder is split on every ','. Text containing a
// comma therefore can't round-trip; the CLI rejects it on input and the
// decoder reports a field-count mismatch instead of shifting fields.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::checklist::ChecklistGoal;
use crate::error::GoalError;
use crate::eternal::EternalGoal;
use crate::goal::{Goal, GoalBehavior};
use crate::simple::SimpleGoal;

pub const SIMPLE_TAG: &str = "SimpleGoal";
pub const ETERNAL_TAG: &str = "EternalGoal";
pub const CHECKLIST_TAG: &str = "ChecklistGoal";

pub const TYPE_SEPARATOR: char = ':';
pub const FIELD_SEPARATOR: char = ',';

const NEVER: &str = "0001-01-01T00:00:00.0000000";

/// The three header lines of a saved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreHeader {
    pub score: u64,
    pub streak_days: u32,
    pub last_event_date: Option<NaiveDate>,
}

/// A goal line that was dropped during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// 1-based line number in the saved file.
    pub line: usize,
    pub reason: String,
}

/// A fully decoded save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: StoreHeader,
    pub goals: Vec<Goal>,
    pub skipped: Vec<SkippedRecord>,
}

pub(crate) fn encode_record(tag: &str, fields: &[String]) -> String {
    let mut out = String::from(tag);
    out.push(TYPE_SEPARATOR);
    out.push_str(&fields.join(&FIELD_SEPARATOR.to_string()));
    out
}

pub(crate) fn format_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Encode the header and goals as the full file body (trailing newline included).
pub fn encode_document(header: &StoreHeader, goals: &[Goal]) -> String {
    let mut out = String::new();
    out.push_str(&header.score.to_string());
    out.push('\n');
    out.push_str(&header.streak_days.to_string());
    out.push('\n');
    out.push_str(&encode_date(header.last_event_date));
    out.push('\n');
    for goal in goals {
        out.push_str(&goal.to_record());
        out.push('\n');
    }
    out
}

/// Decode a full file body.
///
/// A bad header line fails the whole decode. A bad goal line is collected
/// in [`Document::skipped`] and decoding carries on with the next line.
pub fn decode_document(text: &str) -> Result<Document, GoalError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let score = header_line(&mut lines, 1, "score")?;
    let score = parse_number::<u64>(1, "score", score)?;
    let streak_days = header_line(&mut lines, 2, "streak days")?;
    let streak_days = parse_number::<u32>(2, "streak days", streak_days)?;
    let last_event_date = header_line(&mut lines, 3, "last event date")?;
    let last_event_date = decode_date(3, last_event_date)?;

    let mut goals = Vec::new();
    let mut skipped = Vec::new();
    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        match decode_goal(line_no, line) {
            Ok(goal) => goals.push(goal),
            Err(GoalError::MalformedRecord { line, reason }) => {
                tracing::warn!(line, %reason, "skipping malformed goal record");
                skipped.push(SkippedRecord { line, reason });
            }
            Err(other) => return Err(other),
        }
    }

    Ok(Document {
        header: StoreHeader {
            score,
            streak_days,
            last_event_date,
        },
        goals,
        skipped,
    })
}

/// Decode one goal line.
///
/// Progress is rebuilt by replaying events through the goal's own
/// `record_event`, never by assigning counters.
pub fn decode_goal(line_no: usize, line: &str) -> Result<Goal, GoalError> {
    let (tag, rest) = line.split_once(TYPE_SEPARATOR).ok_or_else(|| {
        GoalError::malformed(
            line_no,
            format!("missing '{}' after type tag", TYPE_SEPARATOR),
        )
    })?;
    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).collect();

    match tag {
        SIMPLE_TAG => {
            expect_fields(line_no, tag, &fields, 4)?;
            let base_points = parse_number(line_no, "base points", fields[2])?;
            let complete = parse_flag(line_no, fields[3])?;
            let mut goal = SimpleGoal::new(fields[0], fields[1], base_points);
            if complete {
                goal.record_event();
            }
            Ok(goal.into())
        }
        ETERNAL_TAG => {
            expect_fields(line_no, tag, &fields, 3)?;
            let base_points = parse_number(line_no, "base points", fields[2])?;
            Ok(EternalGoal::new(fields[0], fields[1], base_points).into())
        }
        CHECKLIST_TAG => {
            expect_fields(line_no, tag, &fields, 6)?;
            let base_points = parse_number(line_no, "base points", fields[2])?;
            let amount_completed: u32 = parse_number(line_no, "amount completed", fields[3])?;
            let target: u32 = parse_number(line_no, "target", fields[4])?;
            let bonus = parse_number(line_no, "bonus", fields[5])?;
            if target == 0 {
                return Err(GoalError::malformed(
                    line_no,
                    "checklist target must be at least 1",
                ));
            }
            if amount_completed > target {
                tracing::warn!(
                    line = line_no,
                    amount_completed,
                    target,
                    "checklist progress exceeds target, clamping"
                );
            }

            let mut goal = ChecklistGoal::new(fields[0], fields[1], base_points, target, bonus);
            for _ in 0..amount_completed.min(target) {
                goal.record_event();
            }
            Ok(goal.into())
        }
        other => Err(GoalError::malformed(
            line_no,
            format!("unknown goal type '{}'", other),
        )),
    }
}

/// Persisted form of the last event date.
pub fn encode_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{}T00:00:00.0000000", date.format("%Y-%m-%d")),
        None => NEVER.to_string(),
    }
}

/// Parse a persisted date. Accepts the local form written by
/// [`encode_date`], RFC 3339 with an offset, and a bare `YYYY-MM-DD`.
/// Anything in year 1 means "never".
pub fn decode_date(line_no: usize, raw: &str) -> Result<Option<NaiveDate>, GoalError> {
    let raw = raw.trim();
    let date = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.date_naive()
    } else if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        dt.date()
    } else if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        date
    } else {
        return Err(GoalError::malformed(
            line_no,
            format!("unrecognized date '{}'", raw),
        ));
    };

    Ok((date.year() > 1).then_some(date))
}

/// Whether `text` can be stored in a goal field without breaking the format.
pub fn is_encodable(text: &str) -> bool {
    !text.contains(FIELD_SEPARATOR) && !text.contains('\n') && !text.contains('\r')
}

fn header_line<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    line_no: usize,
    what: &str,
) -> Result<&'a str, GoalError> {
    lines
        .next()
        .map(|(_, line)| line)
        .ok_or_else(|| GoalError::malformed(line_no, format!("missing {} header", what)))
}

fn expect_fields(
    line_no: usize,
    tag: &str,
    fields: &[&str],
    expected: usize,
) -> Result<(), GoalError> {
    if fields.len() != expected {
        let found = fields.len();
        return Err(GoalError::malformed(
            line_no,
            format!("{} expects {} fields, found {}", tag, expected, found),
        ));
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(
    line_no: usize,
    what: &str,
    raw: &str,
) -> Result<T, GoalError> {
    let raw = raw.trim();
    match raw.parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(GoalError::malformed(
            line_no,
            format!("invalid {} '{}'", what, raw),
        )),
    }
}

fn parse_flag(line_no: usize, raw: &str) -> Result<bool, GoalError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(GoalError::malformed(
            line_no,
            format!("invalid completion flag '{}'", raw.trim()),
        )),
    }
}
