use std::cmp::Reverse;

use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TimestampError;
use crate::models::LogRecord;

const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.(jpg|gif|png)$").unwrap());
static BROWSER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Firefox|Chrome|Safari|MSIE").unwrap());

/// Percentage of records whose path ends in `.jpg`, `.gif`, or `.png`
/// (case-insensitive, exactly these three). `0.0` for an empty slice.
pub fn image_hit_percentage(records: &[LogRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let hits = records
        .iter()
        .filter(|r| IMAGE_RE.is_match(&r.path))
        .count();
    hits as f64 * 100.0 / records.len() as f64
}

/// Most frequent browser token across all records.
///
/// Each `browser` field is searched (not anchored) for the leftmost of the
/// case-sensitive literals `Firefox`, `Chrome`, `Safari`, `MSIE`; records
/// containing none are excluded from the tally rather than counted as
/// unknown. The tally keeps tokens in first-seen order, so on a count tie
/// the token that appeared earliest in the record stream wins. `None` when
/// no record matched any token.
pub fn most_popular_browser(records: &[LogRecord]) -> Option<&str> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for record in records {
        if let Some(m) = BROWSER_RE.find(&record.browser) {
            let token = m.as_str();
            match tally.iter_mut().find(|(t, _)| *t == token) {
                Some((_, count)) => *count += 1,
                None => tally.push((token, 1)),
            }
        }
    }
    // strict comparison keeps the first-seen token on ties
    tally
        .into_iter()
        .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
        .map(|(token, _)| token)
}

/// Request counts per hour of day.
///
/// Every record's timestamp must match `MM/DD/YYYY HH:MM:SS`; the first one
/// that does not aborts the whole run. Only hours present in the data
/// appear in the result, sorted by count descending with ascending hour as
/// the tie-break.
pub fn hits_per_hour(records: &[LogRecord]) -> Result<Vec<(u32, usize)>, TimestampError> {
    let mut counts = [0usize; 24];
    for record in records {
        let parsed = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT)
            .map_err(|source| TimestampError {
                value: record.timestamp.clone(),
                source,
            })?;
        counts[parsed.hour() as usize] += 1;
    }
    let mut present: Vec<(u32, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(hour, &count)| (hour as u32, count))
        .collect();
    present.sort_unstable_by_key(|&(hour, count)| (Reverse(count), hour));
    Ok(present)
}
