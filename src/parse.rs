use crate::error::ParseError;
use crate::models::LogRecord;

const FIELD_COUNT: usize = 5;

/// Parse raw log lines into records.
///
/// Each line is one comma-delimited record with CSV quoting: a field may be
/// double-quoted to embed commas, and `""` inside a quoted field is a
/// literal quote. A line with fewer than five fields fails with its 1-based
/// line number; fields beyond the fifth are ignored. There is no header
/// detection — a header line is parsed as a record like any other.
pub fn parse_records(lines: &[String]) -> Result<Vec<LogRecord>, ParseError> {
    let mut records = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        let mut fields = split_fields(line);
        if fields.len() < FIELD_COUNT {
            return Err(ParseError {
                line: idx + 1,
                found: fields.len(),
            });
        }
        fields.truncate(FIELD_COUNT);
        let mut it = fields.into_iter();
        records.push(LogRecord {
            path: it.next().unwrap_or_default(),
            timestamp: it.next().unwrap_or_default(),
            browser: it.next().unwrap_or_default(),
            status: it.next().unwrap_or_default(),
            size: it.next().unwrap_or_default(),
        });
    }
    Ok(records)
}

/// Split one line on commas, honoring double-quoted fields.
///
/// A quote only opens a quoted section at the start of a field; elsewhere
/// it is a literal character. Inside quotes, `""` is an escaped quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_plain_records() {
        let records = parse_records(&lines(&[
            "/index.html,01/01/2020 10:00:00,Mozilla Firefox/88,200,1024",
        ]))
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "/index.html");
        assert_eq!(records[0].timestamp, "01/01/2020 10:00:00");
        assert_eq!(records[0].browser, "Mozilla Firefox/88");
        assert_eq!(records[0].status, "200");
        assert_eq!(records[0].size, "1024");
    }

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        let records = parse_records(&lines(&[
            r#"/a.png,01/01/2020 10:00:00,"Mozilla/5.0 (Windows, NT) Chrome/90",200,512"#,
        ]))
        .unwrap();
        assert_eq!(records[0].browser, "Mozilla/5.0 (Windows, NT) Chrome/90");
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(
            split_fields(r#""say ""hi""",b"#),
            vec![r#"say "hi""#.to_string(), "b".to_string()]
        );
    }

    #[test]
    fn too_few_fields_reports_line_number() {
        let err = parse_records(&lines(&[
            "/a.png,01/01/2020 10:00:00,Chrome,200,512",
            "/b.html,01/01/2020 11:00:00,Firefox",
        ]))
        .unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.found, 3);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let records =
            parse_records(&lines(&["/a.png,ts,Chrome,200,512,extra,more"])).unwrap();
        assert_eq!(records[0].size, "512");
    }

    #[test]
    fn header_line_is_not_skipped() {
        // A 5-column header parses as an ordinary (nonsense) record.
        let records = parse_records(&lines(&[
            "path,datetime,browser,status,size",
            "/a.png,01/01/2020 10:00:00,Chrome,200,512",
        ]))
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, "path");
    }

    #[test]
    fn empty_line_is_a_parse_error() {
        let err = parse_records(&lines(&[""])).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.found, 1);
    }
}
