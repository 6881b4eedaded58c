use crate::domain::model::Entry;
use crate::utils::error::{MergeError, Result};

pub const FIELD_COUNT: usize = 3;
const DELIMITER: u8 = b',';

/// Parses a single `source,target,tags` line.
pub fn parse_line(line: &str) -> Result<Entry> {
    let fields: Vec<&str> = line.split(DELIMITER as char).collect();
    entry_from_fields(&fields, line)
}

/// Reads every non-blank line of `data` into entries, failing on the first
/// malformed one. Lines end at `\n` only; one trailing `\r` is dropped and a
/// lone `\r` inside a line is kept as data. Bytes that are not UTF-8 are
/// replaced rather than rejected.
pub fn read_entries(data: &[u8]) -> Result<Vec<Entry>> {
    // Quoting stays off: a quoted comma is handled by `rejoin_quoted`, and
    // records may have any field count so the error can report it.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .quoting(false)
        .flexible(true)
        .from_reader(data);

    let mut entries = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let mut fields: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        if let Some(last) = fields.last_mut() {
            if last.ends_with('\r') {
                last.pop();
            }
        }
        // a CRLF blank line
        if fields.len() == 1 && fields[0].is_empty() {
            continue;
        }

        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        let line = fields.join(",");
        let entry = entry_from_fields(&fields, &line).inspect_err(|_| {
            tracing::debug!(
                "Malformed record at line {}",
                record.position().map_or(0, |pos| pos.line())
            );
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

fn entry_from_fields(fields: &[&str], line: &str) -> Result<Entry> {
    let parse_error = || MergeError::LineParse {
        fields: fields.len(),
        line: line.to_string(),
    };

    if fields.len() < FIELD_COUNT {
        return Err(parse_error());
    }

    let fields = if fields.len() > FIELD_COUNT {
        rejoin_quoted(fields)
    } else {
        fields.iter().map(|field| (*field).to_string()).collect()
    };

    match fields.as_slice() {
        [source, target, tags] => Ok(Entry::new(source, target, tags)),
        _ => Err(parse_error()),
    }
}

/// Glues a value that was split on an embedded comma back together: the span
/// from the first field opening with `"` to the next field closing with `"`
/// becomes one field, quotes kept. The closing field is searched strictly
/// after the opening one, so a field like `"a"` that opens and closes itself
/// does not end the span: `"a",b",c,d` rejoins to `"a",b"`, `c`, `d`. Only
/// one span is repaired; several quoted values or unbalanced quotes come back
/// unchanged or wrongly joined.
fn rejoin_quoted(fields: &[&str]) -> Vec<String> {
    let owned = || fields.iter().map(|field| (*field).to_string()).collect();

    let Some(start) = fields.iter().position(|field| field.starts_with('"')) else {
        return owned();
    };
    let Some(end) = fields[start + 1..]
        .iter()
        .position(|field| field.ends_with('"'))
        .map(|offset| start + 1 + offset)
    else {
        return owned();
    };

    let mut rejoined: Vec<String> = fields[..start].iter().map(|f| (*f).to_string()).collect();
    rejoined.push(fields[start..=end].join(","));
    rejoined.extend(fields[end + 1..].iter().map(|f| (*f).to_string()));
    rejoined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let entry = parse_line("まち,city / town,1 2 3").unwrap();
        assert_eq!(entry, Entry::new("まち", "city / town", "1 2 3"));
    }

    #[test]
    fn test_parse_empty_tags_field() {
        let entry = parse_line("まち,city / town,").unwrap();
        assert_eq!(entry, Entry::new("まち", "city / town", ""));
        assert!(entry.tags().is_empty());
        assert_eq!(entry.to_string(), "まち,city / town,");
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse_line("まち,city / town").unwrap_err();
        match err {
            MergeError::LineParse { fields, line } => {
                assert_eq!(fields, 2);
                assert_eq!(line, "まち,city / town");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_quoted_comma_is_rejoined() {
        let entry = parse_line(r#"ことば,"word, term",1 2"#).unwrap();
        assert_eq!(entry.source(), "ことば");
        assert_eq!(entry.target(), r#""word, term""#);
        assert_eq!(entry.tags().to_string(), "1 2");
    }

    #[test]
    fn test_quoted_span_over_three_raw_fields() {
        let entry = parse_line(r#""a, b, c",x,1"#).unwrap();
        assert_eq!(entry.source(), r#""a, b, c""#);
        assert_eq!(entry.target(), "x");
    }

    #[test]
    fn test_extra_fields_without_quotes_fail() {
        let err = parse_line("まち,city,town,1").unwrap_err();
        assert!(matches!(err, MergeError::LineParse { fields: 4, .. }));
    }

    #[test]
    fn test_unbalanced_quote_fails() {
        let err = parse_line(r#"まち,"city,town,1"#).unwrap_err();
        assert!(matches!(err, MergeError::LineParse { fields: 4, .. }));
    }

    #[test]
    fn test_quote_fixup_leaving_extra_fields_fails() {
        let err = parse_line(r#"まち,"city, town",1,2"#).unwrap_err();
        assert!(matches!(err, MergeError::LineParse { fields: 5, .. }));
    }

    #[test]
    fn test_read_entries_skips_blank_lines() {
        let data = "まち,city / town,1 2 3\n\nうち,house / home,2 3\n";
        let entries = read_entries(data.as_bytes()).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new("まち", "city / town", "1 2 3"),
                Entry::new("うち", "house / home", "2 3"),
            ]
        );
    }

    #[test]
    fn test_read_entries_handles_crlf() {
        let data = "まち,city,1\r\nうち,house,\r\n";
        let entries = read_entries(data.as_bytes()).unwrap();
        assert_eq!(entries[1], Entry::new("うち", "house", ""));
    }

    #[test]
    fn test_read_entries_keeps_lone_carriage_return() {
        let entries = read_entries("まち,city\rtown,1\n".as_bytes()).unwrap();
        assert_eq!(entries, vec![Entry::new("まち", "city\rtown", "1")]);
    }

    #[test]
    fn test_read_entries_skips_crlf_blank_lines() {
        let data = "まち,city,1\r\n\r\nうち,house,\r\n";
        let entries = read_entries(data.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].to_string(), "うち,house,");
    }

    #[test]
    fn test_bad_line_error_quotes_whole_line() {
        let err = read_entries("まち,city\rtown\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Expected 3 fields, got 2 for まち,city\rtown");
    }

    #[test]
    fn test_read_entries_replaces_invalid_utf8() {
        let entries = read_entries(b"ma\xffchi,city,1\n").unwrap();
        assert_eq!(entries[0].source(), "ma\u{FFFD}chi");
        assert_eq!(entries[0].target(), "city");
    }

    #[test]
    fn test_quote_span_skips_self_closed_field() {
        let entry = parse_line(r#""a",b",c,d"#).unwrap();
        assert_eq!(entry.source(), r#""a",b""#);
        assert_eq!(entry.target(), "c");
        assert_eq!(entry.tags().to_string(), "d");
    }

    #[test]
    fn test_read_entries_fails_on_first_bad_line() {
        let data = "まち,city / town,1\nうち,house / home\nじんじゃ,shrine,4\n";
        let err = read_entries(data.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected 3 fields, got 2 for うち,house / home"
        );
    }

    #[test]
    fn test_read_entries_keeps_quotes_verbatim() {
        let data = "ことば,\"word, term\",1\n";
        let entries = read_entries(data.as_bytes()).unwrap();
        assert_eq!(entries[0].to_string(), "ことば,\"word, term\",1");
    }
}
