use std::collections::HashMap;

use tracing::trace;

/// Decoded header fields.
///
/// Names are folded to lowercase; each name maps to its values in the order
/// the matching lines appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    data: HashMap<String, Vec<String>>,
}

impl Headers {
    /// Returns the values recorded for `name`, looked up case-insensitively.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.data.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.data.iter().map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

/// Decodes a block of `Key: value` lines into [`Headers`].
///
/// `None`, empty and whitespace-only input decode to an empty [`Headers`].
/// Malformed lines (no colon, or an empty name once trimmed) are dropped
/// rather than surfaced as errors; this parser never fails.
pub fn parse_headers(input: Option<&str>) -> Headers {
    input.map(Headers::from).unwrap_or_default()
}

impl From<&str> for Headers {
    // Host: 127.0.0.1:8080
    // User-Agent: curl/7.79.1
    // Accept: */*
    fn from(raw: &str) -> Self {
        let mut data: HashMap<String, Vec<String>> = HashMap::new();
        let mut dropped = 0usize;

        // lines are separated by line feeds only; a trailing `\r` is removed
        // by the trim below, not by the split
        for line in raw.split('\n') {
            let Some((raw_name, raw_value)) = line.split_once(':') else {
                if !line.trim().is_empty() {
                    dropped += 1;
                }
                continue;
            };

            let name = raw_name.trim();
            if name.is_empty() {
                dropped += 1;
                continue;
            }

            data.entry(name.to_lowercase()).or_default().push(raw_value.trim().to_string());
        }

        trace!(entries = data.len(), dropped, "decoded header block");

        Headers { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn absent_or_blank_input_is_empty() {
        assert!(parse_headers(None).is_empty());
        assert!(parse_headers(Some("")).is_empty());
        assert!(parse_headers(Some("  \n  ")).is_empty());
    }

    #[test]
    fn from_curl() {
        let block = "Host: 127.0.0.1:8080\r\nUser-Agent: curl/7.79.1\r\nAccept: */*";

        let headers = Headers::from(block);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("host"), Some(&["127.0.0.1:8080".to_string()][..]));
        assert_eq!(headers.get("user-agent"), Some(&["curl/7.79.1".to_string()][..]));
        assert_eq!(headers.get("accept"), Some(&["*/*".to_string()][..]));
        assert_eq!(headers.get("encoding"), None);
    }

    #[test]
    fn repeated_names_accumulate_in_order() {
        let headers = parse_headers(Some("A: 1\nA: 2"));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("a"), Some(&["1".to_string(), "2".to_string()][..]));
    }

    #[test]
    fn names_fold_to_lowercase() {
        let block = indoc! {"
            Accept: text/html
            ACCEPT: application/json
            accept: */*
        "};

        let headers = parse_headers(Some(block));

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("accept"),
            Some(&["text/html".to_string(), "application/json".to_string(), "*/*".to_string()][..])
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let headers = parse_headers(Some("Content-Type: text/plain"));

        assert_eq!(headers.get("Content-Type"), headers.get("content-type"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some(&["text/plain".to_string()][..]));
    }

    #[test]
    fn colonless_lines_are_dropped() {
        let headers = parse_headers(Some("NoColonLine\nB: x"));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("b"), Some(&["x".to_string()][..]));
    }

    #[test]
    fn empty_names_are_dropped() {
        assert!(parse_headers(Some(": x")).is_empty());
        assert!(parse_headers(Some(":")).is_empty());
        assert!(parse_headers(Some("  : value")).is_empty());
    }

    #[test]
    fn names_and_values_are_trimmed() {
        let headers = parse_headers(Some("  K  :  v  "));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("k"), Some(&["v".to_string()][..]));
    }

    #[test]
    fn value_keeps_later_colons() {
        let headers = parse_headers(Some("Host: 127.0.0.1:8080"));

        assert_eq!(headers.get("host"), Some(&["127.0.0.1:8080".to_string()][..]));
    }

    #[test]
    fn empty_value_is_kept() {
        let headers = parse_headers(Some("X-Empty:"));

        assert_eq!(headers.get("x-empty"), Some(&[String::new()][..]));
    }

    #[test]
    fn blank_lines_between_fields_are_ignored() {
        let block = indoc! {"
            A: 1

            B: 2
        "};

        let headers = parse_headers(Some(block));

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("a"), Some(&["1".to_string()][..]));
        assert_eq!(headers.get("b"), Some(&["2".to_string()][..]));
    }

    #[test]
    fn reparsing_serialized_form_is_identity() {
        let parsed = parse_headers(Some("Content-Type: text/html\nAccept: a\nAccept: b"));

        let mut lines = Vec::new();
        for (name, values) in parsed.iter() {
            for value in values {
                lines.push(format!("{name}: {value}"));
            }
        }
        let reparsed = parse_headers(Some(&lines.join("\n")));

        assert_eq!(parsed, reparsed);
    }
}
