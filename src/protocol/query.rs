use std::collections::HashMap;

use tracing::trace;

use crate::codec::percent_decode;
use crate::protocol::ParseError;

/// Decoded query string parameters.
///
/// Keys are unique; when the input repeats a key, the value from the last
/// occurrence wins. Keys and values are fully percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    data: HashMap<String, String>,
}

impl Query {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Decodes a query string such as `a=1&b=2` into a [`Query`].
///
/// `None` models an absent query; it decodes to an empty [`Query`], as does
/// empty or whitespace-only input.
///
/// # Errors
///
/// Returns [`ParseError`] when a key or value contains a malformed percent
/// escape. The failure aborts the whole parse; there is no partial result.
pub fn parse_query_string(input: Option<&str>) -> Result<Query, ParseError> {
    match input {
        Some(raw) => Query::try_from(raw),
        None => Ok(Query::default()),
    }
}

impl TryFrom<&str> for Query {
    type Error = ParseError;

    // a=1&c=2&b=3
    // a&b&c=2
    // a=1&a=2
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let mut data = HashMap::new();

        if raw.trim().is_empty() {
            return Ok(Query { data });
        }

        for segment in raw.split('&') {
            // only the first `=` separates key from value; a segment without
            // one is a bare key with an empty value
            let (key, value) = match segment.split_once('=') {
                Some((raw_key, raw_value)) => (percent_decode(raw_key)?, percent_decode(raw_value)?),
                None => (percent_decode(segment)?, String::new()),
            };

            // last occurrence wins
            data.insert(key, value);
        }

        trace!(params = data.len(), "decoded query string");

        Ok(Query { data })
    }
}
