//! Parsing utilities for HTTP-style text fields
//!
//! This crate provides two small, allocation-light parsers that show up in
//! almost every piece of HTTP tooling: decoding a URL query string into a
//! key/value map, and decoding a block of `Key: value` header lines into a
//! map from lowercase field name to an ordered list of values.
//!
//! Both parsers are pure, single-pass string transforms. They perform no I/O,
//! hold no shared state, and return a fresh, caller-owned map per call, so
//! calls may run concurrently without any coordination.
//!
//! # Features
//!
//! - Strict percent-decoding of query keys and values, with precise errors
//!   on malformed escapes
//! - Last-occurrence-wins semantics for repeated query keys
//! - Case-insensitive header names via lowercase folding
//! - Ordered multi-value accumulation for repeated header lines
//! - Lenient handling of malformed header lines (dropped, never an error)
//!
//! # Example
//!
//! ```
//! use micro_fields::protocol::{parse_headers, parse_query_string};
//!
//! let query = parse_query_string(Some("name=John%20Doe&page=2"))?;
//! assert_eq!(query.get("name"), Some("John Doe"));
//! assert_eq!(query.get("page"), Some("2"));
//!
//! let headers = parse_headers(Some("Host: example.com\nAccept: text/html\nAccept: */*"));
//! assert_eq!(headers.get("host"), Some(&["example.com".to_string()][..]));
//! assert_eq!(headers.get("accept"), Some(&["text/html".to_string(), "*/*".to_string()][..]));
//! # Ok::<(), micro_fields::protocol::ParseError>(())
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`protocol`]: the public field types and parsing entry points
//! - [`codec`]: the percent-decoding primitive shared by the query parser
//!
//! # Error Handling
//!
//! Only the query parser can fail, and only on a malformed percent escape;
//! see [`protocol::ParseError`]. The header parser drops malformed lines by
//! policy and never fails.

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
