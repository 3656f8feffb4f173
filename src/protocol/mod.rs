//! Protocol field types and parsing entry points.
//!
//! This module is the public surface of the crate:
//!
//! - **Query strings**: [`parse_query_string`] decodes `a=1&b=2` style input
//!   into a [`Query`], percent-decoding keys and values. Repeated keys keep
//!   the last occurrence.
//!
//! - **Header blocks**: [`parse_headers`] decodes newline-separated
//!   `Key: value` lines into [`Headers`], folding names to lowercase and
//!   accumulating repeated names in line order.
//!
//! - **Errors**: [`ParseError`], raised only by the query parser on
//!   malformed percent escapes.
//!
//! Both entry points take `Option<&str>`; `None` and blank input decode to an
//! empty map rather than an error.

mod error;
pub use error::ParseError;

mod header;
pub use header::Headers;
pub use header::parse_headers;

mod query;
pub use query::Query;
pub use query::parse_query_string;
