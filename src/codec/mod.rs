//! Decoding primitives shared by the protocol parsers.
//!
//! Currently this is just strict percent-decoding, used by the query string
//! parser to turn `%XX` escapes back into literal text.

mod percent;

pub use percent::percent_decode;
