use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed percent-encoding at byte {position}: {reason}")]
    MalformedEncoding { position: usize, reason: String },

    #[error("decoded text is not valid utf-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: FromUtf8Error,
    },
}

impl ParseError {
    pub fn malformed_encoding<S: ToString>(position: usize, reason: S) -> Self {
        Self::MalformedEncoding { position, reason: reason.to_string() }
    }
}
