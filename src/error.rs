use thiserror::Error;

/// The one-shot download failed. No retry is attempted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Transport(#[source] Box<ureq::Error>),
    /// The response body could not be read.
    #[error("could not read response body: {0}")]
    Read(#[from] std::io::Error),
    /// The response body is not UTF-8 text.
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// A log line did not split into enough fields.
#[derive(Debug, Error)]
#[error("line {line}: expected 5 fields, found {found}")]
pub struct ParseError {
    /// 1-based line number in the downloaded log.
    pub line: usize,
    pub found: usize,
}

/// A record's timestamp did not match `MM/DD/YYYY HH:MM:SS`.
#[derive(Debug, Error)]
#[error("bad timestamp {value:?}: expected MM/DD/YYYY HH:MM:SS")]
pub struct TimestampError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}
