use std::fmt;

/// Convenient alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can be produced while encoding or decoding VLQ values.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller passed a value outside the codec's input domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input bytes did not form a complete, in-range encoded value.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl Error {
    pub(crate) fn invalid<T: fmt::Display>(msg: T) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    pub(crate) fn malformed<T: fmt::Display>(msg: T) -> Self {
        Self::MalformedInput(msg.to_string())
    }
}
