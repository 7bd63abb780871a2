use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Occurs when a buffer view's metadata (element size, extents, strides)
    /// cannot be reconciled into a linear byte order. The call is rejected
    /// before any bytes are produced.
    InvalidBufferShape(String),
    /// Payload is longer than any length prefix can represent. Surfaced to
    /// the caller with no output produced.
    LengthOverflow { actual: u64, max: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidBufferShape(ref err) => write!(f, "Invalid buffer shape: {}", err),
            Error::LengthOverflow { actual, max } => write!(
                f,
                "Payload too long: was {} bytes, maximum encodable is {}",
                actual, max
            ),
        }
    }
}

impl std::error::Error for Error {}
