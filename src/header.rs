use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::MAX_PAYLOAD_LEN;

/// Which header family set an encode call draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingMode {
    /// Every byte payload, text or binary, uses the string header family.
    /// This is what decoders predating the string/binary split can read.
    LegacyRaw,
    /// String payloads use the string family, binary payloads the binary
    /// family, as designated by the caller.
    BinaryAware,
}

/// The caller's designation of a payload as string-like or binary. Never
/// inferred from payload content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadFamily {
    Str,
    Bin,
}

/// A chosen header: the marker plus the width of its big-endian length
/// prefix. Immutable once selected. A width of 0 means the marker byte
/// carries the length itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderSpec {
    pub marker: Marker,
    pub prefix_width: usize,
}

/// Pick the narrowest header able to carry a payload of `len` bytes under
/// the given mode and family designation. Fails with
/// [`Error::LengthOverflow`] past the 32-bit prefix ceiling.
pub fn select_header(len: u64, family: PayloadFamily, mode: EncodingMode) -> Result<HeaderSpec> {
    if len > MAX_PAYLOAD_LEN {
        return Err(Error::LengthOverflow {
            actual: len,
            max: MAX_PAYLOAD_LEN,
        });
    }
    let spec = match (mode, family) {
        (EncodingMode::LegacyRaw, _) => str_header(len),
        (EncodingMode::BinaryAware, PayloadFamily::Str) => str_header(len),
        (EncodingMode::BinaryAware, PayloadFamily::Bin) => bin_header(len),
    };
    Ok(spec)
}

// String family ladder. Lengths 32-255 skip the 8-bit form and go straight
// to the 16-bit one: decoders that predate the 8-bit string header must be
// able to read everything this path emits.
fn str_header(len: u64) -> HeaderSpec {
    if len <= 31 {
        HeaderSpec {
            marker: Marker::FixStr(len as u8),
            prefix_width: 0,
        }
    } else if len <= u16::MAX as u64 {
        HeaderSpec {
            marker: Marker::Str16,
            prefix_width: 2,
        }
    } else {
        HeaderSpec {
            marker: Marker::Str32,
            prefix_width: 4,
        }
    }
}

// Binary family ladder. Unlike the string family, this one does use its
// 8-bit form; the binary headers and their decoders arrived together.
fn bin_header(len: u64) -> HeaderSpec {
    if len <= u8::MAX as u64 {
        HeaderSpec {
            marker: Marker::Bin8,
            prefix_width: 1,
        }
    } else if len <= u16::MAX as u64 {
        HeaderSpec {
            marker: Marker::Bin16,
            prefix_width: 2,
        }
    } else {
        HeaderSpec {
            marker: Marker::Bin32,
            prefix_width: 4,
        }
    }
}
