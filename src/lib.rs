//! raw-pack is the byte-payload layer of a compact binary serialization
//! format: it takes a raw byte sequence - a string or a binary blob, possibly
//! described by a multi-dimensional, strided buffer view - and produces the
//! canonical, length-prefixed wire segment for it, always using the smallest
//! header that can express the payload's length.
//!
//! Three pieces cooperate to do this:
//!
//! - [`BufferView`] describes the source memory (element size, extents, byte
//!   strides) and flattens it into one contiguous byte sequence, borrowing
//!   when the view is already contiguous.
//! - [`select_header`] picks the minimal header family and prefix width for a
//!   payload length, under the caller's [`EncodingMode`] and
//!   [`PayloadFamily`].
//! - [`encode`] / [`encode_into`] lay down the tag byte, the big-endian
//!   length prefix, and the payload bytes, in that order.
//!
//! The two encoding modes exist for wire compatibility. [`LegacyRaw`] puts
//! every byte payload - text or binary - into the string header family, which
//! is all that older-generation decoders understand. [`BinaryAware`] keeps
//! strings in the string family and routes binary payloads to the dedicated
//! binary headers. The split is the caller's decision; nothing is inferred
//! from payload content.
//!
//! The string family deliberately never uses its 8-bit-prefixed header:
//! lengths from 32 to 65535 bytes go straight to the 16-bit form. The binary
//! family does use its 8-bit form. That asymmetry keeps string output
//! readable by decoders that predate the 8-bit string header, and it is part
//! of the wire contract, not an optimization left on the table.
//!
//! ```
//! use raw_pack::{encode, BufferView, EncodingMode, PayloadFamily};
//!
//! let view = BufferView::from_bytes(b"hello");
//! let out = encode(&view, PayloadFamily::Str, EncodingMode::LegacyRaw).unwrap();
//! assert_eq!(out, b"\xa5hello");
//! ```
//!
//! [`LegacyRaw`]: EncodingMode::LegacyRaw
//! [`BinaryAware`]: EncodingMode::BinaryAware

mod encode;
mod error;
mod header;
mod marker;
mod view;

pub use self::encode::{encode, encode_into};
pub use self::error::{Error, Result};
pub use self::header::{select_header, EncodingMode, HeaderSpec, PayloadFamily};
pub use self::marker::Marker;
pub use self::view::BufferView;

/// The longest payload any header in either family can carry: the 32-bit
/// length prefix ceiling. Anything longer fails with
/// [`Error::LengthOverflow`] before a single byte is produced.
pub const MAX_PAYLOAD_LEN: u64 = u32::MAX as u64;
