use crate::error::Result;
use crate::header::{select_header, EncodingMode, PayloadFamily};
use crate::view::BufferView;

/// Encode a byte payload as one self-contained wire segment: tag byte,
/// big-endian length prefix (if the header has one), then the payload bytes
/// unmodified. The caller picks the family designation and mode; nothing is
/// inferred from content.
pub fn encode(view: &BufferView, family: PayloadFamily, mode: EncodingMode) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_into(&mut buf, view, family, mode)?;
    Ok(buf)
}

/// Encode a byte payload onto the end of an existing output vector, for use
/// inside a larger message. On error the vector is left exactly as it was:
/// header selection happens before the first byte is appended.
pub fn encode_into(
    buf: &mut Vec<u8>,
    view: &BufferView,
    family: PayloadFamily,
    mode: EncodingMode,
) -> Result<()> {
    let len = view.len();
    let spec = select_header(len, family, mode)?;
    let payload = view.flatten();
    buf.reserve(1 + spec.prefix_width + payload.len());
    buf.push(spec.marker.into());
    match spec.prefix_width {
        1 => buf.push(len as u8),
        2 => buf.extend_from_slice(&(len as u16).to_be_bytes()),
        4 => buf.extend_from_slice(&(len as u32).to_be_bytes()),
        _ => (),
    }
    buf.extend_from_slice(&payload);
    Ok(())
}
