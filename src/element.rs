use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Error, ErrorKind, Write};

use crate::icontype::OSType;

/// The length of an icon element header, in bytes:
pub const ICON_ELEMENT_HEADER_LENGTH: u32 = 8;

/// Returns the encoded length of an element with a payload of
/// `payload_len` bytes, including the length of the header, or `None` if
/// that length does not fit in the element's 32-bit length field.
pub fn element_length(payload_len: usize) -> Option<u32> {
    u32::try_from(payload_len)
        .ok()
        .and_then(|len| len.checked_add(ICON_ELEMENT_HEADER_LENGTH))
}

/// Writes one icon element (OSType, big-endian total length, then the
/// payload) to within an ICNS file.
pub fn write_element<W: Write>(ostype: OSType,
                               payload: &[u8],
                               mut writer: W)
                               -> io::Result<()> {
    let length = element_length(payload.len()).ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput,
                   format!("'{}' payload is too large ({} bytes)",
                           ostype,
                           payload.len()))
    })?;
    let OSType(ref raw_ostype) = ostype;
    writer.write_all(raw_ostype)?;
    writer.write_u32::<BigEndian>(length)?;
    writer.write_all(payload)?;
    Ok(())
}
