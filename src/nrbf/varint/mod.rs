//! 7-bit group variable-length integers and the strings they prefix.

use crate::nrbf::bytes::Cursor;
use crate::nrbf::{DecodeOptions, NrbfError, Result};

/// Maximum number of 7-bit groups consumed by one varint.
pub const VARINT_MAX_GROUPS: u32 = 5;

const GROUP_BITS: u32 = 7;
const CONTINUATION: u8 = 0x80;

/// Decode a variable-length unsigned integer, least-significant group first.
///
/// Decoding stops at the first byte with a clear high bit or after
/// [`VARINT_MAX_GROUPS`] bytes, whichever comes first. A fifth byte that
/// still has its continuation bit set is taken as final and all seven of its
/// payload bits are kept, so the result is at most 35 bits wide and never
/// wraps.
pub fn read_varint(cursor: &mut Cursor<'_>) -> Result<u64> {
	let mut value = 0_u64;
	for group in 0..VARINT_MAX_GROUPS {
		let byte = cursor.read_u8()?;
		value |= u64::from(byte & !CONTINUATION) << (group * GROUP_BITS);
		if byte & CONTINUATION == 0 {
			break;
		}
	}
	Ok(value)
}

/// Decode a varint length followed by that many UTF-8 bytes.
pub fn read_length_prefixed_string(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<String> {
	let len = read_varint(cursor)?;
	if len > opt.max_string_len as u64 {
		return Err(NrbfError::CollectionTooLarge {
			kind: "string length",
			count: len,
			max: opt.max_string_len,
		});
	}

	let at = cursor.pos();
	let bytes = cursor.read_exact(len as usize)?;
	let text = std::str::from_utf8(bytes).map_err(|source| NrbfError::InvalidUtf8 { at, source })?;
	Ok(text.to_owned())
}

#[cfg(test)]
mod tests;
