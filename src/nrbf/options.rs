use crate::nrbf::{NrbfError, Result};

/// Runtime limits applied while decoding records.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum element count for any count-driven list (members, dimensions, arguments).
	pub max_collection_len: usize,
	/// Maximum byte length accepted for one length-prefixed string.
	pub max_string_len: usize,
	/// Maximum unwrapped size of a zstd-compressed input.
	pub max_decompressed_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_collection_len: 1 << 20,
			max_string_len: 64 * 1024 * 1024,
			max_decompressed_len: 512 * 1024 * 1024,
		}
	}
}

impl DecodeOptions {
	/// Preset for untrusted input where small limits are preferable.
	pub fn strict() -> Self {
		Self {
			max_collection_len: 4096,
			max_string_len: 1024 * 1024,
			max_decompressed_len: 64 * 1024 * 1024,
		}
	}

	/// Validate a signed int32 count read from the stream and widen it.
	pub(crate) fn check_count(&self, kind: &'static str, len: i32, at: usize) -> Result<usize> {
		let count = usize::try_from(len).map_err(|_| NrbfError::NegativeLength { kind, len, at })?;
		if count > self.max_collection_len {
			return Err(NrbfError::CollectionTooLarge {
				kind,
				count: count as u64,
				max: self.max_collection_len,
			});
		}
		Ok(count)
	}
}
