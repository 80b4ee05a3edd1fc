use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::nrbf::{NrbfError, Result};

const ZSTD_FRAME_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Container a record stream was stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
	/// Bytes handed to the reader as stored.
	None,
	/// zstd frame unwrapped before decoding.
	Zstd,
}

impl fmt::Display for Compression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		})
	}
}

/// Unwrap a zstd frame if present; every other input is returned untouched.
///
/// Record-level validation, including the leading header, is left to
/// [`RecordReader`](crate::nrbf::RecordReader).
pub fn unwrap_container(raw: Vec<u8>, max_decompressed_len: usize) -> Result<(Compression, Vec<u8>)> {
	if !raw.starts_with(&ZSTD_FRAME_MAGIC) {
		return Ok((Compression::None, raw));
	}

	let stream = zstd::stream::read::Decoder::new(raw.as_slice())?;
	let mut out = Vec::new();
	stream.take(max_decompressed_len as u64 + 1).read_to_end(&mut out)?;
	if out.len() > max_decompressed_len {
		return Err(NrbfError::DecompressedTooLarge {
			limit: max_decompressed_len,
		});
	}

	Ok((Compression::Zstd, out))
}
