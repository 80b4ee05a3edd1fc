//! Shared test helpers: fixture paths and a byte-level stream builder.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Appends record-stream bytes in wire order.
///
/// Record tags and type codes are passed as raw bytes so tests can also
/// produce invalid streams.
#[derive(Debug, Default, Clone)]
pub struct StreamBuilder {
	bytes: Vec<u8>,
}

impl StreamBuilder {
	/// Start an empty stream.
	pub fn new() -> Self {
		Self::default()
	}

	/// Finish and return the encoded bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}

	/// Current length in bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether nothing has been written yet.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Append one raw byte.
	pub fn u8(mut self, value: u8) -> Self {
		self.bytes.push(value);
		self
	}

	/// Append raw bytes.
	pub fn raw(mut self, value: &[u8]) -> Self {
		self.bytes.extend_from_slice(value);
		self
	}

	/// Append a little-endian `i32`.
	pub fn i32(self, value: i32) -> Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append a little-endian `u32`.
	pub fn u32(self, value: u32) -> Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append a 7-bit group varint.
	pub fn varint(mut self, mut value: u64) -> Self {
		loop {
			let group = (value & 0x7F) as u8;
			value >>= 7;
			if value == 0 {
				self.bytes.push(group);
				return self;
			}
			self.bytes.push(group | 0x80);
		}
	}

	/// Append a varint length followed by UTF-8 bytes.
	pub fn string(self, value: &str) -> Self {
		self.varint(value.len() as u64).raw(value.as_bytes())
	}

	/// Append an int32 byte length and the UTF-8 bytes.
	pub fn native_string(self, value: &str) -> Self {
		self.i32(value.len() as i32).raw(value.as_bytes())
	}

	/// Append a `String` primitive code and a length-prefixed string.
	pub fn string_with_code(self, value: &str) -> Self {
		self.u8(PRIMITIVE_STRING).string(value)
	}

	/// Append a `SerializedStreamHeader` record.
	pub fn header(self, root_id: i32, header_id: i32, major: i32, minor: i32) -> Self {
		self.u8(0).i32(root_id).i32(header_id).i32(major).i32(minor)
	}

	/// Append object id, name, member count, and member names.
	pub fn class_info(self, object_id: i32, name: &str, members: &[&str]) -> Self {
		let mut out = self.i32(object_id).string(name).i32(members.len() as i32);
		for member in members {
			out = out.string(member);
		}
		out
	}

	/// Append a `BinaryLibrary` record.
	pub fn library(self, library_id: i32, name: &str) -> Self {
		self.u8(12).i32(library_id).string(name)
	}

	/// Append a `BinaryObjectString` record.
	pub fn object_string(self, object_id: i32, value: &str) -> Self {
		self.u8(6).i32(object_id).string(value)
	}

	/// Append a `MessageEnd` record.
	pub fn message_end(self) -> Self {
		self.u8(11)
	}
}

const PRIMITIVE_STRING: u8 = 18;

#[cfg(test)]
mod tests {
	use super::StreamBuilder;

	#[test]
	fn varint_uses_continuation_bits() {
		assert_eq!(StreamBuilder::new().varint(0).build(), [0]);
		assert_eq!(StreamBuilder::new().varint(127).build(), [0x7F]);
		assert_eq!(StreamBuilder::new().varint(300).build(), [0xAC, 0x02]);
	}

	#[test]
	fn header_is_tag_and_four_ints() {
		let bytes = StreamBuilder::new().header(1, -1, 1, 0).build();
		assert_eq!(bytes.len(), 17);
		assert_eq!(bytes[0], 0);
		assert_eq!(&bytes[5..9], &(-1_i32).to_le_bytes());
	}
}
