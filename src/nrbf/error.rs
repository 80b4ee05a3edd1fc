use thiserror::Error;

use crate::nrbf::RecordType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NrbfError>;

/// Errors produced while loading and decoding remoting binary streams.
#[derive(Debug, Error)]
pub enum NrbfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// zstd output exceeded `DecodeOptions::max_decompressed_len`.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected end of stream at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A tag byte does not match any value of its enumeration.
	#[error("invalid {kind} tag {value} at offset {at}")]
	InvalidTag {
		/// Enumeration the byte was decoded against.
		kind: &'static str,
		/// Offending raw value.
		value: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidUtf8 {
		/// Byte offset where the string payload starts.
		at: usize,
		/// Underlying conversion failure.
		#[source]
		source: std::str::Utf8Error,
	},
	/// `Char` primitive did not hold a well-formed UTF-8 scalar.
	#[error("invalid char encoding at offset {at}")]
	InvalidChar {
		/// Byte offset of the first char byte.
		at: usize,
	},
	/// A record of the wrong kind was found where a specific kind is mandatory.
	#[error("unexpected record kind: expected {expected:?}, got {got:?}")]
	UnexpectedRecordKind {
		/// Required record kind.
		expected: RecordType,
		/// Record kind actually decoded.
		got: RecordType,
	},
	/// A string-with-code carried a non-string primitive type.
	#[error("type mismatch at offset {at}: expected {expected}, got primitive type {got}")]
	TypeMismatch {
		/// Expected primitive type label.
		expected: &'static str,
		/// Raw primitive type code that was read.
		got: u8,
		/// Byte offset of the type code.
		at: usize,
	},
	/// A count, rank, or length field was negative.
	#[error("negative {kind} {len} at offset {at}")]
	NegativeLength {
		/// Field being decoded.
		kind: &'static str,
		/// Parsed signed value.
		len: i32,
		/// Byte offset of the field.
		at: usize,
	},
	/// A declared count exceeded the configured decode limit.
	#[error("{kind} too large: count={count}, max={max}")]
	CollectionTooLarge {
		/// Field being decoded.
		kind: &'static str,
		/// Declared element or byte count.
		count: u64,
		/// Maximum permitted count.
		max: usize,
	},
}
