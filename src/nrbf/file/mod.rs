use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::nrbf::compression::unwrap_container;
use crate::nrbf::{Compression, DecodeOptions, Record, RecordReader, RecordType, Result, SerializationHeader};

/// Owned record stream loaded from disk or memory.
pub struct NrbfFile {
	/// Container the stream was wrapped in.
	pub compression: Compression,
	options: DecodeOptions,
	bytes: Vec<u8>,
}

impl NrbfFile {
	/// Read and unwrap a stream from `path` with default limits.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with_options(path, DecodeOptions::default())
	}

	/// Read and unwrap a stream from `path` with explicit limits.
	pub fn open_with_options(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		log::debug!("opened {} ({} bytes)", path.display(), raw.len());
		Self::from_bytes_with_options(raw, options)
	}

	/// Unwrap a stream held in memory with default limits.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		Self::from_bytes_with_options(raw, DecodeOptions::default())
	}

	/// Unwrap a stream held in memory with explicit limits.
	///
	/// Only the container is inspected here; a missing or misplaced header
	/// surfaces from [`RecordReader::read`].
	pub fn from_bytes_with_options(raw: Vec<u8>, options: DecodeOptions) -> Result<Self> {
		let (compression, bytes) = unwrap_container(raw, options.max_decompressed_len)?;
		log::debug!("compression={compression} stream_len={}", bytes.len());

		Ok(Self {
			compression,
			options,
			bytes,
		})
	}

	/// Replace the decode limits used by readers created from this file.
	#[must_use]
	pub fn with_options(mut self, options: DecodeOptions) -> Self {
		self.options = options;
		self
	}

	/// Decoded stream bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Create a reader positioned at the first record.
	pub fn reader(&self) -> RecordReader<'_> {
		RecordReader::with_options(&self.bytes, self.options.clone())
	}

	/// Decode every record into memory.
	pub fn read_all(&self) -> Result<Vec<Record>> {
		self.reader().records().collect()
	}

	/// Decode the whole stream and summarize what it contains.
	pub fn scan_record_stats(&self) -> Result<RecordStats> {
		let mut stats = RecordStats {
			record_count: 0,
			header: None,
			has_message_end: false,
			class_count: 0,
			library_count: 0,
			trailing_bytes: 0,
			codes: HashMap::new(),
		};

		let mut reader = self.reader();
		for record in reader.records() {
			let record = record?;
			if let Record::SerializedStreamHeader(header) = &record
				&& stats.record_count == 0
			{
				stats.header = Some(*header);
			}

			stats.record_count += 1;
			*stats.codes.entry(record.record_type()).or_insert(0) += 1;
			if record.class_info().is_some() {
				stats.class_count += 1;
			}
			match record {
				Record::BinaryLibrary { .. } => stats.library_count += 1,
				Record::MessageEnd => stats.has_message_end = true,
				_ => {}
			}
		}
		stats.trailing_bytes = reader.remaining();

		Ok(stats)
	}
}

/// One-pass summary of a record stream.
pub struct RecordStats {
	/// Records decoded.
	pub record_count: u32,
	/// Leading header, when the first record is one.
	pub header: Option<SerializationHeader>,
	/// Whether a `MessageEnd` terminator was reached.
	pub has_message_end: bool,
	/// Class declarations seen.
	pub class_count: u32,
	/// Library declarations seen.
	pub library_count: u32,
	/// Bytes left unread after `MessageEnd`.
	pub trailing_bytes: usize,
	/// Record count per kind.
	pub codes: HashMap<RecordType, u32>,
}
