use crate::nrbf::array::{read_array_info, read_binary_array};
use crate::nrbf::bytes::Cursor;
use crate::nrbf::call::{read_method_call, read_method_return};
use crate::nrbf::class::{read_class_info, read_member_type_info};
use crate::nrbf::value::read_primitive_value;
use crate::nrbf::varint::read_length_prefixed_string;
use crate::nrbf::{DecodeOptions, NrbfError, PrimitiveType, Record, RecordType, Result, SerializationHeader, read_tag};

/// Tag-driven decoder producing one [`Record`] per read.
///
/// The reader is forward-only. After any error the cursor position is
/// unspecified and no further records should be read.
pub struct RecordReader<'a> {
	cursor: Cursor<'a>,
	options: DecodeOptions,
	header: Option<SerializationHeader>,
}

impl<'a> RecordReader<'a> {
	/// Create a reader over `bytes` with default decode limits.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_options(bytes, DecodeOptions::default())
	}

	/// Create a reader over `bytes` with explicit decode limits.
	pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			options,
			header: None,
		}
	}

	/// Current byte offset.
	pub fn pos(&self) -> usize {
		self.cursor.pos()
	}

	/// Bytes not yet consumed.
	pub fn remaining(&self) -> usize {
		self.cursor.remaining()
	}

	/// Header recognized by [`RecordReader::read`], if it has run.
	pub fn header(&self) -> Option<&SerializationHeader> {
		self.header.as_ref()
	}

	/// Read the mandatory leading record and cache it as the stream header.
	pub fn read(&mut self) -> Result<SerializationHeader> {
		match self.read_record()? {
			Record::SerializedStreamHeader(header) => {
				log::debug!(
					"stream header: root_id={} header_id={} version={}.{}",
					header.root_id,
					header.header_id,
					header.major_version,
					header.minor_version
				);
				self.header = Some(header);
				Ok(header)
			}
			other => Err(NrbfError::UnexpectedRecordKind {
				expected: RecordType::SerializedStreamHeader,
				got: other.record_type(),
			}),
		}
	}

	/// Read one tag byte and decode the record it selects.
	pub fn read_record(&mut self) -> Result<Record> {
		let at = self.cursor.pos();
		let record_type = read_tag::<RecordType>(&mut self.cursor)?;
		log::trace!("record {record_type:?} at offset {at}");
		self.decode_body(record_type)
	}

	/// Lazily decode records up to and including `MessageEnd`.
	pub fn records(&mut self) -> Records<'_, 'a> {
		Records { reader: self, done: false }
	}

	fn decode_body(&mut self, record_type: RecordType) -> Result<Record> {
		let cursor = &mut self.cursor;
		let opt = &self.options;

		Ok(match record_type {
			RecordType::SerializedStreamHeader => Record::SerializedStreamHeader(SerializationHeader {
				root_id: cursor.read_i32_le()?,
				header_id: cursor.read_i32_le()?,
				major_version: cursor.read_i32_le()?,
				minor_version: cursor.read_i32_le()?,
			}),
			RecordType::ClassWithId => Record::ClassWithId {
				object_id: cursor.read_i32_le()?,
				metadata_id: cursor.read_native_string()?,
			},
			RecordType::SystemClassWithMembers => Record::SystemClassWithMembers {
				class_info: read_class_info(cursor, opt)?,
			},
			RecordType::ClassWithMembers => Record::ClassWithMembers {
				class_info: read_class_info(cursor, opt)?,
				library_id: cursor.read_i32_le()?,
			},
			RecordType::SystemClassWithMembersAndTypes => {
				let class_info = read_class_info(cursor, opt)?;
				let member_types = read_member_type_info(cursor, class_info.member_names.len(), opt)?;
				Record::SystemClassWithMembersAndTypes { class_info, member_types }
			}
			RecordType::ClassWithMembersAndTypes => {
				let class_info = read_class_info(cursor, opt)?;
				let library_id = cursor.read_i32_le()?;
				let member_types = read_member_type_info(cursor, class_info.member_names.len(), opt)?;
				Record::ClassWithMembersAndTypes {
					class_info,
					library_id,
					member_types,
				}
			}
			RecordType::BinaryObjectString => Record::BinaryObjectString {
				object_id: cursor.read_i32_le()?,
				value: read_length_prefixed_string(cursor, opt)?,
			},
			RecordType::BinaryArray => Record::BinaryArray(read_binary_array(cursor, opt)?),
			RecordType::MemberPrimitiveTyped => {
				let ty = read_tag::<PrimitiveType>(cursor)?;
				Record::MemberPrimitiveTyped {
					value: read_primitive_value(cursor, ty, opt)?,
				}
			}
			RecordType::MemberReference => Record::MemberReference {
				id_ref: cursor.read_i32_le()?,
			},
			RecordType::ObjectNull => Record::ObjectNull,
			RecordType::MessageEnd => Record::MessageEnd,
			RecordType::BinaryLibrary => Record::BinaryLibrary {
				library_id: cursor.read_i32_le()?,
				library_name: read_length_prefixed_string(cursor, opt)?,
			},
			RecordType::ObjectNullMultiple256 => Record::ObjectNullMultiple256 {
				null_count: cursor.read_u8()?,
			},
			RecordType::ObjectNullMultiple => Record::ObjectNullMultiple {
				null_count: cursor.read_i32_le()?,
			},
			RecordType::ArraySinglePrimitive => Record::ArraySinglePrimitive {
				array_info: read_array_info(cursor)?,
				array_type: read_tag(cursor)?,
				primitive_type: read_tag(cursor)?,
			},
			RecordType::ArraySingleObject => Record::ArraySingleObject {
				array_info: read_array_info(cursor)?,
			},
			RecordType::ArraySingleString => Record::ArraySingleString {
				array_info: read_array_info(cursor)?,
			},
			RecordType::MethodCall => Record::MethodCall(read_method_call(cursor, opt)?),
			RecordType::MethodReturn => Record::MethodReturn(read_method_return(cursor, opt)?),
		})
	}
}

/// Iterator over consecutive records of a [`RecordReader`].
///
/// Ends after yielding `MessageEnd`. Running out of input before the
/// terminator yields `UnexpectedEof`, and nothing follows the first error.
pub struct Records<'r, 'a> {
	reader: &'r mut RecordReader<'a>,
	done: bool,
}

impl Records<'_, '_> {
	/// Offset where the next record starts.
	pub fn pos(&self) -> usize {
		self.reader.pos()
	}
}

impl Iterator for Records<'_, '_> {
	type Item = Result<Record>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let record = match self.reader.read_record() {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		if matches!(record, Record::MessageEnd) {
			self.done = true;
		}

		Some(Ok(record))
	}
}
