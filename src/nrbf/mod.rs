mod array;
mod bytes;
mod call;
mod class;
mod compression;
mod enums;
mod error;
mod file;
mod options;
mod reader;
mod record;
mod value;
mod varint;

/// Array descriptor decoders.
pub use array::{read_array_info, read_binary_array};
/// Bounded byte cursor consumed by every decoder.
pub use bytes::Cursor;
/// Value-with-code and remote call/return decoders.
pub use call::{read_array_of_value_with_code, read_method_call, read_method_return, read_string_value_with_code, read_value_with_code};
/// Class metadata decoders.
pub use class::{read_additional_type_info, read_class_info, read_class_type_info, read_member_type_info};
/// Compression detection result.
pub use compression::Compression;
/// Closed wire enumerations and call flags.
pub use enums::{BinaryArrayType, BinaryType, MessageFlags, PrimitiveType, RecordType, WireTag, read_tag};
/// Error and result aliases.
pub use error::{NrbfError, Result};
/// Owned stream loading and statistics.
pub use file::{NrbfFile, RecordStats};
/// Decode limits.
pub use options::DecodeOptions;
/// Record dispatch engine and lazy record iterator.
pub use reader::{RecordReader, Records};
/// Decoded record data model.
pub use record::{
	AdditionalTypeInfo, ArrayInfo, BinaryArray, ClassInfo, ClassTypeInfo, MemberTypeInfo, MethodCall, MethodReturn, Record, SerializationHeader, ValueWithCode,
};
/// Typed primitive values.
pub use value::{DateTimeValue, PrimitiveValue, read_primitive_value};
/// Varint and length-prefixed string decoders.
pub use varint::{VARINT_MAX_GROUPS, read_length_prefixed_string, read_varint};
