use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;

use crate::nrbf::bytes::Cursor;
use crate::nrbf::{NrbfError, Result};

/// One-byte enumeration read directly from the stream.
pub trait WireTag: Sized {
	/// Label used in `InvalidTag` errors.
	const KIND: &'static str;

	/// Map a raw byte onto a variant, `None` when the byte is undefined.
	fn from_wire(value: u8) -> Option<Self>;
}

/// Read one byte and map it onto a closed enumeration.
pub fn read_tag<T: WireTag>(cursor: &mut Cursor<'_>) -> Result<T> {
	let at = cursor.pos();
	let value = cursor.read_u8()?;
	T::from_wire(value).ok_or(NrbfError::InvalidTag { kind: T::KIND, value, at })
}

macro_rules! wire_tag_via_num_enum {
	($ty:ty, $kind:literal) => {
		impl WireTag for $ty {
			const KIND: &'static str = $kind;

			fn from_wire(value: u8) -> Option<Self> {
				Self::try_from_primitive(value).ok()
			}
		}
	};
}

/// Record discriminator. Values 18 through 20 are reserved and never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum RecordType {
	/// Mandatory leading stream header.
	SerializedStreamHeader = 0,
	/// Object reusing previously declared class metadata.
	ClassWithId = 1,
	/// System class with member names only.
	SystemClassWithMembers = 2,
	/// Library class with member names only.
	ClassWithMembers = 3,
	/// System class with member names and types.
	SystemClassWithMembersAndTypes = 4,
	/// Library class with member names and types.
	ClassWithMembersAndTypes = 5,
	/// String object.
	BinaryObjectString = 6,
	/// Array with full shape and element type descriptor.
	BinaryArray = 7,
	/// Primitive value with explicit type code.
	MemberPrimitiveTyped = 8,
	/// Reference to another object id.
	MemberReference = 9,
	/// Single null entry.
	ObjectNull = 10,
	/// Stream terminator.
	MessageEnd = 11,
	/// Library name declaration.
	BinaryLibrary = 12,
	/// Null run with one-byte count.
	ObjectNullMultiple256 = 13,
	/// Null run with int32 count.
	ObjectNullMultiple = 14,
	/// Single-dimension primitive array.
	ArraySinglePrimitive = 15,
	/// Single-dimension object array.
	ArraySingleObject = 16,
	/// Single-dimension string array.
	ArraySingleString = 17,
	/// Remote method call.
	MethodCall = 21,
	/// Remote method return.
	MethodReturn = 22,
}

wire_tag_via_num_enum!(RecordType, "record type");

impl RecordType {
	/// Every decodable record type in discriminator order.
	pub const ALL: [Self; 20] = [
		Self::SerializedStreamHeader,
		Self::ClassWithId,
		Self::SystemClassWithMembers,
		Self::ClassWithMembers,
		Self::SystemClassWithMembersAndTypes,
		Self::ClassWithMembersAndTypes,
		Self::BinaryObjectString,
		Self::BinaryArray,
		Self::MemberPrimitiveTyped,
		Self::MemberReference,
		Self::ObjectNull,
		Self::MessageEnd,
		Self::BinaryLibrary,
		Self::ObjectNullMultiple256,
		Self::ObjectNullMultiple,
		Self::ArraySinglePrimitive,
		Self::ArraySingleObject,
		Self::ArraySingleString,
		Self::MethodCall,
		Self::MethodReturn,
	];
}

/// Member or array element type category.
///
/// The `Primitive` variant shadows `TryFromPrimitive::Primitive`, so this
/// enum maps bytes by hand instead of deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoPrimitive)]
#[repr(u8)]
pub enum BinaryType {
	/// Primitive value; additional info is a [`PrimitiveType`].
	Primitive = 0,
	/// String object.
	String = 1,
	/// Object of unspecified type.
	Object = 2,
	/// System library class; additional info is the class name.
	SystemClass = 3,
	/// Library class; additional info is a `ClassTypeInfo`.
	Class = 4,
	/// Array of objects.
	ObjectArray = 5,
	/// Array of strings.
	StringArray = 6,
	/// Array of primitives; additional info is a [`PrimitiveType`].
	PrimitiveArray = 7,
}

impl WireTag for BinaryType {
	const KIND: &'static str = "binary type";

	fn from_wire(value: u8) -> Option<Self> {
		Some(match value {
			0 => Self::Primitive,
			1 => Self::String,
			2 => Self::Object,
			3 => Self::SystemClass,
			4 => Self::Class,
			5 => Self::ObjectArray,
			6 => Self::StringArray,
			7 => Self::PrimitiveArray,
			_ => return None,
		})
	}
}

/// Array shape kind. The `*Offset` kinds carry non-zero lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum BinaryArrayType {
	/// One dimension, zero-based.
	Single = 0,
	/// Array of arrays.
	Jagged = 1,
	/// Multi-dimensional.
	Rectangular = 2,
	/// One dimension with a lower bound.
	SingleOffset = 3,
	/// Jagged with lower bounds.
	JaggedOffset = 4,
	/// Multi-dimensional with lower bounds.
	RectangularOffset = 5,
}

wire_tag_via_num_enum!(BinaryArrayType, "binary array type");

impl BinaryArrayType {
	/// Whether this kind declares explicit lower bounds.
	pub fn has_offset(self) -> bool {
		matches!(self, Self::SingleOffset | Self::JaggedOffset | Self::RectangularOffset)
	}
}

/// Primitive type code. Code 4 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PrimitiveType {
	/// One byte, non-zero is true.
	Boolean = 1,
	/// Unsigned byte.
	Byte = 2,
	/// One UTF-8 encoded scalar.
	Char = 3,
	/// Decimal in its textual form.
	Decimal = 5,
	/// 64-bit float.
	Double = 6,
	/// Signed 16-bit integer.
	Int16 = 7,
	/// Signed 32-bit integer.
	Int32 = 8,
	/// Signed 64-bit integer.
	Int64 = 9,
	/// Signed byte.
	SByte = 10,
	/// 32-bit float.
	Single = 11,
	/// Duration in 100ns ticks.
	TimeSpan = 12,
	/// Ticks plus kind bits.
	DateTime = 13,
	/// Unsigned 16-bit integer.
	UInt16 = 14,
	/// Unsigned 32-bit integer.
	UInt32 = 15,
	/// Unsigned 64-bit integer.
	UInt64 = 16,
	/// Null value without payload.
	Null = 17,
	/// Length-prefixed string.
	String = 18,
}

wire_tag_via_num_enum!(PrimitiveType, "primitive type");

bitflags::bitflags! {
	/// Argument and return value placement flags for call records.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
	#[repr(transparent)]
	pub struct MessageFlags: u32 {
		/// Call has no arguments.
		const NO_ARGS = 0x0001;
		/// Arguments are stored inline.
		const ARGS_INLINE = 0x0002;
		/// Arguments are a single array argument.
		const ARGS_IS_ARRAY = 0x0004;
		/// Arguments live in the trailing call array.
		const ARGS_IN_ARRAY = 0x0008;
		/// No call context.
		const NO_CONTEXT = 0x0010;
		/// Call context stored inline.
		const CONTEXT_INLINE = 0x0020;
		/// Call context lives in the trailing call array.
		const CONTEXT_IN_ARRAY = 0x0040;
		/// Method signature lives in the trailing call array.
		const METHOD_SIGNATURE_IN_ARRAY = 0x0080;
		/// Message properties live in the trailing call array.
		const PROPERTIES_IN_ARRAY = 0x0100;
		/// No return value.
		const NO_RETURN_VALUE = 0x0200;
		/// Method returns void.
		const RETURN_VALUE_VOID = 0x0400;
		/// Return value stored inline.
		const RETURN_VALUE_INLINE = 0x0800;
		/// Return value lives in the trailing call array.
		const RETURN_VALUE_IN_ARRAY = 0x1000;
		/// Exception lives in the trailing call array.
		const EXCEPTION_IN_ARRAY = 0x2000;
		/// Unassigned by the format; carried through as read.
		const RESERVED = 0x4000;
		/// Call targets a generic method.
		const GENERIC_METHOD = 0x8000;
	}
}

impl MessageFlags {
	/// Read the int32 flag word, retaining unknown bits.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self::from_bits_retain(cursor.read_u32_le()?))
	}
}
