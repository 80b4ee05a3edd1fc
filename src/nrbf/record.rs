use serde::Serialize;

use crate::nrbf::{BinaryArrayType, BinaryType, MessageFlags, PrimitiveType, PrimitiveValue, RecordType};

/// One decoded record from the stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "record_type")]
pub enum Record {
	/// Mandatory leading header.
	SerializedStreamHeader(SerializationHeader),
	/// Object whose class metadata was declared by an earlier record.
	ClassWithId {
		/// Object id.
		object_id: i32,
		/// Reference to the earlier class declaration.
		metadata_id: String,
	},
	/// System class declaration with member names.
	SystemClassWithMembers {
		/// Class identity and member names.
		class_info: ClassInfo,
	},
	/// Library class declaration with member names.
	ClassWithMembers {
		/// Class identity and member names.
		class_info: ClassInfo,
		/// Declaring library id.
		library_id: i32,
	},
	/// System class declaration with member names and types.
	SystemClassWithMembersAndTypes {
		/// Class identity and member names.
		class_info: ClassInfo,
		/// Declared type of each member.
		member_types: MemberTypeInfo,
	},
	/// Library class declaration with member names and types.
	ClassWithMembersAndTypes {
		/// Class identity and member names.
		class_info: ClassInfo,
		/// Declaring library id.
		library_id: i32,
		/// Declared type of each member.
		member_types: MemberTypeInfo,
	},
	/// String object.
	BinaryObjectString {
		/// Object id.
		object_id: i32,
		/// String contents.
		value: String,
	},
	/// Array with full shape and element type descriptor.
	BinaryArray(BinaryArray),
	/// Primitive value tagged with its type code.
	MemberPrimitiveTyped {
		/// Decoded value.
		value: PrimitiveValue,
	},
	/// Reference to another object.
	MemberReference {
		/// Referenced object id.
		id_ref: i32,
	},
	/// Single null entry.
	ObjectNull,
	/// Stream terminator.
	MessageEnd,
	/// Library declaration.
	BinaryLibrary {
		/// Library id referenced by class records.
		library_id: i32,
		/// Library (assembly) name.
		library_name: String,
	},
	/// Run of up to 255 nulls.
	ObjectNullMultiple256 {
		/// Number of consecutive nulls.
		null_count: u8,
	},
	/// Run of nulls with an int32 count.
	ObjectNullMultiple {
		/// Number of consecutive nulls.
		null_count: i32,
	},
	/// Single-dimension primitive array.
	ArraySinglePrimitive {
		/// Object id and length.
		array_info: ArrayInfo,
		/// Array shape kind.
		array_type: BinaryArrayType,
		/// Element primitive type.
		primitive_type: PrimitiveType,
	},
	/// Single-dimension object array.
	ArraySingleObject {
		/// Object id and length.
		array_info: ArrayInfo,
	},
	/// Single-dimension string array.
	ArraySingleString {
		/// Object id and length.
		array_info: ArrayInfo,
	},
	/// Remote method call.
	MethodCall(MethodCall),
	/// Remote method return.
	MethodReturn(MethodReturn),
}

impl Record {
	/// Discriminator this record was decoded from.
	pub fn record_type(&self) -> RecordType {
		match self {
			Self::SerializedStreamHeader(_) => RecordType::SerializedStreamHeader,
			Self::ClassWithId { .. } => RecordType::ClassWithId,
			Self::SystemClassWithMembers { .. } => RecordType::SystemClassWithMembers,
			Self::ClassWithMembers { .. } => RecordType::ClassWithMembers,
			Self::SystemClassWithMembersAndTypes { .. } => RecordType::SystemClassWithMembersAndTypes,
			Self::ClassWithMembersAndTypes { .. } => RecordType::ClassWithMembersAndTypes,
			Self::BinaryObjectString { .. } => RecordType::BinaryObjectString,
			Self::BinaryArray(_) => RecordType::BinaryArray,
			Self::MemberPrimitiveTyped { .. } => RecordType::MemberPrimitiveTyped,
			Self::MemberReference { .. } => RecordType::MemberReference,
			Self::ObjectNull => RecordType::ObjectNull,
			Self::MessageEnd => RecordType::MessageEnd,
			Self::BinaryLibrary { .. } => RecordType::BinaryLibrary,
			Self::ObjectNullMultiple256 { .. } => RecordType::ObjectNullMultiple256,
			Self::ObjectNullMultiple { .. } => RecordType::ObjectNullMultiple,
			Self::ArraySinglePrimitive { .. } => RecordType::ArraySinglePrimitive,
			Self::ArraySingleObject { .. } => RecordType::ArraySingleObject,
			Self::ArraySingleString { .. } => RecordType::ArraySingleString,
			Self::MethodCall(_) => RecordType::MethodCall,
			Self::MethodReturn(_) => RecordType::MethodReturn,
		}
	}

	/// Class declaration carried by this record, if any.
	pub fn class_info(&self) -> Option<&ClassInfo> {
		match self {
			Self::SystemClassWithMembers { class_info }
			| Self::ClassWithMembers { class_info, .. }
			| Self::SystemClassWithMembersAndTypes { class_info, .. }
			| Self::ClassWithMembersAndTypes { class_info, .. } => Some(class_info),
			_ => None,
		}
	}
}

/// Stream header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SerializationHeader {
	/// Id of the root object.
	pub root_id: i32,
	/// Id of the header object.
	pub header_id: i32,
	/// Format major version.
	pub major_version: i32,
	/// Format minor version.
	pub minor_version: i32,
}

/// Class identity and member names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
	/// Object id of the instance being declared.
	pub object_id: i32,
	/// Fully qualified class name.
	pub name: String,
	/// Declared member count; always equals `member_names.len()`.
	pub member_count: i32,
	/// Member names in declaration order.
	pub member_names: Vec<String>,
}

/// Declared member types, parallel to [`ClassInfo::member_names`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberTypeInfo {
	/// Type category of each member.
	pub binary_types: Vec<BinaryType>,
	/// Category-dependent detail of each member.
	pub additional_infos: Vec<AdditionalTypeInfo>,
}

impl MemberTypeInfo {
	/// Iterate `(category, detail)` pairs in member order.
	pub fn iter(&self) -> impl Iterator<Item = (BinaryType, &AdditionalTypeInfo)> {
		self.binary_types.iter().copied().zip(self.additional_infos.iter())
	}
}

/// Extra type detail attached to a [`BinaryType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AdditionalTypeInfo {
	/// `String`, `Object`, `ObjectArray`, and `StringArray` carry nothing.
	None,
	/// `Primitive` and `PrimitiveArray` element type.
	Primitive(PrimitiveType),
	/// `SystemClass` name.
	SystemClass(String),
	/// `Class` name and library.
	Class(ClassTypeInfo),
}

/// Named type reference into a declared library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassTypeInfo {
	/// Fully qualified type name.
	pub type_name: String,
	/// Declaring library id.
	pub library_id: i32,
}

/// Object id and length of a single-dimension array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrayInfo {
	/// Object id.
	pub object_id: i32,
	/// Element count.
	pub length: i32,
}

/// Full array descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryArray {
	/// Object id.
	pub object_id: i32,
	/// Shape kind.
	pub array_type: BinaryArrayType,
	/// Number of dimensions.
	pub rank: i32,
	/// Length of each dimension.
	pub lengths: Vec<i32>,
	/// Lower bound of each dimension, read for every shape kind.
	pub lower_bounds: Vec<i32>,
	/// Element type category.
	pub element_type: BinaryType,
	/// Element type detail; never [`AdditionalTypeInfo::None`].
	pub element_info: AdditionalTypeInfo,
}

/// Primitive value paired with its type code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueWithCode {
	/// Decoded value; its arm is the type code.
	pub value: PrimitiveValue,
}

impl ValueWithCode {
	/// Type code read ahead of the value.
	pub fn primitive_type(&self) -> PrimitiveType {
		self.value.primitive_type()
	}
}

/// Remote method call payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCall {
	/// Argument, context, and signature placement flags.
	pub message_flags: MessageFlags,
	/// Invoked method name.
	pub method_name: String,
	/// Declaring type name.
	pub type_name: String,
	/// Logical call context.
	pub call_context: String,
	/// Inline arguments.
	pub args: Vec<ValueWithCode>,
}

/// Remote method return payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodReturn {
	/// Return value, context, and exception placement flags.
	pub message_flags: MessageFlags,
	/// Returned value.
	pub return_value: ValueWithCode,
	/// Logical call context.
	pub call_context: String,
	/// Out/ref arguments.
	pub args: Vec<ValueWithCode>,
}
