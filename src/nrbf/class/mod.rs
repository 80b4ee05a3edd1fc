use crate::nrbf::bytes::Cursor;
use crate::nrbf::varint::read_length_prefixed_string;
use crate::nrbf::{AdditionalTypeInfo, BinaryType, ClassInfo, ClassTypeInfo, DecodeOptions, MemberTypeInfo, Result, read_tag};

/// Decode object id, class name, member count, and member names.
pub fn read_class_info(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<ClassInfo> {
	let object_id = cursor.read_i32_le()?;
	let name = read_length_prefixed_string(cursor, opt)?;

	let at = cursor.pos();
	let member_count = cursor.read_i32_le()?;
	let count = opt.check_count("member count", member_count, at)?;

	let mut member_names = Vec::with_capacity(count);
	for _ in 0..count {
		member_names.push(read_length_prefixed_string(cursor, opt)?);
	}

	Ok(ClassInfo {
		object_id,
		name,
		member_count,
		member_names,
	})
}

/// Decode per-member type categories followed by each category's detail.
///
/// `member_count` comes from the [`ClassInfo`] decoded just before; the
/// member type block does not repeat it.
pub fn read_member_type_info(cursor: &mut Cursor<'_>, member_count: usize, opt: &DecodeOptions) -> Result<MemberTypeInfo> {
	let mut binary_types = Vec::with_capacity(member_count);
	for _ in 0..member_count {
		binary_types.push(read_tag::<BinaryType>(cursor)?);
	}

	let mut additional_infos = Vec::with_capacity(member_count);
	for binary_type in &binary_types {
		additional_infos.push(read_additional_type_info(cursor, *binary_type, opt)?);
	}

	Ok(MemberTypeInfo {
		binary_types,
		additional_infos,
	})
}

/// Decode the detail that follows a member's [`BinaryType`].
pub fn read_additional_type_info(cursor: &mut Cursor<'_>, binary_type: BinaryType, opt: &DecodeOptions) -> Result<AdditionalTypeInfo> {
	Ok(match binary_type {
		BinaryType::Primitive | BinaryType::PrimitiveArray => AdditionalTypeInfo::Primitive(read_tag(cursor)?),
		BinaryType::SystemClass => AdditionalTypeInfo::SystemClass(read_length_prefixed_string(cursor, opt)?),
		BinaryType::Class => AdditionalTypeInfo::Class(read_class_type_info(cursor, opt)?),
		BinaryType::String | BinaryType::Object | BinaryType::ObjectArray | BinaryType::StringArray => AdditionalTypeInfo::None,
	})
}

/// Decode a type name and its library id.
pub fn read_class_type_info(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<ClassTypeInfo> {
	let type_name = read_length_prefixed_string(cursor, opt)?;
	let library_id = cursor.read_i32_le()?;
	Ok(ClassTypeInfo { type_name, library_id })
}
