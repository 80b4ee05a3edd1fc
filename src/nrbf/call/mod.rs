use crate::nrbf::bytes::Cursor;
use crate::nrbf::value::read_primitive_value;
use crate::nrbf::varint::read_length_prefixed_string;
use crate::nrbf::{DecodeOptions, MessageFlags, MethodCall, MethodReturn, NrbfError, PrimitiveType, Result, ValueWithCode, read_tag};

/// Decode a primitive type code followed by a value of that type.
pub fn read_value_with_code(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<ValueWithCode> {
	let ty = read_tag::<PrimitiveType>(cursor)?;
	let value = read_primitive_value(cursor, ty, opt)?;
	Ok(ValueWithCode { value })
}

/// Decode a value-with-code whose type code must be `String`.
pub fn read_string_value_with_code(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<String> {
	let at = cursor.pos();
	let ty = read_tag::<PrimitiveType>(cursor)?;
	if ty != PrimitiveType::String {
		return Err(NrbfError::TypeMismatch {
			expected: "String",
			got: u8::from(ty),
			at,
		});
	}
	read_length_prefixed_string(cursor, opt)
}

/// Decode an int32 count followed by that many values-with-code.
pub fn read_array_of_value_with_code(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Vec<ValueWithCode>> {
	let at = cursor.pos();
	let len = cursor.read_i32_le()?;
	let count = opt.check_count("argument count", len, at)?;

	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		out.push(read_value_with_code(cursor, opt)?);
	}
	Ok(out)
}

/// Decode the body of a `MethodCall` record.
pub fn read_method_call(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<MethodCall> {
	let message_flags = MessageFlags::read(cursor)?;
	let method_name = read_string_value_with_code(cursor, opt)?;
	let type_name = read_string_value_with_code(cursor, opt)?;
	let call_context = read_string_value_with_code(cursor, opt)?;
	let args = read_array_of_value_with_code(cursor, opt)?;

	Ok(MethodCall {
		message_flags,
		method_name,
		type_name,
		call_context,
		args,
	})
}

/// Decode the body of a `MethodReturn` record.
pub fn read_method_return(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<MethodReturn> {
	let message_flags = MessageFlags::read(cursor)?;
	let return_value = read_value_with_code(cursor, opt)?;
	let call_context = read_string_value_with_code(cursor, opt)?;
	let args = read_array_of_value_with_code(cursor, opt)?;

	Ok(MethodReturn {
		message_flags,
		return_value,
		call_context,
		args,
	})
}

#[cfg(test)]
mod tests;
