use crate::nrbf::bytes::Cursor;
use crate::nrbf::class::read_additional_type_info;
use crate::nrbf::{ArrayInfo, BinaryArray, BinaryArrayType, BinaryType, DecodeOptions, NrbfError, Result, read_tag};

/// Decode object id and length for single-dimension array records.
pub fn read_array_info(cursor: &mut Cursor<'_>) -> Result<ArrayInfo> {
	let object_id = cursor.read_i32_le()?;
	let length = cursor.read_i32_le()?;
	Ok(ArrayInfo { object_id, length })
}

/// Decode a full array descriptor.
///
/// One lower bound per dimension is read for every shape kind, not only the
/// `*Offset` kinds.
pub fn read_binary_array(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<BinaryArray> {
	let object_id = cursor.read_i32_le()?;
	let array_type = read_tag::<BinaryArrayType>(cursor)?;

	let at = cursor.pos();
	let rank = cursor.read_i32_le()?;
	let dims = opt.check_count("array rank", rank, at)?;

	let lengths = read_i32_list(cursor, dims)?;
	let lower_bounds = read_i32_list(cursor, dims)?;

	let at = cursor.pos();
	let element_type = read_tag::<BinaryType>(cursor)?;
	let element_info = match element_type {
		BinaryType::Primitive | BinaryType::PrimitiveArray | BinaryType::SystemClass | BinaryType::Class => {
			read_additional_type_info(cursor, element_type, opt)?
		}
		BinaryType::String | BinaryType::Object | BinaryType::ObjectArray | BinaryType::StringArray => {
			return Err(NrbfError::InvalidTag {
				kind: "binary array element type",
				value: u8::from(element_type),
				at,
			});
		}
	};

	Ok(BinaryArray {
		object_id,
		array_type,
		rank,
		lengths,
		lower_bounds,
		element_type,
		element_info,
	})
}

fn read_i32_list(cursor: &mut Cursor<'_>, count: usize) -> Result<Vec<i32>> {
	let mut out = Vec::with_capacity(count);
	for _ in 0..count {
		out.push(cursor.read_i32_le()?);
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
