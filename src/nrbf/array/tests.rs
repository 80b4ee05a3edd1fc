use crate::nrbf::array::{read_array_info, read_binary_array};
use crate::nrbf::bytes::Cursor;
use crate::nrbf::{AdditionalTypeInfo, BinaryArrayType, BinaryType, ClassTypeInfo, DecodeOptions, NrbfError, PrimitiveType};

fn header(out: &mut Vec<u8>, object_id: i32, array_type: u8, lengths: &[i32], lower_bounds: &[i32]) {
	out.extend_from_slice(&object_id.to_le_bytes());
	out.push(array_type);
	out.extend_from_slice(&(lengths.len() as i32).to_le_bytes());
	for item in lengths.iter().chain(lower_bounds) {
		out.extend_from_slice(&item.to_le_bytes());
	}
}

#[test]
fn array_info_reads_id_and_length() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&9_i32.to_le_bytes());
	bytes.extend_from_slice(&12_i32.to_le_bytes());
	let mut cursor = Cursor::new(&bytes);
	let info = read_array_info(&mut cursor).expect("array info");
	assert_eq!((info.object_id, info.length), (9, 12));
}

#[test]
fn rectangular_primitive_array_reads_every_dimension() {
	let mut bytes = Vec::new();
	header(&mut bytes, 4, 2, &[2, 3], &[0, 0]);
	bytes.push(0);
	bytes.push(6);

	let mut cursor = Cursor::new(&bytes);
	let array = read_binary_array(&mut cursor, &DecodeOptions::default()).expect("binary array");
	assert_eq!(array.object_id, 4);
	assert_eq!(array.array_type, BinaryArrayType::Rectangular);
	assert_eq!(array.rank, 2);
	assert_eq!(array.lengths, [2, 3]);
	assert_eq!(array.lower_bounds, [0, 0]);
	assert_eq!(array.element_type, BinaryType::Primitive);
	assert_eq!(array.element_info, AdditionalTypeInfo::Primitive(PrimitiveType::Double));
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn lower_bounds_are_read_for_plain_shapes_too() {
	let mut bytes = Vec::new();
	header(&mut bytes, 1, 0, &[5], &[7]);
	bytes.push(3);
	bytes.push(6);
	bytes.extend_from_slice(b"System");

	let mut cursor = Cursor::new(&bytes);
	let array = read_binary_array(&mut cursor, &DecodeOptions::default()).expect("binary array");
	assert_eq!(array.array_type, BinaryArrayType::Single);
	assert_eq!(array.lower_bounds, [7]);
	assert_eq!(array.element_info, AdditionalTypeInfo::SystemClass("System".to_owned()));
}

#[test]
fn class_element_type_reads_type_info() {
	let mut bytes = Vec::new();
	header(&mut bytes, 2, 4, &[3], &[1]);
	bytes.push(4);
	bytes.push(4);
	bytes.extend_from_slice(b"A.Bc");
	bytes.extend_from_slice(&5_i32.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	let array = read_binary_array(&mut cursor, &DecodeOptions::default()).expect("binary array");
	assert_eq!(array.array_type, BinaryArrayType::JaggedOffset);
	assert_eq!(
		array.element_info,
		AdditionalTypeInfo::Class(ClassTypeInfo {
			type_name: "A.Bc".to_owned(),
			library_id: 5,
		})
	);
}

#[test]
fn string_element_type_is_rejected() {
	let mut bytes = Vec::new();
	header(&mut bytes, 1, 0, &[1], &[0]);
	let at = bytes.len();
	bytes.push(1);

	let mut cursor = Cursor::new(&bytes);
	let err = read_binary_array(&mut cursor, &DecodeOptions::default()).expect_err("String elements unsupported");
	assert!(matches!(err, NrbfError::InvalidTag { kind: "binary array element type", value: 1, at: got } if got == at));
}

#[test]
fn unknown_shape_kind_is_rejected() {
	let mut bytes = Vec::new();
	header(&mut bytes, 1, 6, &[], &[]);
	let mut cursor = Cursor::new(&bytes);
	let err = read_binary_array(&mut cursor, &DecodeOptions::default()).expect_err("shape 6");
	assert!(matches!(err, NrbfError::InvalidTag { kind: "binary array type", value: 6, at: 4 }));
}

#[test]
fn negative_rank_is_rejected() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&1_i32.to_le_bytes());
	bytes.push(0);
	bytes.extend_from_slice(&(-2_i32).to_le_bytes());
	let mut cursor = Cursor::new(&bytes);
	let err = read_binary_array(&mut cursor, &DecodeOptions::default()).expect_err("negative rank");
	assert!(matches!(err, NrbfError::NegativeLength { kind: "array rank", len: -2, at: 5 }));
}
