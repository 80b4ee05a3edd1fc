use crate::nrbf::NrbfError;
use crate::nrbf::bytes::Cursor;

#[test]
fn reads_little_endian_fixed_width_values() {
	let mut bytes = Vec::new();
	bytes.push(0x7F);
	bytes.extend_from_slice(&(-2_i32).to_le_bytes());
	bytes.extend_from_slice(&0x1122_3344_5566_7788_u64.to_le_bytes());
	bytes.extend_from_slice(&1.5_f64.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_u8().expect("u8"), 0x7F);
	assert_eq!(cursor.read_i32_le().expect("i32"), -2);
	assert_eq!(cursor.read_u64_le().expect("u64"), 0x1122_3344_5566_7788);
	assert_eq!(cursor.read_f64_le().expect("f64"), 1.5);
	assert_eq!(cursor.remaining(), 0);
	assert_eq!(cursor.pos(), bytes.len());
}

#[test]
fn short_read_reports_offset_and_remaining() {
	let bytes = [1_u8, 2, 3];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_u8().expect("first byte");

	let err = cursor.read_i32_le().expect_err("only two bytes remain");
	assert!(matches!(err, NrbfError::UnexpectedEof { at: 1, need: 4, rem: 2 }));
}

#[test]
fn native_string_reads_int32_length() {
	let bytes = b"\x0d\x00\x00\x00Assembly.Typerest";
	let mut cursor = Cursor::new(bytes);
	assert_eq!(cursor.read_native_string().expect("string"), "Assembly.Type");
	assert_eq!(cursor.read_exact(4).expect("tail"), b"rest");
}

#[test]
fn native_string_short_payload_is_eof() {
	let bytes = [8_u8, 0, 0, 0, b'o', b'p', b'e', b'n'];
	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_native_string().expect_err("declared length exceeds input");
	assert!(matches!(err, NrbfError::UnexpectedEof { at: 4, need: 8, rem: 4 }));
}

#[test]
fn native_string_rejects_negative_length() {
	let bytes = (-1_i32).to_le_bytes();
	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_native_string().expect_err("negative length");
	assert!(matches!(err, NrbfError::NegativeLength { len: -1, at: 0, .. }));
}

#[test]
fn native_string_rejects_invalid_utf8() {
	let bytes = [2_u8, 0, 0, 0, 0xFF, 0xFE];
	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_native_string().expect_err("invalid utf-8");
	assert!(matches!(err, NrbfError::InvalidUtf8 { at: 4, .. }));
}
