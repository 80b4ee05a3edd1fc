use crate::nrbf::bytes::Cursor;
use crate::nrbf::varint::{read_length_prefixed_string, read_varint};
use crate::nrbf::{DecodeOptions, NrbfError};

#[test]
fn single_byte_varints_decode_to_low_bits() {
	for byte in 0_u8..0x80 {
		let bytes = [byte, 0xAA];
		let mut cursor = Cursor::new(&bytes);
		assert_eq!(read_varint(&mut cursor).expect("varint"), u64::from(byte));
		assert_eq!(cursor.pos(), 1, "exactly one byte consumed for {byte}");
	}
}

#[test]
fn multi_group_varint_concatenates_groups() {
	// 300 = 0b10_0101100
	let bytes = [0xAC, 0x02];
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(read_varint(&mut cursor).expect("varint"), 300);
	assert_eq!(cursor.pos(), 2);

	let bytes = [0xFF, 0xFF, 0xFF, 0x7F, 0x99];
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(read_varint(&mut cursor).expect("varint"), (1 << 28) - 1);
	assert_eq!(cursor.pos(), 4);
}

#[test]
fn fifth_group_is_final_even_with_continuation_bit() {
	let bytes = [0x80, 0x80, 0x80, 0x80, 0x81, 0x7F];
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(read_varint(&mut cursor).expect("varint"), 1 << 28);
	assert_eq!(cursor.pos(), 5, "no sixth byte read");
}

#[test]
fn fifth_group_keeps_all_payload_bits() {
	let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(read_varint(&mut cursor).expect("varint"), (1 << 35) - 1);
}

#[test]
fn truncated_varint_is_eof() {
	let bytes = [0x80, 0x80];
	let mut cursor = Cursor::new(&bytes);
	let err = read_varint(&mut cursor).expect_err("continuation without next byte");
	assert!(matches!(err, NrbfError::UnexpectedEof { at: 2, .. }));
}

#[test]
fn length_prefixed_string_reads_declared_bytes() {
	let mut bytes = vec![5];
	bytes.extend_from_slice(b"hello world");
	let mut cursor = Cursor::new(&bytes);
	let text = read_length_prefixed_string(&mut cursor, &DecodeOptions::default()).expect("string");
	assert_eq!(text, "hello");
	assert_eq!(cursor.pos(), 6);
}

#[test]
fn length_prefixed_string_with_multibyte_text() {
	let text = "Grüße, 世界";
	let mut bytes = vec![text.len() as u8];
	bytes.extend_from_slice(text.as_bytes());
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(read_length_prefixed_string(&mut cursor, &DecodeOptions::default()).expect("string"), text);
}

#[test]
fn length_prefixed_string_short_payload_is_eof() {
	let bytes = [10, b'a', b'b'];
	let mut cursor = Cursor::new(&bytes);
	let err = read_length_prefixed_string(&mut cursor, &DecodeOptions::default()).expect_err("short payload");
	assert!(matches!(err, NrbfError::UnexpectedEof { at: 1, need: 10, rem: 2 }));
}

#[test]
fn length_prefixed_string_rejects_invalid_utf8() {
	let bytes = [2, 0xC3, 0x28];
	let mut cursor = Cursor::new(&bytes);
	let err = read_length_prefixed_string(&mut cursor, &DecodeOptions::default()).expect_err("invalid utf-8");
	assert!(matches!(err, NrbfError::InvalidUtf8 { at: 1, .. }));
}

#[test]
fn length_prefixed_string_respects_limit() {
	let bytes = [0x80, 0x01];
	let opt = DecodeOptions {
		max_string_len: 64,
		..DecodeOptions::default()
	};
	let mut cursor = Cursor::new(&bytes);
	let err = read_length_prefixed_string(&mut cursor, &opt).expect_err("over limit");
	assert!(matches!(err, NrbfError::CollectionTooLarge { count: 128, max: 64, .. }));
}
