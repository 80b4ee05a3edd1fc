use crate::nrbf::bytes::Cursor;
use crate::nrbf::call::{read_array_of_value_with_code, read_method_call, read_method_return, read_string_value_with_code, read_value_with_code};
use crate::nrbf::{DecodeOptions, MessageFlags, NrbfError, PrimitiveType, PrimitiveValue};

fn string_with_code(out: &mut Vec<u8>, text: &str) {
	out.push(18);
	out.push(text.len() as u8);
	out.extend_from_slice(text.as_bytes());
}

#[test]
fn value_with_code_decodes_by_type() {
	let mut bytes = vec![8];
	bytes.extend_from_slice(&(-7_i32).to_le_bytes());
	let mut cursor = Cursor::new(&bytes);
	let value = read_value_with_code(&mut cursor, &DecodeOptions::default()).expect("value");
	assert_eq!(value.primitive_type(), PrimitiveType::Int32);
	assert_eq!(value.value, PrimitiveValue::Int32(-7));
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn string_value_with_code_requires_string_code() {
	let mut bytes = Vec::new();
	string_with_code(&mut bytes, "Ping");
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(read_string_value_with_code(&mut cursor, &DecodeOptions::default()).expect("string"), "Ping");

	let bytes = [8_u8, 0, 0, 0, 0];
	let mut cursor = Cursor::new(&bytes);
	let err = read_string_value_with_code(&mut cursor, &DecodeOptions::default()).expect_err("Int32 code");
	assert!(matches!(err, NrbfError::TypeMismatch { expected: "String", got: 8, at: 0 }));
}

#[test]
fn string_value_with_code_rejects_undefined_codes_as_invalid_tags() {
	for code in [4_u8, 0, 99] {
		let bytes = [code, 0];
		let mut cursor = Cursor::new(&bytes);
		let err = read_string_value_with_code(&mut cursor, &DecodeOptions::default()).expect_err("undefined code");
		assert!(
			matches!(err, NrbfError::InvalidTag { kind: "primitive type", value, at: 0 } if value == code),
			"code {code} gave {err}"
		);
	}
}

#[test]
fn array_of_value_with_code_reads_count_then_values() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&3_i32.to_le_bytes());
	bytes.extend_from_slice(&[1, 1]);
	string_with_code(&mut bytes, "two");
	bytes.push(17);

	let mut cursor = Cursor::new(&bytes);
	let values = read_array_of_value_with_code(&mut cursor, &DecodeOptions::default()).expect("values");
	let values: Vec<_> = values.into_iter().map(|item| item.value).collect();
	assert_eq!(
		values,
		[PrimitiveValue::Boolean(true), PrimitiveValue::String("two".to_owned()), PrimitiveValue::Null]
	);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn method_call_reads_all_parts() {
	let flags = MessageFlags::ARGS_INLINE | MessageFlags::CONTEXT_INLINE;
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&flags.bits().to_le_bytes());
	string_with_code(&mut bytes, "Add");
	string_with_code(&mut bytes, "Calc.Service");
	string_with_code(&mut bytes, "ctx");
	bytes.extend_from_slice(&2_i32.to_le_bytes());
	bytes.push(8);
	bytes.extend_from_slice(&40_i32.to_le_bytes());
	bytes.push(8);
	bytes.extend_from_slice(&2_i32.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	let call = read_method_call(&mut cursor, &DecodeOptions::default()).expect("method call");
	assert_eq!(call.message_flags, flags);
	assert_eq!(call.method_name, "Add");
	assert_eq!(call.type_name, "Calc.Service");
	assert_eq!(call.call_context, "ctx");
	assert_eq!(call.args.len(), 2);
	assert_eq!(call.args[1].value, PrimitiveValue::Int32(2));
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn method_return_reads_value_context_and_args() {
	let flags = MessageFlags::RETURN_VALUE_INLINE | MessageFlags::NO_ARGS;
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&flags.bits().to_le_bytes());
	bytes.push(6);
	bytes.extend_from_slice(&0.5_f64.to_le_bytes());
	string_with_code(&mut bytes, "");
	bytes.extend_from_slice(&0_i32.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	let ret = read_method_return(&mut cursor, &DecodeOptions::default()).expect("method return");
	assert_eq!(ret.message_flags, flags);
	assert_eq!(ret.return_value.value, PrimitiveValue::Double(0.5));
	assert_eq!(ret.call_context, "");
	assert!(ret.args.is_empty());
	assert_eq!(cursor.remaining(), 0);
}
