use serde::Serialize;

use crate::nrbf::bytes::Cursor;
use crate::nrbf::varint::read_length_prefixed_string;
use crate::nrbf::{DecodeOptions, NrbfError, PrimitiveType, Result};

const DATETIME_TICKS_MASK: u64 = (1 << 62) - 1;

/// Decoded primitive value, one arm per wire representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PrimitiveValue {
	/// `Boolean`.
	Boolean(bool),
	/// `Byte`.
	Byte(u8),
	/// `Char`.
	Char(char),
	/// `Decimal` in its textual wire form.
	Decimal(String),
	/// `Double`.
	Double(f64),
	/// `Int16`.
	Int16(i16),
	/// `Int32`.
	Int32(i32),
	/// `Int64`.
	Int64(i64),
	/// `SByte`.
	SByte(i8),
	/// `Single`.
	Single(f32),
	/// `TimeSpan` as 100ns ticks.
	TimeSpan(i64),
	/// `DateTime`.
	DateTime(DateTimeValue),
	/// `UInt16`.
	UInt16(u16),
	/// `UInt32`.
	UInt32(u32),
	/// `UInt64`.
	UInt64(u64),
	/// `Null`.
	Null,
	/// `String`.
	String(String),
}

/// `DateTime` split into its tick count and kind bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateTimeValue {
	/// 100ns ticks since 0001-01-01, low 62 bits of the wire value.
	pub ticks: u64,
	/// Top two bits: 0 unspecified, 1 UTC, 2 local.
	pub kind: u8,
}

impl PrimitiveValue {
	/// Primitive type code this value was decoded as.
	pub fn primitive_type(&self) -> PrimitiveType {
		match self {
			Self::Boolean(_) => PrimitiveType::Boolean,
			Self::Byte(_) => PrimitiveType::Byte,
			Self::Char(_) => PrimitiveType::Char,
			Self::Decimal(_) => PrimitiveType::Decimal,
			Self::Double(_) => PrimitiveType::Double,
			Self::Int16(_) => PrimitiveType::Int16,
			Self::Int32(_) => PrimitiveType::Int32,
			Self::Int64(_) => PrimitiveType::Int64,
			Self::SByte(_) => PrimitiveType::SByte,
			Self::Single(_) => PrimitiveType::Single,
			Self::TimeSpan(_) => PrimitiveType::TimeSpan,
			Self::DateTime(_) => PrimitiveType::DateTime,
			Self::UInt16(_) => PrimitiveType::UInt16,
			Self::UInt32(_) => PrimitiveType::UInt32,
			Self::UInt64(_) => PrimitiveType::UInt64,
			Self::Null => PrimitiveType::Null,
			Self::String(_) => PrimitiveType::String,
		}
	}
}

/// Decode one value whose representation is selected by `ty`.
pub fn read_primitive_value(cursor: &mut Cursor<'_>, ty: PrimitiveType, opt: &DecodeOptions) -> Result<PrimitiveValue> {
	Ok(match ty {
		PrimitiveType::Boolean => PrimitiveValue::Boolean(cursor.read_u8()? != 0),
		PrimitiveType::Byte => PrimitiveValue::Byte(cursor.read_u8()?),
		PrimitiveType::Char => PrimitiveValue::Char(read_utf8_char(cursor)?),
		PrimitiveType::Decimal => PrimitiveValue::Decimal(read_length_prefixed_string(cursor, opt)?),
		PrimitiveType::Double => PrimitiveValue::Double(cursor.read_f64_le()?),
		PrimitiveType::Int16 => PrimitiveValue::Int16(cursor.read_i16_le()?),
		PrimitiveType::Int32 => PrimitiveValue::Int32(cursor.read_i32_le()?),
		PrimitiveType::Int64 => PrimitiveValue::Int64(cursor.read_i64_le()?),
		PrimitiveType::SByte => PrimitiveValue::SByte(cursor.read_i8()?),
		PrimitiveType::Single => PrimitiveValue::Single(cursor.read_f32_le()?),
		PrimitiveType::TimeSpan => PrimitiveValue::TimeSpan(cursor.read_i64_le()?),
		PrimitiveType::DateTime => {
			let raw = cursor.read_u64_le()?;
			PrimitiveValue::DateTime(DateTimeValue {
				ticks: raw & DATETIME_TICKS_MASK,
				kind: (raw >> 62) as u8,
			})
		}
		PrimitiveType::UInt16 => PrimitiveValue::UInt16(cursor.read_u16_le()?),
		PrimitiveType::UInt32 => PrimitiveValue::UInt32(cursor.read_u32_le()?),
		PrimitiveType::UInt64 => PrimitiveValue::UInt64(cursor.read_u64_le()?),
		PrimitiveType::Null => PrimitiveValue::Null,
		PrimitiveType::String => PrimitiveValue::String(read_length_prefixed_string(cursor, opt)?),
	})
}

fn read_utf8_char(cursor: &mut Cursor<'_>) -> Result<char> {
	let at = cursor.pos();
	let lead = cursor.read_u8()?;
	let width = match lead {
		0x00..=0x7F => 1,
		0xC0..=0xDF => 2,
		0xE0..=0xEF => 3,
		0xF0..=0xF7 => 4,
		_ => return Err(NrbfError::InvalidChar { at }),
	};

	let mut buf = [lead, 0, 0, 0];
	buf[1..width].copy_from_slice(cursor.read_exact(width - 1)?);
	let text = std::str::from_utf8(&buf[..width]).map_err(|_| NrbfError::InvalidChar { at })?;
	text.chars().next().ok_or(NrbfError::InvalidChar { at })
}
