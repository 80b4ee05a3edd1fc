use std::path::PathBuf;

use nrbfdoc::nrbf::{AdditionalTypeInfo, PrimitiveValue, Record, Result, ValueWithCode};

use crate::cmd::util::{DecodeArgs, emit_json, open_stream};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Stop after this many records.
	#[arg(long)]
	pub limit: Option<usize>,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Decode records in order and print one entry per record.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, limit, decode } = args;

	let stream = open_stream(&path, &decode)?;
	let mut reader = stream.reader();
	let mut records = reader.records();
	let limit = limit.unwrap_or(usize::MAX);

	let mut entries = Vec::new();
	while entries.len() < limit {
		let offset = records.pos();
		let Some(record) = records.next() else {
			break;
		};
		entries.push(RecordJson { offset, record: record? });
	}

	if json {
		let payload = RecordsJson {
			path: path.display().to_string(),
			count: entries.len(),
			records: entries,
		};
		return emit_json(&payload);
	}

	for entry in &entries {
		println!("{:>8}  {:<32} {}", entry.offset, format!("{:?}", entry.record.record_type()), summarize(&entry.record));
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct RecordsJson {
	path: String,
	count: usize,
	records: Vec<RecordJson>,
}

#[derive(serde::Serialize)]
struct RecordJson {
	offset: usize,
	record: Record,
}

/// One-line description of a record's payload.
pub(crate) fn summarize(record: &Record) -> String {
	match record {
		Record::SerializedStreamHeader(header) => format!(
			"root={} header={} version={}.{}",
			header.root_id, header.header_id, header.major_version, header.minor_version
		),
		Record::ClassWithId { object_id, metadata_id } => format!("id={object_id} metadata={metadata_id}"),
		Record::SystemClassWithMembers { class_info } | Record::SystemClassWithMembersAndTypes { class_info, .. } => {
			format!("id={} name={} members={}", class_info.object_id, class_info.name, class_info.member_count)
		}
		Record::ClassWithMembers { class_info, library_id } | Record::ClassWithMembersAndTypes { class_info, library_id, .. } => format!(
			"id={} name={} members={} library={library_id}",
			class_info.object_id, class_info.name, class_info.member_count
		),
		Record::BinaryObjectString { object_id, value } => format!("id={object_id} value={value:?}"),
		Record::BinaryArray(array) => format!(
			"id={} shape={:?} rank={} lengths={:?} element={}",
			array.object_id,
			array.array_type,
			array.rank,
			array.lengths,
			type_label(&array.element_info).unwrap_or_else(|| format!("{:?}", array.element_type))
		),
		Record::MemberPrimitiveTyped { value } => value_label(value),
		Record::MemberReference { id_ref } => format!("ref={id_ref}"),
		Record::ObjectNull | Record::MessageEnd => String::new(),
		Record::BinaryLibrary { library_id, library_name } => format!("id={library_id} name={library_name}"),
		Record::ObjectNullMultiple256 { null_count } => format!("count={null_count}"),
		Record::ObjectNullMultiple { null_count } => format!("count={null_count}"),
		Record::ArraySinglePrimitive {
			array_info,
			array_type,
			primitive_type,
		} => format!(
			"id={} length={} shape={array_type:?} element={primitive_type:?}",
			array_info.object_id, array_info.length
		),
		Record::ArraySingleObject { array_info } | Record::ArraySingleString { array_info } => {
			format!("id={} length={}", array_info.object_id, array_info.length)
		}
		Record::MethodCall(call) => format!(
			"flags={:#06x} method={} type={} args=[{}]",
			call.message_flags.bits(),
			call.method_name,
			call.type_name,
			args_label(&call.args)
		),
		Record::MethodReturn(ret) => format!(
			"flags={:#06x} return={} args=[{}]",
			ret.message_flags.bits(),
			value_label(&ret.return_value.value),
			args_label(&ret.args)
		),
	}
}

/// Render additional type info as a short label; `None` when it carries nothing.
pub(crate) fn type_label(info: &AdditionalTypeInfo) -> Option<String> {
	match info {
		AdditionalTypeInfo::None => None,
		AdditionalTypeInfo::Primitive(ty) => Some(format!("{ty:?}")),
		AdditionalTypeInfo::SystemClass(name) => Some(name.clone()),
		AdditionalTypeInfo::Class(class) => Some(format!("{}@{}", class.type_name, class.library_id)),
	}
}

fn value_label(value: &PrimitiveValue) -> String {
	match value {
		PrimitiveValue::Boolean(item) => format!("Boolean({item})"),
		PrimitiveValue::Byte(item) => format!("Byte({item})"),
		PrimitiveValue::Char(item) => format!("Char({item:?})"),
		PrimitiveValue::Decimal(item) => format!("Decimal({item})"),
		PrimitiveValue::Double(item) => format!("Double({item})"),
		PrimitiveValue::Int16(item) => format!("Int16({item})"),
		PrimitiveValue::Int32(item) => format!("Int32({item})"),
		PrimitiveValue::Int64(item) => format!("Int64({item})"),
		PrimitiveValue::SByte(item) => format!("SByte({item})"),
		PrimitiveValue::Single(item) => format!("Single({item})"),
		PrimitiveValue::TimeSpan(item) => format!("TimeSpan({item})"),
		PrimitiveValue::DateTime(item) => format!("DateTime(ticks={} kind={})", item.ticks, item.kind),
		PrimitiveValue::UInt16(item) => format!("UInt16({item})"),
		PrimitiveValue::UInt32(item) => format!("UInt32({item})"),
		PrimitiveValue::UInt64(item) => format!("UInt64({item})"),
		PrimitiveValue::Null => "Null".to_owned(),
		PrimitiveValue::String(item) => format!("String({item:?})"),
	}
}

fn args_label(args: &[ValueWithCode]) -> String {
	args.iter().map(|item| value_label(&item.value)).collect::<Vec<_>>().join(", ")
}
