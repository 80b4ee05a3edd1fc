use std::path::PathBuf;

use nrbfdoc::nrbf::{Compression, RecordType, Result};

use crate::cmd::util::{DecodeArgs, emit_json, open_stream};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Print header fields and record statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, decode } = args;

	let stream = open_stream(&path, &decode)?;
	let stats = stream.scan_record_stats()?;

	let mut entries: Vec<(RecordType, u32)> = stats.codes.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: stream.compression,
			stream_len: stream.bytes().len(),
			root_id: stats.header.map(|item| item.root_id),
			header_id: stats.header.map(|item| item.header_id),
			major_version: stats.header.map(|item| item.major_version),
			minor_version: stats.header.map(|item| item.minor_version),
			record_count: stats.record_count,
			class_count: stats.class_count,
			library_count: stats.library_count,
			has_message_end: stats.has_message_end,
			trailing_bytes: stats.trailing_bytes,
			record_types: entries
				.iter()
				.map(|(record_type, count)| RecordTypeCountJson {
					record_type: *record_type,
					count: *count,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("compression: {}", stream.compression);
	println!("stream_len: {}", stream.bytes().len());
	match stats.header {
		Some(header) => {
			println!("root_id: {}", header.root_id);
			println!("header_id: {}", header.header_id);
			println!("version: {}.{}", header.major_version, header.minor_version);
		}
		None => println!("header: missing"),
	}
	println!("record_count: {}", stats.record_count);
	println!("class_count: {}", stats.class_count);
	println!("library_count: {}", stats.library_count);
	println!("has_message_end: {}", stats.has_message_end);
	println!("trailing_bytes: {}", stats.trailing_bytes);

	println!("record_types:");
	for (record_type, count) in entries {
		println!("  {record_type:?}: {count}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: Compression,
	stream_len: usize,
	root_id: Option<i32>,
	header_id: Option<i32>,
	major_version: Option<i32>,
	minor_version: Option<i32>,
	record_count: u32,
	class_count: u32,
	library_count: u32,
	has_message_end: bool,
	trailing_bytes: usize,
	record_types: Vec<RecordTypeCountJson>,
}

#[derive(serde::Serialize)]
struct RecordTypeCountJson {
	record_type: RecordType,
	count: u32,
}
