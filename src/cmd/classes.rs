use std::collections::HashMap;
use std::path::PathBuf;

use nrbfdoc::nrbf::{BinaryType, ClassInfo, MemberTypeInfo, Record, Result};

use crate::cmd::records::type_label;
use crate::cmd::util::{DecodeArgs, emit_json, open_stream};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// List class declarations with their members and resolved library names.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, decode } = args;

	let stream = open_stream(&path, &decode)?;
	let records = stream.read_all()?;

	let libraries: HashMap<i32, &str> = records
		.iter()
		.filter_map(|record| match record {
			Record::BinaryLibrary { library_id, library_name } => Some((*library_id, library_name.as_str())),
			_ => None,
		})
		.collect();

	let classes: Vec<ClassJson> = records
		.iter()
		.filter_map(|record| match record {
			Record::SystemClassWithMembers { class_info } => Some(class_entry(class_info, None, None, &libraries)),
			Record::ClassWithMembers { class_info, library_id } => Some(class_entry(class_info, Some(*library_id), None, &libraries)),
			Record::SystemClassWithMembersAndTypes { class_info, member_types } => {
				Some(class_entry(class_info, None, Some(member_types), &libraries))
			}
			Record::ClassWithMembersAndTypes {
				class_info,
				library_id,
				member_types,
			} => Some(class_entry(class_info, Some(*library_id), Some(member_types), &libraries)),
			_ => None,
		})
		.collect();

	if json {
		let payload = ClassesJson {
			path: path.display().to_string(),
			count: classes.len(),
			classes,
		};
		return emit_json(&payload);
	}

	for class in &classes {
		let origin = match (&class.library_id, &class.library_name) {
			(Some(id), Some(name)) => format!("library {id} ({name})"),
			(Some(id), None) => format!("library {id}"),
			_ => "system".to_owned(),
		};
		println!("{} #{} [{}]", class.name, class.object_id, origin);
		for member in &class.members {
			match (&member.binary_type, &member.type_name) {
				(Some(binary_type), Some(type_name)) => println!("  {}: {binary_type:?} {type_name}", member.name),
				(Some(binary_type), None) => println!("  {}: {binary_type:?}", member.name),
				_ => println!("  {}", member.name),
			}
		}
	}

	Ok(())
}

fn class_entry(info: &ClassInfo, library_id: Option<i32>, member_types: Option<&MemberTypeInfo>, libraries: &HashMap<i32, &str>) -> ClassJson {
	let members = match member_types {
		Some(types) => info
			.member_names
			.iter()
			.zip(types.iter())
			.map(|(name, (binary_type, additional))| MemberJson {
				name: name.clone(),
				binary_type: Some(binary_type),
				type_name: type_label(additional),
			})
			.collect(),
		None => info
			.member_names
			.iter()
			.map(|name| MemberJson {
				name: name.clone(),
				binary_type: None,
				type_name: None,
			})
			.collect(),
	};

	ClassJson {
		object_id: info.object_id,
		name: info.name.clone(),
		library_id,
		library_name: library_id.and_then(|id| libraries.get(&id)).map(|name| (*name).to_owned()),
		members,
	}
}

#[derive(serde::Serialize)]
struct ClassesJson {
	path: String,
	count: usize,
	classes: Vec<ClassJson>,
}

#[derive(serde::Serialize)]
struct ClassJson {
	object_id: i32,
	name: String,
	library_id: Option<i32>,
	library_name: Option<String>,
	members: Vec<MemberJson>,
}

#[derive(serde::Serialize)]
struct MemberJson {
	name: String,
	binary_type: Option<BinaryType>,
	type_name: Option<String>,
}
