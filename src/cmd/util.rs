use std::path::Path;

use nrbfdoc::nrbf::{DecodeOptions, NrbfFile, Result};

/// Decode limit flags shared by every command.
#[derive(clap::Args)]
pub struct DecodeArgs {
	/// Maximum element count for member, dimension, and argument lists.
	#[arg(long = "max-collection")]
	pub max_collection: Option<usize>,
	/// Maximum byte length of one string.
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
	/// Use the strict limit preset as the starting point.
	#[arg(long)]
	pub strict: bool,
}

impl DecodeArgs {
	/// Resolve flags into decode options.
	pub fn options(&self) -> DecodeOptions {
		let mut options = if self.strict { DecodeOptions::strict() } else { DecodeOptions::default() };
		if let Some(max) = self.max_collection {
			options.max_collection_len = max;
		}
		if let Some(max) = self.max_string {
			options.max_string_len = max;
		}
		options
	}
}

/// Open `path` with the limits selected on the command line.
pub(crate) fn open_stream(path: &Path, decode: &DecodeArgs) -> Result<NrbfFile> {
	NrbfFile::open_with_options(path, decode.options())
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}
