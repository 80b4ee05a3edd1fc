#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "nrbfdoc", about = ".NET remoting binary stream inspection tools")]
struct Cli {
	/// Increase log verbosity (-v debug, -vv trace).
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print header fields and per-kind record counts.
	Info(cmd::info::Args),
	/// Decode and print every record.
	Records(cmd::records::Args),
	/// List class declarations and their members.
	Classes(cmd::classes::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nrbfdoc::nrbf::Result<()> {
	let cli = Cli::parse();
	cmd::logger::init(cli.verbose);

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Records(args) => cmd::records::run(args),
		Commands::Classes(args) => cmd::classes::run(args),
	}
}
