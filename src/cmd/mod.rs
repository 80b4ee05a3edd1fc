/// Class declaration listing command.
pub mod classes;
/// Stream-level information command.
pub mod info;
/// Stderr logger setup.
pub mod logger;
/// Record dump command.
pub mod records;
/// Shared CLI helpers.
pub mod util;
