use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Route log output to stderr; `verbosity` counts `-v` flags.
pub fn init(verbosity: u8) {
	let level = match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	let stderr = ConsoleAppender::builder()
		.target(Target::Stderr)
		.encoder(Box::new(PatternEncoder::new("[{l}] {t}: {m}{n}")))
		.build();

	let config = Config::builder()
		.appender(Appender::builder().build("stderr", Box::new(stderr)))
		.build(Root::builder().appender("stderr").build(level));

	match config {
		Ok(config) => {
			if let Err(err) = log4rs::init_config(config) {
				eprintln!("warning: logger already installed: {err}");
			}
		}
		Err(err) => eprintln!("warning: invalid log config: {err}"),
	}
}
