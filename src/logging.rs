use log::LevelFilter;

fn default_level() -> LevelFilter {
	match cfg!(debug_assertions) {
		true => LevelFilter::Debug,
		false => LevelFilter::Info,
	}
}

/// Installs the global logger. Calling it again leaves the first logger in place.
pub fn init() {
	let level = default_level();
	if let Err(err) = install(level) {
		log::debug!(target: "logging", "logger already installed: {err}");
	}
}

/// Browser devtools console.
#[cfg(target_family = "wasm")]
fn install(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	let level = level.to_level().unwrap_or(log::Level::Error);
	console_log::init_with_level(level)
}

#[cfg(not(target_family = "wasm"))]
fn install(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	simplelog::SimpleLogger::init(level, simplelog::Config::default())
}
