use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initializes tracing for the suite.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init(verbosity: u8) {
	// 0 = errors only (suppress CDP transport noise entirely)
	// 1 = info for the suite, warn for chromiumoxide
	// 2+ = debug/trace for everything
	let filter = match verbosity {
		0 => "error,chromiumoxide=off",
		1 => "info,chromiumoxide=warn",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.try_init();
}
