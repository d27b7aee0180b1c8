//! Suite configuration.
//!
//! The suite is configured entirely from the environment, the way the app
//! under test supplies its base URL in CI. Every knob has a production
//! default so `SuiteConfig::from_env()` succeeds on a bare machine.

use std::path::PathBuf;

use url::Url;

use crate::error::{Result, SmokeError};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_NAV_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_EXPECT_TIMEOUT_MS: u64 = 5_000;

/// Browser window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
	pub width: u32,
	pub height: u32,
}

impl Default for Window {
	fn default() -> Self {
		Self { width: 1280, height: 720 }
	}
}

/// Fully owned suite configuration.
///
/// This type is the stable handoff between the environment and the browser
/// session; tests never read env vars themselves.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
	/// Base URL relative navigation targets resolve against.
	pub base_url: Url,
	/// Whether the browser launches headless.
	pub headless: bool,
	/// Explicit Chromium binary, when auto-detection is not wanted.
	pub chrome_executable: Option<PathBuf>,
	/// Browser window size.
	pub window: Window,
	/// Upper bound for a single navigation.
	pub nav_timeout_ms: u64,
	/// Upper bound for a polled expectation.
	pub expect_timeout_ms: u64,
}

impl Default for SuiteConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
			headless: true,
			chrome_executable: None,
			window: Window::default(),
			nav_timeout_ms: DEFAULT_NAV_TIMEOUT_MS,
			expect_timeout_ms: DEFAULT_EXPECT_TIMEOUT_MS,
		}
	}
}

impl SuiteConfig {
	/// Resolves configuration from `SMOKE_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|var| std::env::var(var).ok())
	}

	/// Resolves configuration from an arbitrary variable lookup.
	///
	/// Empty values are treated as unset.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
		let mut config = Self::default();

		if let Some(raw) = get("SMOKE_BASE_URL") {
			config.base_url = Url::parse(&raw).map_err(|e| SmokeError::Config {
				var: "SMOKE_BASE_URL".into(),
				reason: format!("{raw:?} is not an absolute URL: {e}"),
			})?;
		}
		if let Some(raw) = get("SMOKE_HEADLESS") {
			config.headless = parse_bool("SMOKE_HEADLESS", &raw)?;
		}
		if let Some(raw) = get("SMOKE_CHROME") {
			config.chrome_executable = Some(PathBuf::from(raw));
		}
		if let Some(raw) = get("SMOKE_WINDOW") {
			config.window = parse_window(&raw)?;
		}
		if let Some(raw) = get("SMOKE_NAV_TIMEOUT_MS") {
			config.nav_timeout_ms = parse_ms("SMOKE_NAV_TIMEOUT_MS", &raw)?;
		}
		if let Some(raw) = get("SMOKE_EXPECT_TIMEOUT_MS") {
			config.expect_timeout_ms = parse_ms("SMOKE_EXPECT_TIMEOUT_MS", &raw)?;
		}

		Ok(config)
	}

	/// Resolves a navigation target against the base URL.
	///
	/// Absolute URLs (anything with a scheme, including `data:`) pass through
	/// untouched; everything else joins onto `base_url`.
	pub fn resolve(&self, target: &str) -> Result<Url> {
		match Url::parse(target) {
			Ok(url) => Ok(url),
			Err(url::ParseError::RelativeUrlWithoutBase) => {
				self.base_url.join(target).map_err(|e| SmokeError::Config {
					var: "SMOKE_BASE_URL".into(),
					reason: format!("cannot resolve {target:?} against {}: {e}", self.base_url),
				})
			}
			Err(e) => Err(SmokeError::Config {
				var: "navigation target".into(),
				reason: format!("invalid navigation target {target:?}: {e}"),
			}),
		}
	}
}

fn parse_bool(var: &str, raw: &str) -> Result<bool> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		other => Err(SmokeError::Config {
			var: var.into(),
			reason: format!("expected a boolean, got {other:?}"),
		}),
	}
}

fn parse_ms(var: &str, raw: &str) -> Result<u64> {
	let ms: u64 = raw.trim().parse().map_err(|_| SmokeError::Config {
		var: var.into(),
		reason: format!("expected milliseconds, got {raw:?}"),
	})?;
	if ms == 0 {
		return Err(SmokeError::Config {
			var: var.into(),
			reason: "timeout must be non-zero".into(),
		});
	}
	Ok(ms)
}

// Accepts "1280x720".
fn parse_window(raw: &str) -> Result<Window> {
	let err = || SmokeError::Config {
		var: "SMOKE_WINDOW".into(),
		reason: format!("expected WIDTHxHEIGHT, got {raw:?}"),
	};
	let (w, h) = raw.trim().split_once(['x', 'X']).ok_or_else(err)?;
	let width: u32 = w.trim().parse().map_err(|_| err())?;
	let height: u32 = h.trim().parse().map_err(|_| err())?;
	if width == 0 || height == 0 {
		return Err(err());
	}
	Ok(Window { width, height })
}
