use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SmokeError>;

#[derive(Debug, Error)]
pub enum SmokeError {
	#[error("configuration error in {var}: {reason}")]
	Config { var: String, reason: String },

	#[error("browser launch failed: {0}")]
	BrowserLaunch(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("javascript evaluation failed: {0}")]
	Eval(String),

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("title expectation {expected} not met after {ms}ms, last title was {actual:?}")]
	TitleMismatch {
		expected: String,
		actual: String,
		ms: u64,
	},

	#[error("screenshot failed: {path}")]
	Screenshot {
		path: PathBuf,
		#[source]
		source: anyhow::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Cdp(#[from] chromiumoxide::error::CdpError),
}

impl SmokeError {
	/// True when the error is the session-level kind a suite should retry or
	/// surface as an environment problem rather than a page defect.
	pub fn is_environment(&self) -> bool {
		matches!(self, SmokeError::Config { .. } | SmokeError::BrowserLaunch(_) | SmokeError::Io(_))
	}
}
