//! Title expectations.

use std::fmt;

use regex_lite::Regex;

use crate::error::{Result, SmokeError};

/// What a page title is expected to look like.
///
/// Mirrors the two forms the assertion accepts: a literal string compared for
/// equality, or a regular expression matched anywhere in the title.
#[derive(Debug, Clone)]
pub enum TitleMatcher {
	Exact(String),
	Pattern(Regex),
}

impl TitleMatcher {
	/// Expects the title to equal `title` exactly.
	pub fn exact(title: impl Into<String>) -> Self {
		TitleMatcher::Exact(title.into())
	}

	/// Expects the title to match `pattern`.
	pub fn pattern(pattern: &str) -> Result<Self> {
		let regex = Regex::new(pattern).map_err(|e| SmokeError::Config {
			var: "title pattern".into(),
			reason: format!("{pattern:?} is not a valid regex: {e}"),
		})?;
		Ok(TitleMatcher::Pattern(regex))
	}

	/// Expects any title at all, including the empty one.
	pub fn any() -> Self {
		TitleMatcher::Pattern(Regex::new(".*").expect(".* is a valid regex"))
	}

	pub fn is_match(&self, title: &str) -> bool {
		match self {
			TitleMatcher::Exact(expected) => title == expected,
			TitleMatcher::Pattern(regex) => regex.is_match(title),
		}
	}
}

impl fmt::Display for TitleMatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TitleMatcher::Exact(expected) => write!(f, "={expected:?}"),
			TitleMatcher::Pattern(regex) => write!(f, "~/{}/", regex.as_str()),
		}
	}
}
