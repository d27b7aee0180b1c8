//! End-to-end smoke checks for a web frontend.
//!
//! The suite drives a real Chromium over the Chrome DevTools Protocol and
//! asserts observable page state. Configuration comes from `SMOKE_*`
//! environment variables ([`SuiteConfig::from_env`]); the checks themselves
//! live in `tests/`.
//!
//! ```no_run
//! use smoke::{Session, SuiteConfig, TitleMatcher};
//!
//! # async fn run() -> smoke::Result<()> {
//! let config = SuiteConfig::from_env()?;
//! let session = Session::launch(&config).await?;
//! session.goto("/").await?;
//! session.expect_title(&TitleMatcher::any()).await?;
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod title;
pub mod types;

pub use config::{SuiteConfig, Window};
pub use error::{Result, SmokeError};
pub use session::Session;
pub use title::TitleMatcher;
pub use types::PageInfo;
