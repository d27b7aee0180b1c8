//! Browser session lifecycle.
//!
//! A [`Session`] owns one launched Chromium, the background task draining its
//! CDP event stream, and one page. All browser behavior is the automation
//! library's; this module only configures, sequences, and bounds it.

use std::path::Path;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::error::{Result, SmokeError};
use crate::title::TitleMatcher;
use crate::types::PageInfo;

const EXPECT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Active browser session used by the smoke checks.
pub struct Session {
	browser: Browser,
	page: Page,
	handler_task: JoinHandle<()>,
	config: SuiteConfig,
}

impl Session {
	/// Launches Chromium per `config` and opens a blank page.
	pub async fn launch(config: &SuiteConfig) -> Result<Self> {
		let mut builder = BrowserConfig::builder().window_size(config.window.width, config.window.height);
		if !config.headless {
			builder = builder.with_head();
		}
		if let Some(path) = &config.chrome_executable {
			builder = builder.chrome_executable(path);
		}
		// CI containers run the suite as root, where Chromium refuses to
		// start with the sandbox on.
		builder = builder.no_sandbox();

		let browser_config = builder.build().map_err(SmokeError::BrowserLaunch)?;

		debug!(target = "smoke", headless = config.headless, "launching browser...");
		let (browser, mut handler) = Browser::launch(browser_config)
			.await
			.map_err(|e| SmokeError::BrowserLaunch(e.to_string()))?;

		let handler_task = tokio::spawn(async move {
			while let Some(event) = handler.next().await {
				if event.is_err() {
					break;
				}
			}
		});

		let page = browser
			.new_page("about:blank")
			.await
			.map_err(|e| SmokeError::BrowserLaunch(e.to_string()))?;

		Ok(Self {
			browser,
			page,
			handler_task,
			config: config.clone(),
		})
	}

	/// Navigates to `target` (resolved against the base URL), waits for the
	/// load to settle, and reports where the page landed.
	pub async fn goto(&self, target: &str) -> Result<PageInfo> {
		let url = self.config.resolve(target)?;
		info!(target = "smoke", url = %url, "navigate");

		let nav = async {
			self.page.goto(url.as_str()).await?;
			self.page.wait_for_navigation().await?;
			Ok::<_, chromiumoxide::error::CdpError>(())
		};
		tokio::time::timeout(Duration::from_millis(self.config.nav_timeout_ms), nav)
			.await
			.map_err(|_| SmokeError::Timeout {
				ms: self.config.nav_timeout_ms,
				condition: format!("navigation to {url}"),
			})?
			.map_err(|e| SmokeError::Navigation {
				url: url.to_string(),
				source: anyhow::Error::new(e),
			})?;

		self.page_info().await
	}

	/// Snapshot of the current URL and title.
	pub async fn page_info(&self) -> Result<PageInfo> {
		let url = self.page.url().await?.unwrap_or_default();
		let title = self.title().await?;
		Ok(PageInfo { url, title })
	}

	/// Current `document.title`, empty when the page has none.
	pub async fn title(&self) -> Result<String> {
		Ok(self.page.get_title().await?.unwrap_or_default())
	}

	/// Polls the title until it matches or the expectation timeout elapses.
	///
	/// Titles settle asynchronously (SPAs rewrite them after load), so a
	/// one-shot read is not enough; the expectation keeps observing until
	/// the deadline and fails with the last title it saw.
	pub async fn expect_title(&self, matcher: &TitleMatcher) -> Result<String> {
		let deadline = Instant::now() + Duration::from_millis(self.config.expect_timeout_ms);
		let mut last = self.title().await?;
		loop {
			if matcher.is_match(&last) {
				debug!(target = "smoke", title = %last, expectation = %matcher, "title expectation met");
				return Ok(last);
			}
			if Instant::now() >= deadline {
				return Err(SmokeError::TitleMismatch {
					expected: matcher.to_string(),
					actual: last,
					ms: self.config.expect_timeout_ms,
				});
			}
			tokio::time::sleep(EXPECT_POLL_INTERVAL).await;
			last = self.title().await?;
		}
	}

	/// Evaluates a JavaScript expression and returns the result as JSON.
	pub async fn eval_value(&self, expression: &str) -> Result<serde_json::Value> {
		let result = self.page.evaluate(expression).await?;
		result
			.into_value()
			.map_err(|e| SmokeError::Eval(format!("{expression}: {e}")))
	}

	/// Captures a full-page PNG to `path`.
	pub async fn screenshot_to(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		self.page
			.save_screenshot(
				ScreenshotParams::builder()
					.format(CaptureScreenshotFormat::Png)
					.full_page(true)
					.build(),
				path,
			)
			.await
			.map_err(|e| SmokeError::Screenshot {
				path: path.to_path_buf(),
				source: anyhow::Error::new(e),
			})?;
		Ok(())
	}

	/// Returns the active page handle.
	pub fn page(&self) -> &Page {
		&self.page
	}

	/// Returns the configuration this session was launched with.
	pub fn config(&self) -> &SuiteConfig {
		&self.config
	}

	/// Closes the browser and reaps the event-handler task.
	pub async fn close(mut self) -> Result<()> {
		self.browser.close().await?;
		let _ = self.browser.wait().await;
		self.handler_task.abort();
		Ok(())
	}
}
