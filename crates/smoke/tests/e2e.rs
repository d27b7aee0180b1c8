//! End-to-end smoke checks.
//!
//! These tests launch real Chromium instances; they are ignored by default
//! and run with `cargo test -- --ignored`. Checks that do not need the app
//! under test use `data:` URLs to avoid network dependencies.

use smoke::{Session, SmokeError, SuiteConfig, TitleMatcher};

fn suite_config() -> SuiteConfig {
	smoke::logging::init(1);
	SuiteConfig::from_env().expect("suite configuration")
}

#[tokio::test]
#[ignore = "requires a Chromium binary and a running app server at SMOKE_BASE_URL"]
async fn home_page_has_title() {
	let session = Session::launch(&suite_config()).await.expect("launch browser");

	session.goto("/").await.expect("load home page");
	let title = session.expect_title(&TitleMatcher::any()).await.expect("home page has a title");
	assert!(!title.is_empty(), "home page title is empty");
	eprintln!("home page title: {title:?}");

	session.close().await.expect("close browser");
}

#[tokio::test]
#[ignore = "requires a Chromium binary"]
async fn navigate_reports_url_and_title() {
	let session = Session::launch(&suite_config()).await.expect("launch browser");

	let info = session
		.goto("data:text/html,<html><head><title>Nav Test</title></head></html>")
		.await
		.expect("navigate");
	assert_eq!(info.title, "Nav Test");
	assert!(info.url.starts_with("data:"), "unexpected url: {}", info.url);

	session.close().await.expect("close browser");
}

#[tokio::test]
#[ignore = "requires a Chromium binary"]
async fn exact_title_expectation_succeeds() {
	let session = Session::launch(&suite_config()).await.expect("launch browser");

	session
		.goto("data:text/html,<html><head><title>My Title</title></head></html>")
		.await
		.expect("navigate");
	let title = session.expect_title(&TitleMatcher::exact("My Title")).await.expect("title matches");
	assert_eq!(title, "My Title");

	session.close().await.expect("close browser");
}

#[tokio::test]
#[ignore = "requires a Chromium binary"]
async fn mismatched_title_reports_last_observed() {
	let mut config = suite_config();
	config.expect_timeout_ms = 500;
	let session = Session::launch(&config).await.expect("launch browser");

	session.goto("data:text/html,<title>Actual</title>").await.expect("navigate");
	let err = session
		.expect_title(&TitleMatcher::exact("Expected"))
		.await
		.expect_err("expectation should time out");
	match err {
		SmokeError::TitleMismatch { actual, .. } => assert_eq!(actual, "Actual"),
		other => panic!("expected a title mismatch, got: {other}"),
	}

	session.close().await.expect("close browser");
}

#[tokio::test]
#[ignore = "requires a Chromium binary"]
async fn untitled_page_still_satisfies_any() {
	let session = Session::launch(&suite_config()).await.expect("launch browser");

	session.goto("data:text/html,<h1>No title here</h1>").await.expect("navigate");
	assert_eq!(session.title().await.expect("read title"), "");
	session.expect_title(&TitleMatcher::any()).await.expect("any matches the empty title");

	session.close().await.expect("close browser");
}

#[tokio::test]
#[ignore = "requires a Chromium binary"]
async fn eval_reads_document_title() {
	let session = Session::launch(&suite_config()).await.expect("launch browser");

	session
		.goto("data:text/html,<html><head><title>My Title</title></head></html>")
		.await
		.expect("navigate");
	let value = session.eval_value("document.title").await.expect("evaluate");
	assert_eq!(value, serde_json::json!("My Title"));

	session.close().await.expect("close browser");
}

#[tokio::test]
#[ignore = "requires a Chromium binary"]
async fn screenshot_creates_file() {
	let temp = tempfile::TempDir::new().expect("temp dir");
	let output_path = temp.path().join("home.png");

	let session = Session::launch(&suite_config()).await.expect("launch browser");
	session.goto("data:text/html,<h1>Screenshot</h1>").await.expect("navigate");
	session.screenshot_to(&output_path).await.expect("screenshot");
	session.close().await.expect("close browser");

	let metadata = std::fs::metadata(&output_path).expect("screenshot file exists");
	assert!(metadata.len() > 0, "screenshot file is empty");
}
