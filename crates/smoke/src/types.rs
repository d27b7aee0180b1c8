use serde::{Deserialize, Serialize};

/// Where a navigation landed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
	pub url: String,
	pub title: String,
}
