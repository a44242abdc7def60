//! Wire types for the Algolia `/search` response body.

use serde::{Deserialize, Serialize};

/// One search hit returned by the remote endpoint.
///
/// Only `objectID` is guaranteed to be present. Comment hits omit the title
/// and URL, and the endpoint reports `num_comments` as `null` for them, so
/// everything beyond the identifier is optional and rendered as an empty
/// cell when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
	/// Unique identifier within one result set.
	#[serde(rename = "objectID")]
	pub object_id: String,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub num_comments: Option<u64>,
	#[serde(default)]
	pub points: Option<u64>,
}

impl Story {
	/// Title shown in the results table, empty when the hit has none.
	#[must_use]
	pub fn title_text(&self) -> &str {
		self.title.as_deref().unwrap_or_default()
	}

	/// Author shown in the results table, empty when the hit has none.
	#[must_use]
	pub fn author_text(&self) -> &str {
		self.author.as_deref().unwrap_or_default()
	}
}

/// One page of the `/search` response: the hits plus the zero-indexed page
/// number the endpoint echoed back. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
	pub hits: Vec<Story>,
	pub page: u32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_response_body_ignoring_unknown_fields() {
		let body = r#"{
			"hits": [
				{
					"objectID": "10006769",
					"title": "Redux",
					"author": "kjhughes",
					"url": "https://github.com/rackt/redux",
					"num_comments": 135,
					"points": 1079,
					"_highlightResult": {"title": {"value": "<em>Redux</em>"}}
				}
			],
			"page": 0,
			"nbHits": 5432,
			"nbPages": 55,
			"hitsPerPage": 100,
			"processingTimeMS": 3
		}"#;

		let page: SearchPage = serde_json::from_str(body).expect("decode");
		assert_eq!(page.page, 0);
		assert_eq!(page.hits.len(), 1);
		assert_eq!(page.hits[0].object_id, "10006769");
		assert_eq!(page.hits[0].title.as_deref(), Some("Redux"));
		assert_eq!(page.hits[0].points, Some(1079));
	}

	#[test]
	fn tolerates_comment_hits_with_missing_fields() {
		let body = r#"{
			"hits": [
				{"objectID": "42", "author": "pg", "num_comments": null}
			],
			"page": 3
		}"#;

		let page: SearchPage = serde_json::from_str(body).expect("decode");
		let hit = &page.hits[0];
		assert_eq!(hit.title, None);
		assert_eq!(hit.url, None);
		assert_eq!(hit.num_comments, None);
		assert_eq!(hit.title_text(), "");
		assert_eq!(hit.author_text(), "pg");
	}
}
