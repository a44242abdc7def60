use anyhow::Result;
use hns_api::Story;
use hns_tui::SearchOutcome;
use serde_json::json;

/// Link printed for an accepted story: its submitted URL, or the Hacker News
/// discussion page for self posts and comments.
fn story_link(story: &Story) -> String {
	story
		.url
		.clone()
		.unwrap_or_else(|| format!("https://news.ycombinator.com/item?id={}", story.object_id))
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.story {
		Some(story) => println!("{}", story_link(story)),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let story = match &outcome.story {
		Some(story) => json!({
			"story": story,
			"link": story_link(story),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": story,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn sample_story(url: Option<&str>) -> Story {
		Story {
			object_id: "10006769".to_string(),
			title: Some("Redux".to_string()),
			author: Some("kjhughes".to_string()),
			url: url.map(str::to_string),
			num_comments: Some(135),
			points: Some(1079),
		}
	}

	#[test]
	fn json_format_includes_the_accepted_story() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "redux".to_string(),
			story: Some(sample_story(Some("https://github.com/rackt/redux"))),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["story"]["objectID"], "10006769");
		assert_eq!(value["selection"]["link"], "https://github.com/rackt/redux");
	}

	#[test]
	fn stories_without_a_url_link_to_the_discussion_page() {
		let story = sample_story(None);
		assert_eq!(
			story_link(&story),
			"https://news.ycombinator.com/item?id=10006769"
		);
	}

	#[test]
	fn cancelled_outcomes_serialize_with_a_null_selection() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "redux".to_string(),
			story: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
