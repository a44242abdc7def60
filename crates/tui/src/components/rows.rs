//! Table row construction for stories.

use hns_api::Story;
use ratatui::widgets::{Cell, Row};

/// Build table rows for `hits` in the given display `order`.
///
/// `order` holds indices into `hits`; out-of-range entries are skipped.
/// Missing fields render as empty cells.
pub fn build_story_rows<'a>(hits: &'a [Story], order: &[usize]) -> Vec<Row<'a>> {
	order
		.iter()
		.filter_map(|&index| hits.get(index))
		.map(|story| {
			Row::new(vec![
				Cell::from(story.title_text()),
				Cell::from(story.author_text()),
				Cell::from(
					story
						.num_comments
						.map(|count| count.to_string())
						.unwrap_or_default(),
				),
				Cell::from(
					story
						.points
						.map(|points| points.to_string())
						.unwrap_or_default(),
				),
			])
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn out_of_range_order_entries_are_skipped() {
		let hits = vec![Story {
			object_id: "1".to_string(),
			title: Some("Redux".to_string()),
			author: None,
			url: None,
			num_comments: None,
			points: None,
		}];
		let rows = build_story_rows(&hits, &[0, 7]);
		assert_eq!(rows.len(), 1);
	}
}
