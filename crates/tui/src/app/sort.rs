//! Stateless ordering of the displayed hits.

use std::cmp::Reverse;

use hns_api::Story;

/// Column the results table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
	/// Cache order as fetched.
	#[default]
	None,
	Title,
	Author,
	Comments,
	Points,
}

impl SortKey {
	/// Next key in the cycle triggered by the sort binding.
	#[must_use]
	pub(crate) fn next(self) -> Self {
		match self {
			Self::None => Self::Title,
			Self::Title => Self::Author,
			Self::Author => Self::Comments,
			Self::Comments => Self::Points,
			Self::Points => Self::None,
		}
	}
}

/// Active sort key plus the reversal toggle.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SortOrder {
	pub key: SortKey,
	pub reverse: bool,
}

/// Order `hits` by `key`, returning indices into the original slice.
///
/// Title and author sort ascending case-insensitively, comments and points
/// descending. `reverse` flips the final order wholesale. The slice itself is
/// never reordered; the cached order stays intact.
#[must_use]
pub(crate) fn sorted_indices(hits: &[Story], key: SortKey, reverse: bool) -> Vec<usize> {
	let mut order: Vec<usize> = (0..hits.len()).collect();
	match key {
		SortKey::None => {}
		SortKey::Title => order.sort_by_key(|&index| hits[index].title_text().to_lowercase()),
		SortKey::Author => order.sort_by_key(|&index| hits[index].author_text().to_lowercase()),
		SortKey::Comments => {
			order.sort_by_key(|&index| Reverse(hits[index].num_comments.unwrap_or(0)));
		}
		SortKey::Points => order.sort_by_key(|&index| Reverse(hits[index].points.unwrap_or(0))),
	}
	if reverse {
		order.reverse();
	}
	order
}
