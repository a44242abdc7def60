//! Per-term result cache accumulating fetched pages.

use std::collections::{HashMap, HashSet};

use crate::story::Story;

/// Accumulated hits and the highest page index merged for one search key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedResults {
	pub hits: Vec<Story>,
	pub page: u32,
}

/// Maps search keys to their accumulated results.
///
/// Keys are search terms exactly as submitted. An entry is created by the
/// first merged page and never deleted, so resubmitting an already-fetched
/// term renders straight from the cache without touching the network.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
	entries: HashMap<String, CachedResults>,
}

impl ResultCache {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// True when no page has been merged for `key` yet.
	///
	/// Gates network calls on submission: a term that already has an entry is
	/// served from the cache.
	#[must_use]
	pub fn needs_fetch(&self, key: &str) -> bool {
		!self.entries.contains_key(key)
	}

	/// Append a fetched page to `key`'s entry, creating the entry if absent.
	///
	/// Hits whose `object_id` is already cached for the key are dropped, so
	/// overlapping pages cannot introduce duplicate rows. `page` becomes the
	/// new highest merged index. Entries for other keys are never touched.
	pub fn merge_page(&mut self, key: &str, new_hits: Vec<Story>, page: u32) {
		let entry = self.entries.entry(key.to_string()).or_default();
		let mut seen: HashSet<String> = entry
			.hits
			.iter()
			.map(|hit| hit.object_id.clone())
			.collect();
		for hit in new_hits {
			if seen.insert(hit.object_id.clone()) {
				entry.hits.push(hit);
			}
		}
		entry.page = page;
	}

	/// Remove the hit with `object_id` from `key`'s accumulated hits.
	///
	/// Missing keys and unknown ids are no-ops; `page` is left unchanged.
	/// Returns whether a hit was removed.
	pub fn dismiss(&mut self, key: &str, object_id: &str) -> bool {
		let Some(entry) = self.entries.get_mut(key) else {
			return false;
		};
		let before = entry.hits.len();
		entry.hits.retain(|hit| hit.object_id != object_id);
		entry.hits.len() != before
	}

	/// Full entry for `key`, if one exists.
	#[must_use]
	pub fn results(&self, key: &str) -> Option<&CachedResults> {
		self.entries.get(key)
	}

	/// Accumulated hits for `key`; an absent entry reads as an empty list.
	#[must_use]
	pub fn hits(&self, key: &str) -> &[Story] {
		self.entries
			.get(key)
			.map(|entry| entry.hits.as_slice())
			.unwrap_or_default()
	}

	/// Highest merged page index for `key`; an absent entry reads as page 0.
	#[must_use]
	pub fn page(&self, key: &str) -> u32 {
		self.entries.get(key).map(|entry| entry.page).unwrap_or(0)
	}
}
