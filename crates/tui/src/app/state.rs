//! Core state container for the terminal application's front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles together the
//! result cache, the query input, fetch progress, and UI-specific state.

use hns_api::{ResultCache, SearchBackend, Story, worker};
use throbber_widgets_tui::ThrobberState;

use super::fetch::FetchRuntime;
use super::results::ResultsState;
use super::sort::{self, SortOrder};
use crate::input::QueryInput;
use crate::style::Theme;

/// Progress of the single outstanding fetch.
///
/// `Failed` is deliberately distinct from `Loading`: a request that dies on
/// the network surfaces its error instead of leaving the UI spinning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum FetchState {
	#[default]
	Idle,
	Loading,
	Failed(String),
}

/// What the user walked away with when the UI exited.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
	/// Whether a story was accepted (as opposed to quitting).
	pub accepted: bool,
	/// Live input text at exit time.
	pub query: String,
	/// The accepted story, if any.
	pub story: Option<Story>,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.fetch.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Accumulated results per submitted search term.
	pub cache: ResultCache,
	/// Text input widget holding the live search term.
	pub search_input: QueryInput<'a>,
	/// Term whose cache entry is displayed; set only on submission.
	pub(crate) search_key: String,
	pub(crate) fetch: FetchRuntime,
	pub(crate) fetch_state: FetchState,
	pub(crate) sort: SortOrder,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
	pub(crate) theme: Theme,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose network traffic runs through `backend` on a
	/// background worker thread.
	pub fn new<B>(backend: B, initial_query: String) -> Self
	where
		B: SearchBackend + Send + 'static,
	{
		let (command_tx, update_rx, latest_id) = worker::spawn(backend);

		Self {
			cache: ResultCache::new(),
			search_input: QueryInput::new(initial_query),
			search_key: String::new(),
			fetch: FetchRuntime::new(command_tx, update_rx, latest_id),
			fetch_state: FetchState::default(),
			sort: SortOrder::default(),
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
			theme: Theme::default(),
		}
	}

	/// Apply a different theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub(crate) fn is_loading(&self) -> bool {
		matches!(self.fetch_state, FetchState::Loading)
	}

	/// Number of hits cached for the active key, before sorting.
	pub(crate) fn visible_len(&self) -> usize {
		self.cache.hits(&self.search_key).len()
	}

	/// Display order of the active key's hits as indices into the cache entry.
	pub(crate) fn visible_indices(&self) -> Vec<usize> {
		sort::sorted_indices(
			self.cache.hits(&self.search_key),
			self.sort.key,
			self.sort.reverse,
		)
	}

	/// The story under the cursor, honoring the current sort order.
	pub(crate) fn selected_story(&self) -> Option<&Story> {
		let selected = self.results.table_state.selected()?;
		let order = self.visible_indices();
		let index = *order.get(selected)?;
		self.cache.hits(&self.search_key).get(index)
	}

	/// Remove the story under the cursor from the active cache entry.
	///
	/// Safe before any fetch has completed: with no entry there is no
	/// selection, and the dismissal is a no-op.
	pub(crate) fn dismiss_selected(&mut self) {
		let Some(object_id) = self
			.selected_story()
			.map(|story| story.object_id.clone())
		else {
			return;
		};
		self.cache.dismiss(&self.search_key, &object_id);
		self.results.ensure_selection(self.visible_len());
	}

	pub(crate) fn cycle_sort(&mut self) {
		self.sort.key = self.sort.key.next();
	}

	pub(crate) fn toggle_sort_reverse(&mut self) {
		self.sort.reverse = !self.sort.reverse;
	}

	pub(crate) fn move_selection_up(&mut self) {
		self.results.move_up(self.visible_len());
	}

	pub(crate) fn move_selection_down(&mut self) {
		self.results.move_down(self.visible_len());
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::{Duration, Instant};

	use hns_api::{ApiError, SearchPage};

	use super::*;

	struct ScriptedBackend {
		responses: Mutex<Vec<Result<SearchPage, ApiError>>>,
	}

	impl ScriptedBackend {
		fn new(responses: Vec<Result<SearchPage, ApiError>>) -> Self {
			Self {
				responses: Mutex::new(responses),
			}
		}
	}

	impl SearchBackend for ScriptedBackend {
		fn search(&self, _term: &str, _page: u32) -> Result<SearchPage, ApiError> {
			self.responses.lock().expect("lock").remove(0)
		}
	}

	fn story(id: &str, points: u64) -> Story {
		Story {
			object_id: id.to_string(),
			title: Some(format!("story {id}")),
			author: Some("author".to_string()),
			url: None,
			num_comments: Some(1),
			points: Some(points),
		}
	}

	fn page(hits: Vec<Story>, page: u32) -> SearchPage {
		SearchPage { hits, page }
	}

	fn wait_for_fetch(app: &mut App<'_>) {
		let deadline = Instant::now() + Duration::from_secs(1);
		while app.fetch.is_in_flight() && Instant::now() < deadline {
			std::thread::sleep(Duration::from_millis(10));
			app.pump_fetch_updates();
		}
		app.pump_fetch_updates();
	}

	#[test]
	fn submission_fetches_page_zero_and_merges_it() {
		let backend = ScriptedBackend::new(vec![Ok(page(vec![story("1", 4)], 0))]);
		let mut app = App::new(backend, "redux".to_string());

		app.submit_search();
		assert!(app.is_loading());
		wait_for_fetch(&mut app);

		assert_eq!(app.fetch_state, FetchState::Idle);
		assert_eq!(app.search_key, "redux");
		assert_eq!(app.cache.hits("redux").len(), 1);
		assert_eq!(app.cache.page("redux"), 0);
	}

	#[test]
	fn resubmitting_a_cached_term_skips_the_network() {
		// One scripted response only: a second fetch would panic the worker.
		let backend = ScriptedBackend::new(vec![Ok(page(vec![story("1", 4)], 0))]);
		let mut app = App::new(backend, "redux".to_string());

		app.submit_search();
		wait_for_fetch(&mut app);
		app.submit_search();

		assert!(!app.fetch.is_in_flight());
		assert_eq!(app.fetch_state, FetchState::Idle);
		assert_eq!(app.cache.hits("redux").len(), 1);
	}

	#[test]
	fn more_requests_the_next_page_for_the_active_key() {
		let backend = ScriptedBackend::new(vec![
			Ok(page(vec![story("1", 4)], 0)),
			Ok(page(vec![story("2", 9)], 1)),
		]);
		let mut app = App::new(backend, "redux".to_string());

		app.submit_search();
		wait_for_fetch(&mut app);
		app.request_more();
		assert!(app.is_loading());
		wait_for_fetch(&mut app);

		assert_eq!(app.cache.page("redux"), 1);
		assert_eq!(app.cache.hits("redux").len(), 2);
	}

	#[test]
	fn more_before_the_first_merge_is_ignored() {
		let backend = ScriptedBackend::new(Vec::new());
		let mut app = App::new(backend, "redux".to_string());

		app.request_more();
		assert!(!app.fetch.is_in_flight());
	}

	#[test]
	fn fetch_failure_surfaces_an_error_state() {
		let backend = ScriptedBackend::new(vec![Err(ApiError::Status { code: 500 })]);
		let mut app = App::new(backend, "redux".to_string());

		app.submit_search();
		wait_for_fetch(&mut app);

		match &app.fetch_state {
			FetchState::Failed(message) => assert!(message.contains("500")),
			other => panic!("expected failure state, got {other:?}"),
		}
		assert!(app.cache.needs_fetch("redux"));
	}

	#[test]
	fn dismiss_before_any_fetch_is_a_safe_no_op() {
		let backend = ScriptedBackend::new(Vec::new());
		let mut app = App::new(backend, "redux".to_string());

		app.dismiss_selected();

		assert!(app.cache.needs_fetch("redux"));
		assert_eq!(app.visible_len(), 0);
	}

	#[test]
	fn dismiss_respects_the_current_sort_order() {
		let backend = ScriptedBackend::new(vec![Ok(page(
			vec![story("low", 1), story("high", 9)],
			0,
		))]);
		let mut app = App::new(backend, "redux".to_string());

		app.submit_search();
		wait_for_fetch(&mut app);

		// Points sort puts "high" first; the cursor sits on row 0.
		app.cycle_sort(); // Title
		app.cycle_sort(); // Author
		app.cycle_sort(); // Comments
		app.cycle_sort(); // Points
		app.results.table_state.select(Some(0));
		app.dismiss_selected();

		let remaining: Vec<&str> = app
			.cache
			.hits("redux")
			.iter()
			.map(|hit| hit.object_id.as_str())
			.collect();
		assert_eq!(remaining, vec!["low"]);
	}
}
