//! Fetch coordination between the UI and the background worker.
//!
//! This module handles communication with the `hns-api` fetch worker:
//! request sequencing, the single-outstanding-request rule, and merging
//! pumped updates into the result cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use hns_api::{FetchCommand, FetchUpdate};
use tracing::info;

use super::state::{App, FetchState};

/// Channel bundle for talking to the background fetch worker.
pub(crate) struct FetchRuntime {
	command_tx: Sender<FetchCommand>,
	update_rx: Receiver<FetchUpdate>,
	latest_id: Arc<AtomicU64>,
	next_id: u64,
	in_flight: bool,
}

impl FetchRuntime {
	pub(crate) fn new(
		command_tx: Sender<FetchCommand>,
		update_rx: Receiver<FetchUpdate>,
		latest_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			command_tx,
			update_rx,
			latest_id,
			next_id: 0,
			in_flight: false,
		}
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Send a fetch command unless one is already outstanding.
	///
	/// Returns whether the command was issued. The latest-id counter is
	/// stored before sending so the worker can drop superseded commands.
	pub(crate) fn issue(&mut self, term: String, page: u32) -> bool {
		if self.in_flight {
			return false;
		}

		self.next_id += 1;
		let id = self.next_id;
		self.latest_id.store(id, Ordering::Relaxed);

		if self
			.command_tx
			.send(FetchCommand::Fetch { id, term, page })
			.is_err()
		{
			return false;
		}

		self.in_flight = true;
		true
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		self.latest_id.load(Ordering::Relaxed) == id
	}

	pub(crate) fn try_recv(&self) -> Result<FetchUpdate, TryRecvError> {
		self.update_rx.try_recv()
	}

	pub(crate) fn complete(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.command_tx.send(FetchCommand::Shutdown);
	}
}

impl App<'_> {
	/// Submit the current input text as the active search key.
	///
	/// The key changes unconditionally; the network is only touched when the
	/// cache has nothing for the term yet.
	pub(crate) fn submit_search(&mut self) {
		let term = self.search_input.text().to_string();
		info!(term = %term, "search submitted");
		self.search_key = term.clone();
		self.results.ensure_selection(self.visible_len());

		if self.cache.needs_fetch(&term) {
			self.request_fetch(term, hns_api::DEFAULT_PAGE);
		}
	}

	/// Fetch the next page for the active key (the "More" action).
	///
	/// Ignored while a fetch is outstanding or before the first page for the
	/// key has been merged.
	pub(crate) fn request_more(&mut self) {
		if self.fetch.is_in_flight() {
			return;
		}
		let key = self.search_key.clone();
		if self.cache.needs_fetch(&key) {
			return;
		}

		let next_page = self.cache.page(&key) + 1;
		self.request_fetch(key, next_page);
	}

	fn request_fetch(&mut self, term: String, page: u32) {
		if self.fetch.issue(term, page) {
			self.fetch_state = FetchState::Loading;
		}
	}

	/// Drain any fetch updates waiting on the receiver channel.
	pub(crate) fn pump_fetch_updates(&mut self) {
		loop {
			match self.fetch.try_recv() {
				Ok(update) => self.handle_fetch_update(update),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_fetch_update(&mut self, update: FetchUpdate) {
		if !self.fetch.matches_latest(update.id) {
			return;
		}
		self.fetch.complete();

		match update.outcome {
			Ok(body) => {
				// Merge under the requesting term, not the key displayed right
				// now; a resubmission mid-flight must not corrupt another entry.
				self.cache.merge_page(&update.term, body.hits, body.page);
				self.fetch_state = FetchState::Idle;
				self.results.ensure_selection(self.visible_len());
			}
			Err(err) => {
				self.fetch_state = FetchState::Failed(err.to_string());
			}
		}
	}
}
