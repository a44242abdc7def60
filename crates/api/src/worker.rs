//! Background fetch worker thread and command infrastructure.
//!
//! The UI never blocks on the network: it sends [`FetchCommand`]s to a
//! dedicated worker thread and drains [`FetchUpdate`]s from its event loop.
//! A shared latest-id counter lets the worker skip commands that have
//! already been superseded before they reached the socket.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::client::{ApiError, SearchBackend};
use crate::story::SearchPage;

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub enum FetchCommand {
	/// Fetch one result page for a search term.
	Fetch {
		/// Identifier that lets the UI correlate the update with its request.
		id: u64,
		/// Search term as submitted.
		term: String,
		/// Zero-indexed page to request.
		page: u32,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one fetch command, correlated back to the issuing request.
#[derive(Debug)]
pub struct FetchUpdate {
	/// Identifier of the originating [`FetchCommand::Fetch`].
	pub id: u64,
	/// Search term the page was requested for.
	pub term: String,
	/// Page index that was requested.
	pub page: u32,
	/// Parsed response body, or the error that prevented it.
	pub outcome: Result<SearchPage, ApiError>,
}

/// Launch the background fetch worker and return its communication channels.
///
/// The returned counter holds the id of the most recently issued fetch;
/// callers store into it before sending the command so the worker can drop
/// stale requests still sitting in the queue.
pub fn spawn<B>(backend: B) -> (Sender<FetchCommand>, Receiver<FetchUpdate>, Arc<AtomicU64>)
where
	B: SearchBackend + Send + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (update_tx, update_rx) = mpsc::channel();
	let latest_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_id);

	thread::spawn(move || worker_loop(&backend, &command_rx, &update_tx, &thread_latest));

	(command_tx, update_rx, latest_id)
}

fn worker_loop<B: SearchBackend>(
	backend: &B,
	command_rx: &Receiver<FetchCommand>,
	update_tx: &Sender<FetchUpdate>,
	latest_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(backend, update_tx, latest_id, command) {
			break;
		}
	}
}

fn handle_command<B: SearchBackend>(
	backend: &B,
	update_tx: &Sender<FetchUpdate>,
	latest_id: &AtomicU64,
	command: FetchCommand,
) -> bool {
	match command {
		FetchCommand::Fetch { id, term, page } => {
			if latest_id.load(Ordering::Relaxed) != id {
				debug!(id, "skipping superseded fetch");
				return true;
			}

			debug!(id, term = %term, page, "fetching search page");
			let outcome = backend.search(&term, page);
			if let Err(err) = &outcome {
				warn!(id, term = %term, page, %err, "search request failed");
			}

			update_tx
				.send(FetchUpdate {
					id,
					term,
					page,
					outcome,
				})
				.is_ok()
		}
		FetchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use super::*;
	use crate::story::Story;

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

	fn page_with(id: &str, page: u32) -> SearchPage {
		SearchPage {
			hits: vec![Story {
				object_id: id.to_string(),
				title: Some("Redux".to_string()),
				author: None,
				url: None,
				num_comments: None,
				points: None,
			}],
			page,
		}
	}

	#[test]
	fn successful_fetch_reports_the_requested_coordinates() {
		let backend = ScriptedBackend::new(vec![Ok(page_with("1", 0))]);
		let (command_tx, update_rx, latest_id) = spawn(backend);

		latest_id.store(1, Ordering::Relaxed);
		command_tx
			.send(FetchCommand::Fetch {
				id: 1,
				term: "redux".to_string(),
				page: 0,
			})
			.expect("send");

		let update = update_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("update");
		assert_eq!(update.id, 1);
		assert_eq!(update.term, "redux");
		assert_eq!(update.page, 0);
		let body = update.outcome.expect("success");
		assert_eq!(body.hits[0].object_id, "1");
	}

	#[test]
	fn failed_fetch_surfaces_the_error() {
		let backend = ScriptedBackend::new(vec![Err(ApiError::Status { code: 503 })]);
		let (command_tx, update_rx, latest_id) = spawn(backend);

		latest_id.store(7, Ordering::Relaxed);
		command_tx
			.send(FetchCommand::Fetch {
				id: 7,
				term: "redux".to_string(),
				page: 2,
			})
			.expect("send");

		let update = update_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("update");
		assert_eq!(update.page, 2);
		match update.outcome {
			Err(ApiError::Status { code }) => assert_eq!(code, 503),
			other => panic!("expected status error, got {other:?}"),
		}
	}

	#[test]
	fn superseded_commands_are_skipped() {
		// Only one scripted response: the stale command must not consume it.
		let backend = ScriptedBackend::new(vec![Ok(page_with("2", 0))]);
		let (command_tx, update_rx, latest_id) = spawn(backend);

		latest_id.store(2, Ordering::Relaxed);
		command_tx
			.send(FetchCommand::Fetch {
				id: 1,
				term: "stale".to_string(),
				page: 0,
			})
			.expect("send");
		command_tx
			.send(FetchCommand::Fetch {
				id: 2,
				term: "fresh".to_string(),
				page: 0,
			})
			.expect("send");

		let update = update_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("update");
		assert_eq!(update.id, 2);
		assert_eq!(update.term, "fresh");
	}

	#[test]
	fn shutdown_stops_the_worker() {
		let backend = ScriptedBackend::new(Vec::new());
		let (command_tx, update_rx, _latest_id) = spawn(backend);

		command_tx.send(FetchCommand::Shutdown).expect("send");

		// The worker drops its update sender on exit.
		assert!(update_rx.recv().is_err());
	}
}
