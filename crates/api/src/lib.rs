//! Client-side surface of the Algolia Hacker News search API.
//!
//! The crate is split along the seams the UI cares about: wire types for the
//! `/search` response, the per-term result cache that accumulates fetched
//! pages, the blocking HTTP client, and the background worker thread that
//! keeps network calls off the UI loop.

pub mod cache;
pub mod client;
pub mod story;
pub mod worker;

pub use cache::{CachedResults, ResultCache};
pub use client::{
	ApiError, DEFAULT_ENDPOINT, DEFAULT_HITS_PER_PAGE, DEFAULT_PAGE, DEFAULT_QUERY, SearchBackend,
	SearchClient,
};
pub use story::{SearchPage, Story};
pub use worker::{FetchCommand, FetchUpdate};

pub use reqwest::Url;
