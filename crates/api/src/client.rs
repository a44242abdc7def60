//! Blocking HTTP client for the Algolia Hacker News search endpoint.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

use crate::story::SearchPage;

/// Base URL of the public Algolia Hacker News API.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1";
/// Query submitted on startup when none is configured.
pub const DEFAULT_QUERY: &str = "redux";
/// First page fetched for a fresh search key.
pub const DEFAULT_PAGE: u32 = 0;
/// Number of hits requested per page.
pub const DEFAULT_HITS_PER_PAGE: u32 = 100;

const SEARCH_PATH: &str = "search";
const PARAM_QUERY: &str = "query";
const PARAM_PAGE: &str = "page";
const PARAM_HITS_PER_PAGE: &str = "hitsPerPage";

/// The endpoint answers well under a second; anything slower is treated as a
/// failure rather than leaving the UI loading forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors produced while talking to the search endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request could not be sent or timed out.
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The endpoint answered with a non-success status.
	#[error("search endpoint returned HTTP {code}")]
	Status { code: u16 },

	/// The response body was not the expected JSON shape.
	#[error("malformed response body: {0}")]
	Decode(#[source] reqwest::Error),
}

/// Transport seam between the fetch worker and the HTTP layer.
///
/// The worker only needs "one page of results for a term"; tests substitute
/// scripted implementations for the real client.
pub trait SearchBackend {
	/// Fetch one page of results for `term`.
	fn search(&self, term: &str, page: u32) -> Result<SearchPage, ApiError>;
}

/// Blocking client for `GET <endpoint>/search`.
#[derive(Debug, Clone)]
pub struct SearchClient {
	http: Client,
	endpoint: Url,
	hits_per_page: u32,
}

impl SearchClient {
	/// Build a client against `endpoint` requesting `hits_per_page` per page.
	pub fn new(endpoint: Url, hits_per_page: u32) -> Result<Self, ApiError> {
		let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
		Ok(Self {
			http,
			endpoint,
			hits_per_page,
		})
	}

	fn search_url(&self) -> String {
		format!(
			"{}/{SEARCH_PATH}",
			self.endpoint.as_str().trim_end_matches('/')
		)
	}
}

impl SearchBackend for SearchClient {
	fn search(&self, term: &str, page: u32) -> Result<SearchPage, ApiError> {
		let url = self.search_url();
		debug!(%url, term, page, "issuing search request");

		let page_param = page.to_string();
		let hits_param = self.hits_per_page.to_string();
		let response = self
			.http
			.get(&url)
			.query(&[
				(PARAM_QUERY, term),
				(PARAM_PAGE, page_param.as_str()),
				(PARAM_HITS_PER_PAGE, hits_param.as_str()),
			])
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				code: status.as_u16(),
			});
		}

		response.json().map_err(ApiError::Decode)
	}
}
