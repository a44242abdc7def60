use anyhow::Result;
use hns_api::SearchClient;
use hns_tui::SearchOutcome;
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	client: SearchClient,
	initial_query: String,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let client = SearchClient::new(config.endpoint.clone(), config.hits_per_page)?;
		Ok(Self {
			client,
			initial_query: config.initial_query.clone(),
		})
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		info!(query = %self.initial_query, "starting interactive search");
		hns_tui::run(self.client, self.initial_query)
	}
}
