//! Layered configuration: defaults, config files, then CLI flags.

use anyhow::{Context, Result, ensure};
use config::{Config, File};
use hns_api::{DEFAULT_ENDPOINT, DEFAULT_HITS_PER_PAGE, DEFAULT_QUERY, Url};
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	search: SearchSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	endpoint: Option<String>,
	hits_per_page: Option<u32>,
	default_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

/// Effective configuration after merging files and CLI flags.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: Url,
	pub hits_per_page: u32,
	pub initial_query: String,
	pub log_level: String,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Endpoint: {}", self.endpoint);
		println!("  Hits per page: {}", self.hits_per_page);
		println!("  Initial query: {}", self.initial_query);
		println!("  Log level: {}", self.log_level);
	}
}

/// Load and resolve configuration for the given CLI arguments.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let raw = load_raw(cli)?;
	resolve(cli, raw)
}

fn load_raw(cli: &CliArgs) -> Result<RawConfig> {
	let mut builder = Config::builder();

	if !cli.no_config {
		let default_path = app_dirs::get_config_dir()?.join(DEFAULT_CONFIG_FILE);
		builder = builder.add_source(File::from(default_path).required(false));
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	let merged = builder.build().context("failed to load configuration")?;
	merged
		.try_deserialize()
		.context("invalid configuration file")
}

fn resolve(cli: &CliArgs, raw: RawConfig) -> Result<ResolvedConfig> {
	let endpoint = cli
		.endpoint
		.clone()
		.or(raw.search.endpoint)
		.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
	let endpoint: Url = endpoint
		.parse()
		.with_context(|| format!("invalid endpoint URL '{endpoint}'"))?;
	ensure!(
		matches!(endpoint.scheme(), "http" | "https"),
		"endpoint must be an http(s) URL"
	);

	let hits_per_page = cli
		.hits_per_page
		.or(raw.search.hits_per_page)
		.unwrap_or(DEFAULT_HITS_PER_PAGE);
	ensure!(hits_per_page > 0, "hits-per-page must be greater than zero");

	let initial_query = cli
		.query
		.clone()
		.or(raw.search.default_query)
		.unwrap_or_else(|| DEFAULT_QUERY.to_string());

	let log_level = cli
		.log_level
		.clone()
		.or(raw.log.level)
		.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

	Ok(ResolvedConfig {
		endpoint,
		hits_per_page,
		initial_query,
		log_level,
	})
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use config::FileFormat;

	use super::*;

	fn raw_from_toml(toml: &str) -> RawConfig {
		Config::builder()
			.add_source(File::from_str(toml, FileFormat::Toml))
			.build()
			.expect("build")
			.try_deserialize()
			.expect("deserialize")
	}

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["hns"];
		argv.extend_from_slice(args);
		CliArgs::parse_from(argv)
	}

	#[test]
	fn defaults_apply_when_nothing_is_configured() {
		let resolved = resolve(&cli(&[]), RawConfig::default()).expect("resolve");
		assert_eq!(resolved.endpoint.as_str(), "https://hn.algolia.com/api/v1");
		assert_eq!(resolved.hits_per_page, 100);
		assert_eq!(resolved.initial_query, "redux");
		assert_eq!(resolved.log_level, "info");
	}

	#[test]
	fn config_file_values_override_defaults() {
		let raw = raw_from_toml(
			r#"
			[search]
			hits_per_page = 25
			default_query = "rust"

			[log]
			level = "debug"
			"#,
		);
		let resolved = resolve(&cli(&[]), raw).expect("resolve");
		assert_eq!(resolved.hits_per_page, 25);
		assert_eq!(resolved.initial_query, "rust");
		assert_eq!(resolved.log_level, "debug");
	}

	#[test]
	fn cli_flags_override_config_files() {
		let raw = raw_from_toml("[search]\ndefault_query = \"rust\"\nhits_per_page = 25\n");
		let resolved =
			resolve(&cli(&["--query", "zig", "--hits-per-page", "5"]), raw).expect("resolve");
		assert_eq!(resolved.initial_query, "zig");
		assert_eq!(resolved.hits_per_page, 5);
	}

	#[test]
	fn rejects_a_non_http_endpoint() {
		let err = resolve(&cli(&["--endpoint", "ftp://example.com"]), RawConfig::default())
			.expect_err("must fail");
		assert!(err.to_string().contains("http(s)"));
	}

	#[test]
	fn rejects_zero_hits_per_page() {
		let err = resolve(&cli(&["--hits-per-page", "0"]), RawConfig::default())
			.expect_err("must fail");
		assert!(err.to_string().contains("greater than zero"));
	}
}
