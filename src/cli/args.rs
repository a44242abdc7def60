use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments accepted by the `hns` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hns",
	version,
	about = "Terminal client for searching Hacker News"
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HNS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading the default configuration file (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search query submitted on startup (default: redux)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "URL",
		env = "HNS_ENDPOINT",
		help = "Base URL of the Algolia search API (default: https://hn.algolia.com/api/v1)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "hits-per-page",
		value_name = "N",
		help = "Hits requested per result page (default: 100)"
	)]
	pub(crate) hits_per_page: Option<u32>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "How to print the accepted story (default: plain)"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Level for the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before starting (default: disabled)"
	)]
	pub(crate) print_config: bool,
}

/// Output format for the accepted story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
