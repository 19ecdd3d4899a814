use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::articles::DEFAULT_MAX_IN_FLIGHT;

/// Collect Wikipedia city articles and the Wikidata city names behind them.
#[derive(Debug, Parser)]
#[command(name = "wikicities", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query Wikidata for city article names in one or more Wikipedia languages
    Names(NamesArgs),
    /// Download the article of every city in a name list
    Articles(ArticlesArgs),
}

#[derive(Debug, Args)]
pub struct NamesArgs {
    /// Wikipedia language code(s), e.g. "en" or "fr"
    #[arg(required = true)]
    pub languages: Vec<String>,

    /// Directory receiving `<lang>_citynames.txt`
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct ArticlesArgs {
    /// Text file with one city name per line
    pub city_list: PathBuf,

    /// Output format: "html" or "text"
    pub output_format: String,

    /// Project identifier sent in the user-agent header
    pub project_name: String,

    /// Contact email sent in the user-agent header
    pub email: String,

    /// Maximum number of requests started per second
    pub max_requests_per_second: u32,

    /// Only fetch the first N cities (for a quick trial run); 0 means all
    #[arg(long = "n")]
    pub n: Option<usize>,

    /// Wikipedia language edition to fetch from
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Root directory; articles land in `<data-dir>/districts/<name>/`
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Upper bound on requests awaiting a response at once
    #[arg(long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    pub max_in_flight: usize,
}
