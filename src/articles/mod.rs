//! Bulk article download: one throttled request and one file per city name.

pub mod client;
pub mod mode;
mod throttle;
pub mod types;

pub use client::{ArticleSource, WikipediaClient};
pub use mode::OutputMode;
pub use throttle::Throttle;
pub use types::{Article, ArticleStatus};

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use tracing::{debug, error, info};

use crate::name_list::NameListError;
use crate::settings::ClientError;
use crate::storage;

pub const DEFAULT_MAX_IN_FLIGHT: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("output format not valid: {0:?} (expected \"html\" or \"text\")")]
    InvalidMode(String),

    #[error("requests per second must be a positive integer")]
    InvalidRateLimit,

    #[error(transparent)]
    NameList(#[from] NameListError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// A validated batch: every field is checked before any request or file is made.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub names: Vec<String>,
    pub mode: OutputMode,
    pub rate: NonZeroU32,
    pub data_dir: PathBuf,
    pub max_in_flight: usize,
}

impl FetchJob {
    pub fn new(
        mut names: Vec<String>,
        mode: OutputMode,
        requests_per_second: u32,
        data_dir: impl Into<PathBuf>,
        limit: Option<usize>,
    ) -> Result<Self, ArticleError> {
        let rate = NonZeroU32::new(requests_per_second).ok_or(ArticleError::InvalidRateLimit)?;
        // zero means "no limit", as an unset --n does
        if let Some(n) = limit.filter(|&n| n > 0) {
            names.truncate(n);
        }
        Ok(Self {
            names,
            mode,
            rate,
            data_dir: data_dir.into(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        })
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }
}

#[derive(Debug)]
pub struct FetchReport {
    /// In completion order, not input order.
    pub articles: Vec<Article>,
    pub elapsed: Duration,
}

impl FetchReport {
    pub fn failed(&self) -> usize {
        self.articles.iter().filter(|a| a.is_failed()).count()
    }

    pub fn server_errors(&self) -> usize {
        self.articles
            .iter()
            .filter(|a| matches!(a.status, ArticleStatus::ServerError(_)))
            .count()
    }
}

/// Fetch and persist every name in `job`, admitting at most `job.rate` starts per second.
pub async fn run(source: &impl ArticleSource, job: &FetchJob) -> FetchReport {
    let throttle = Throttle::per_second(job.rate);
    let start = Instant::now();
    info!(
        count = job.names.len(),
        mode = %job.mode,
        rate = job.rate.get(),
        "starting article fetch"
    );

    let articles: Vec<Article> = stream::iter(&job.names)
        .map(|name| {
            let throttle = &throttle;
            async move {
                throttle.admit().await;
                scrape(source, name, job.mode, &job.data_dir).await
            }
        })
        .buffer_unordered(job.max_in_flight)
        .collect()
        .await;

    FetchReport {
        articles,
        elapsed: start.elapsed(),
    }
}

async fn scrape(
    source: &impl ArticleSource,
    name: &str,
    mode: OutputMode,
    data_dir: &Path,
) -> Article {
    let paths = storage::article_paths(data_dir, name, mode.file_suffix())
        .and_then(|paths| storage::ensure_dir(&paths.dir).map(|()| paths))
        .inspect_err(|e| error!(name, error = %e, "failed to prepare article directory"))
        .ok();

    let article = source.fetch(name, mode).await;

    if let Some(paths) = paths {
        match storage::write_text(&paths.file, &article.content) {
            Ok(()) => debug!(path = %paths.file.display(), "article saved"),
            Err(e) => error!(name, error = %e, "failed to save article"),
        }
    }
    article
}
