//! City name resolution through the Wikidata SPARQL endpoint.

mod query;
mod types;

pub use query::{build_query, extract_names};
pub use types::SparqlResponse;

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::name_list;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("SPARQL endpoint returned status {0}")]
    Status(u16),

    #[error("SPARQL request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid SPARQL endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Clone)]
pub struct SparqlClient {
    http: Client,
    endpoint: String,
}

impl SparqlClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Run the city query for `lang` and decode the result bindings.
    pub async fn query(&self, lang: &str) -> Result<SparqlResponse, ResolveError> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("query", &build_query(lang))
            .append_pair("format", "json");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16()));
        }

        let body: SparqlResponse = response.json().await?;
        debug!(lang, bindings = body.results.bindings.len(), "sparql query complete");
        Ok(body)
    }

    /// City names for `lang`. Any failure is logged and yields an empty list.
    pub async fn resolve(&self, lang: &str) -> Vec<String> {
        match self.query(lang).await {
            Ok(response) => {
                info!(lang, "success");
                extract_names(&response)
            }
            Err(e) => {
                error!(lang, error = %e, "city name query failed");
                Vec::new()
            }
        }
    }
}

pub fn names_file(data_dir: &Path, lang: &str) -> PathBuf {
    data_dir.join(format!("{lang}_citynames.txt"))
}

/// Query, extract and persist the city names for one language.
/// Returns the written path, or `None` when nothing was written.
pub async fn process_language(
    client: &SparqlClient,
    lang: &str,
    data_dir: &Path,
) -> Option<PathBuf> {
    info!(lang, "querying Wikidata");
    let names = client.resolve(lang).await;
    if names.is_empty() {
        warn!(lang, "no city names found");
        return None;
    }

    if let Err(e) = fs::create_dir_all(data_dir) {
        error!(dir = %data_dir.display(), error = %e, "failed to create data directory");
        return None;
    }

    let path = names_file(data_dir, lang);
    match name_list::write_names(&path, &names) {
        Ok(()) => {
            info!(path = %path.display(), count = names.len(), "city names saved");
            Some(path)
        }
        Err(e) => {
            error!(error = %e, "failed to save city names");
            None
        }
    }
}
