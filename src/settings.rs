use std::env;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, USER_AGENT};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Whole-request timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_REDIRECTS: usize = 5;

pub const SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";

const SPARQL_URL_VAR: &str = "WIKICITIES_SPARQL_URL";
const WIKIPEDIA_URL_VAR: &str = "WIKICITIES_WIKIPEDIA_URL";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid user-agent header: {0}")]
    UserAgent(#[from] InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Identifying header value sent on every article request.
pub fn project_user_agent(project: &str, email: &str) -> String {
    format!("{project} ({email})")
}

/// Build the shared client. Every request it sends carries `user_agent`.
pub fn build_client(user_agent: &str) -> Result<Client, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    let client = Client::builder()
        .default_headers(headers)
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()?;
    Ok(client)
}

pub fn sparql_endpoint() -> String {
    env_override(SPARQL_URL_VAR).unwrap_or_else(|| SPARQL_ENDPOINT.to_string())
}

/// Base URL of the Wikipedia edition for `lang`, e.g. `https://en.wikipedia.org`.
pub fn wikipedia_base(lang: &str) -> String {
    env_override(WIKIPEDIA_URL_VAR).unwrap_or_else(|| wikipedia_origin(lang))
}

fn wikipedia_origin(lang: &str) -> String {
    format!("https://{lang}.wikipedia.org")
}

fn env_override(var: &str) -> Option<String> {
    normalize_override(env::var(var).ok())
}

/// Trimmed value without trailing slashes; blank counts as unset.
fn normalize_override(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}
