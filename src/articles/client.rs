use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::mode::OutputMode;
use super::types::{Article, ArticleStatus, ExtractResponse};

/// Source of article bodies.
/// Implemented by `WikipediaClient` for production; mock implementations used in tests.
pub trait ArticleSource {
    /// Never fails: problems are folded into the returned `Article`'s status.
    async fn fetch(&self, name: &str, mode: OutputMode) -> Article;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("malformed extract response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected exactly one page in extract response, got {0}")]
    PageCount(usize),
}

/// Client for one Wikipedia edition. Names are inserted into URLs verbatim,
/// so already percent-encoded titles stay as they are.
#[derive(Clone)]
pub struct WikipediaClient {
    http: Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn html_url(&self, name: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/api/rest_v1/page/html/{name}", self.base_url))
    }

    fn extract_url(&self, name: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{}/w/api.php", self.base_url))?;
        url.set_query(Some(&format!(
            "format=json&action=query&titles={name}\
             &prop=extracts&exlimit=max&explaintext=1&exsectionformat=plain"
        )));
        Ok(url)
    }

    async fn fetch_html(&self, name: &str) -> Article {
        let url = match self.html_url(name) {
            Ok(u) => u,
            Err(e) => return Article::failed(name, format!("invalid URL: {e}")),
        };

        let response = match self.http.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(name, error = %e, "html request failed");
                return Article::failed(name, e.to_string());
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!(name, error = %e, "failed to read html body");
                return Article::failed(name, e.to_string());
            }
        };

        if status.is_success() {
            debug!(name, bytes = body.len(), "html fetched");
            Article::fetched(name, body)
        } else {
            warn!(name, status = %status, "html endpoint returned error, saving body as-is");
            Article {
                name: name.to_string(),
                content: body,
                status: ArticleStatus::ServerError(status.as_u16()),
            }
        }
    }

    async fn fetch_text(&self, name: &str) -> Article {
        let url = match self.extract_url(name) {
            Ok(u) => u,
            Err(e) => return Article::failed(name, format!("invalid URL: {e}")),
        };

        let body = match self.http.get(url).send().await {
            Ok(r) => r.text().await,
            Err(e) => Err(e),
        };

        let outcome = match body {
            Ok(b) => parse_extract(&b).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(text) => {
                debug!(name, bytes = text.len(), "extract fetched");
                Article::fetched(name, text)
            }
            Err(reason) => {
                debug!(name, %reason, "extract unavailable, saving empty text");
                Article::failed(name, reason)
            }
        }
    }
}

impl ArticleSource for WikipediaClient {
    async fn fetch(&self, name: &str, mode: OutputMode) -> Article {
        match mode {
            OutputMode::Html => self.fetch_html(name).await,
            OutputMode::Text => self.fetch_text(name).await,
        }
    }
}

/// Plain text of the single page in an extract response.
pub fn parse_extract(body: &str) -> Result<String, ExtractError> {
    let response: ExtractResponse = serde_json::from_str(body)?;
    let mut pages = response.query.pages.into_values();
    match (pages.next(), pages.next()) {
        (Some(page), None) => Ok(page.extract),
        (None, _) => Err(ExtractError::PageCount(0)),
        (Some(_), Some(_)) => Err(ExtractError::PageCount(2 + pages.count())),
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WikipediaClient {
        let http = crate::settings::build_client("TestProject (test@example.org)").unwrap();
        WikipediaClient::new(http, server.uri())
    }

    #[tokio::test]
    async fn html_mode_returns_body_with_identifying_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/html/Paris"))
            .and(header("user-agent", "TestProject (test@example.org)"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Paris</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let article = client_for(&server).fetch("Paris", OutputMode::Html).await;
        assert_eq!(article.content, "<html>Paris</html>");
        assert_eq!(article.status, ArticleStatus::Fetched);
    }

    #[tokio::test]
    async fn html_mode_keeps_error_page_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest_v1/page/html/Atlantis"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"type\":\"not_found\"}"))
            .mount(&server)
            .await;

        let article = client_for(&server).fetch("Atlantis", OutputMode::Html).await;
        assert_eq!(article.content, "{\"type\":\"not_found\"}");
        assert_eq!(article.status, ArticleStatus::ServerError(404));
    }

    #[tokio::test]
    async fn text_mode_extracts_plain_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("titles", "Paris"))
            .and(query_param("action", "query"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query": {"pages": {"1": {"extract": "Paris is the capital..."}}}
            })))
            .mount(&server)
            .await;

        let article = client_for(&server).fetch("Paris", OutputMode::Text).await;
        assert_eq!(article.content, "Paris is the capital...");
        assert!(!article.is_failed());
    }

    #[tokio::test]
    async fn text_mode_missing_field_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query": {"pages": {"1": {"title": "Lyon"}}}
            })))
            .mount(&server)
            .await;

        let article = client_for(&server).fetch("Lyon", OutputMode::Text).await;
        assert_eq!(article.content, "");
        assert!(article.is_failed());
    }

    #[tokio::test]
    async fn text_mode_server_error_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&server)
            .await;

        let article = client_for(&server).fetch("Nice", OutputMode::Text).await;
        assert_eq!(article.content, "");
        assert!(article.is_failed());
    }

    #[tokio::test]
    async fn unreachable_host_is_failed_in_both_modes() {
        let client = WikipediaClient::new(Client::new(), "http://127.0.0.1:1");
        for mode in [OutputMode::Html, OutputMode::Text] {
            let article = client.fetch("Paris", mode).await;
            assert!(article.is_failed(), "mode {mode} should fail");
            assert!(article.content.is_empty());
        }
    }
}
