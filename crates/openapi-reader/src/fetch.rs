//! Retrieval of spec documents

use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a spec document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecLocation {
    /// Fetched with an HTTP GET
    Remote(Url),
    /// Read from the local filesystem
    Local(PathBuf),
}

impl SpecLocation {
    /// Interpret a command-line argument: `http(s)://` URLs are remote,
    /// `file://` URLs and plain paths are local.
    pub fn parse(location: &str) -> FetchResult<Self> {
        match Url::parse(location) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(SpecLocation::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(SpecLocation::Local)
                    .map_err(|_| FetchError::InvalidUrl(location.to_string())),
                // Windows drive letters parse as a one-letter scheme
                scheme if scheme.len() == 1 => Ok(SpecLocation::Local(PathBuf::from(location))),
                _ => Err(FetchError::InvalidUrl(location.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(SpecLocation::Local(PathBuf::from(location)))
            }
            Err(_) => Err(FetchError::InvalidUrl(location.to_string())),
        }
    }
}

impl fmt::Display for SpecLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecLocation::Remote(url) => write!(f, "{}", url),
            SpecLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Source of raw spec text
#[async_trait]
pub trait SpecFetcher: Send + Sync {
    /// Return the document stored at `location`
    async fn fetch(&self, location: &SpecLocation) -> FetchResult<String>;
}

/// Fetches remote documents over HTTP and reads local ones from disk
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    retries: u32,
}

impl HttpFetcher {
    /// Create a fetcher with a request timeout and a retry budget
    pub fn new(timeout: Duration, retries: u32) -> FetchResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, retries))
    }

    /// Use an already configured client
    pub fn with_client(client: reqwest::Client, retries: u32) -> Self {
        Self { client, retries }
    }

    async fn get(&self, url: &Url) -> FetchResult<String> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json, application/yaml, text/yaml")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Transport failures and server errors are worth another attempt
    fn is_retryable(error: &FetchError) -> bool {
        match error {
            FetchError::Http(_) => true,
            FetchError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}

#[async_trait]
impl SpecFetcher for HttpFetcher {
    async fn fetch(&self, location: &SpecLocation) -> FetchResult<String> {
        info!("Fetching OpenAPI spec from: {}", location);

        let url = match location {
            SpecLocation::Local(path) => return Ok(tokio::fs::read_to_string(path).await?),
            SpecLocation::Remote(url) => url,
        };

        let mut attempt = 0;
        loop {
            match self.get(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries && Self::is_retryable(&e) => {
                    attempt += 1;
                    warn!("Fetching {} failed ({}), retrying", url, e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::io::Write;

    fn fetcher(retries: u32) -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5), retries).unwrap()
    }

    #[test]
    fn test_parse_locations() {
        assert!(matches!(
            SpecLocation::parse("https://petstore.swagger.io/v2/swagger.json").unwrap(),
            SpecLocation::Remote(_)
        ));
        assert_eq!(
            SpecLocation::parse("specs/petstore.json").unwrap(),
            SpecLocation::Local(PathBuf::from("specs/petstore.json"))
        );
        assert!(matches!(
            SpecLocation::parse("ftp://example.com/spec.json"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url() {
        assert_eq!(
            SpecLocation::parse("file:///tmp/spec.json").unwrap(),
            SpecLocation::Local(PathBuf::from("/tmp/spec.json"))
        );
    }

    #[tokio::test]
    async fn test_fetch_remote_spec() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/openapi.json");
                then.status(200).body(r#"{"paths": {}}"#);
            })
            .await;

        let location = SpecLocation::parse(&server.url("/openapi.json")).unwrap();
        let body = fetcher(0).fetch(&location).await.unwrap();

        assert_eq!(body, r#"{"paths": {}}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_retried_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/openapi.json");
                then.status(503);
            })
            .await;

        let location = SpecLocation::parse(&server.url("/openapi.json")).unwrap();
        let err = fetcher(1).fetch(&location).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 503));
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_timeout_is_retried_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/slow.json");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .body(r#"{"paths": {}}"#);
            })
            .await;

        let fetcher = HttpFetcher::new(Duration::from_millis(50), 1).unwrap();
        let location = SpecLocation::parse(&server.url("/slow.json")).unwrap();
        let err = fetcher.fetch(&location).await.unwrap_err();

        match err {
            FetchError::Http(e) => assert!(e.is_timeout(), "unexpected error: {:?}", e),
            other => panic!("unexpected error: {:?}", other),
        }
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/missing.json");
                then.status(404);
            })
            .await;

        let location = SpecLocation::parse(&server.url("/missing.json")).unwrap();
        let err = fetcher(1).fetch(&location).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 404));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"info": {{"title": "Local"}}, "paths": {{}}}}"#).unwrap();

        let location = SpecLocation::Local(file.path().to_path_buf());
        let body = fetcher(0).fetch(&location).await.unwrap();

        assert!(body.contains("Local"));
    }

    #[tokio::test]
    async fn test_fetch_missing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let location = SpecLocation::Local(dir.path().join("absent.json"));

        let err = fetcher(0).fetch(&location).await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
