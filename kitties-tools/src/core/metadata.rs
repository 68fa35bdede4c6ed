// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Metadata and image retrieval through the Filecoin caching proxy.
//!
//! The proxy serves `GET /metadata/{pieceCid}` and `GET /image/{pieceCid}`
//! backed by Synapse storage downloads, and rate-limits aggressively. Retries
//! here are purely reactive: exponential backoff on 429, linear backoff on
//! everything else, bounded by [`FetchConfig::max_retries`].

use std::{
    collections::{HashMap, VecDeque},
    future::Future,
    sync::Mutex,
    time::Duration,
};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("metadata decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("fetch failed after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: String },
}

/// One `{"trait_type": ..., "value": ...}` entry in a metadata document.
///
/// Values are left as raw JSON since collections mix strings and numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "trait_type")]
    pub trait_type: String,
    pub value: serde_json::Value,
}

/// A token metadata document as stored on Filecoin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Image reference, typically another `filecoin://` URI.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A downloaded image with its sniffed content type.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl ImageData {
    pub fn extension(&self) -> &'static str {
        match self.content_type {
            "image/png" => "png",
            _ => "jpg",
        }
    }
}

/// The proxy stores raw bytes, so the type must be inferred from the content.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    if bytes.len() >= 2 && bytes[0] == 0x89 && bytes[1] == 0x50 {
        "image/png"
    } else {
        "image/jpeg"
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Extra attempts after the first failure.
    pub max_retries: u32,
    /// Base delay unit for both backoff schedules.
    pub backoff_base: Duration,
    /// Bound on the in-memory metadata cache.
    pub cache_capacity: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_base: Duration::from_secs(1),
            cache_capacity: 256,
        }
    }
}

/// Delay before retry number `attempt + 1`.
///
/// Rate limiting backs off exponentially (`base * 2^attempt`); other failures
/// retry on a linear schedule (`base * (attempt + 1)`).
pub fn backoff_delay(rate_limited: bool, attempt: u32, base: Duration) -> Duration {
    if rate_limited {
        base * 2u32.saturating_pow(attempt)
    } else {
        base * (attempt + 1)
    }
}

/// Seam for metadata resolution, so aggregation tests can use fixed documents.
pub trait MetadataSource: Send + Sync {
    fn fetch_metadata(
        &self,
        cid: &str,
    ) -> impl Future<Output = Result<TokenMetadata, FetchError>> + Send;
}

/// Bounded FIFO cache of resolved metadata documents.
///
/// Owned by the client instance rather than living in module-level state, so
/// two clients never share entries.
struct MetadataCache {
    entries: HashMap<String, TokenMetadata>,
    order: VecDeque<String>,
    capacity: usize,
}

impl MetadataCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    fn get(&self, cid: &str) -> Option<TokenMetadata> {
        self.entries.get(cid).cloned()
    }

    fn insert(&mut self, cid: String, metadata: TokenMetadata) {
        if self.capacity == 0 || self.entries.contains_key(&cid) {
            return;
        }
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.order.push_back(cid.clone());
        self.entries.insert(cid, metadata);
    }
}

/// Client for the metadata/image proxy.
pub struct MetadataClient {
    http: reqwest::Client,
    base_url: String,
    config: FetchConfig,
    cache: Mutex<MetadataCache>,
}

impl MetadataClient {
    pub fn new(base_url: impl Into<String>, config: FetchConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let cache = Mutex::new(MetadataCache::new(config.cache_capacity));
        Ok(Self {
            http,
            base_url,
            config,
            cache,
        })
    }

    /// Downloads a token image, sniffing its content type.
    pub async fn fetch_image(&self, cid: &str) -> Result<ImageData, FetchError> {
        let url = format!("{}/image/{cid}", self.base_url);
        let bytes = self.get_with_retry(&url).await?;
        let content_type = sniff_content_type(&bytes);
        Ok(ImageData {
            bytes,
            content_type,
        })
    }

    /// Probes the proxy's health endpoint.
    pub async fn health(&self) -> Result<(), FetchError> {
        let url = format!("{}/health", self.base_url);
        self.http
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map(drop)
            .map_err(Into::into)
    }

    pub fn image_url(&self, cid: &str) -> String {
        format!("{}/image/{cid}", self.base_url)
    }

    /// GET with the bounded retry schedule, returning the response body.
    async fn get_with_retry(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut attempt = 0;
        loop {
            let (rate_limited, last) = match self.http.get(url).send().await {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    (true, format!("HTTP {}", response.status()))
                }
                Ok(response) if response.status().is_success() => {
                    return Ok(response.bytes().await?.to_vec());
                }
                Ok(response) => (false, format!("HTTP {}", response.status())),
                Err(err) => (false, err.to_string()),
            };
            if attempt >= self.config.max_retries {
                return Err(FetchError::RetriesExhausted {
                    attempts: attempt + 1,
                    last,
                });
            }
            let delay = backoff_delay(rate_limited, attempt, self.config.backoff_base);
            debug!(@grey, "retrying {url} in {delay:?} ({last})");
            sleep(delay).await;
            attempt += 1;
        }
    }
}

impl MetadataSource for MetadataClient {
    async fn fetch_metadata(&self, cid: &str) -> Result<TokenMetadata, FetchError> {
        if let Some(cached) = self.cache.lock().expect("metadata cache lock").get(cid) {
            return Ok(cached);
        }
        let url = format!("{}/metadata/{cid}", self.base_url);
        let body = self.get_with_retry(&url).await?;
        let metadata: TokenMetadata = serde_json::from_slice(&body)?;
        self.cache
            .lock()
            .expect("metadata cache lock")
            .insert(cid.to_string(), metadata.clone());
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn backoff_schedules() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(true, 0, base), Duration::from_secs(1));
        assert_eq!(backoff_delay(true, 1, base), Duration::from_secs(2));
        assert_eq!(backoff_delay(true, 2, base), Duration::from_secs(4));
        assert_eq!(backoff_delay(false, 0, base), Duration::from_secs(1));
        assert_eq!(backoff_delay(false, 1, base), Duration::from_secs(2));
        assert_eq!(backoff_delay(false, 2, base), Duration::from_secs(3));
    }

    #[test]
    fn sniffs_png_and_defaults_to_jpeg() {
        assert_eq!(sniff_content_type(&[0x89, 0x50, 0x4e, 0x47]), "image/png");
        assert_eq!(sniff_content_type(&[0xff, 0xd8, 0xff]), "image/jpeg");
        assert_eq!(sniff_content_type(&[]), "image/jpeg");
    }

    #[test]
    fn cache_evicts_oldest_entry() {
        let mut cache = MetadataCache::new(2);
        cache.insert("a".into(), TokenMetadata::default());
        cache.insert("b".into(), TokenMetadata::default());
        cache.insert("c".into(), TokenMetadata::default());
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    /// Serves one canned HTTP response per connection, then stops.
    async fn serve(responses: Vec<String>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
        });
        format!("http://{addr}")
    }

    fn status_response(status: &str) -> String {
        format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
    }

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn test_config() -> FetchConfig {
        FetchConfig {
            max_retries: 2,
            backoff_base: Duration::from_millis(5),
            cache_capacity: 16,
        }
    }

    #[tokio::test]
    async fn succeeds_after_two_rate_limits() {
        let body = r#"{"name":"Galactic Kitty #1","description":"cat","image":"filecoin://img1","attributes":[{"trait_type":"Fur","value":"Nebula"}]}"#;
        let base_url = serve(vec![
            status_response("429 Too Many Requests"),
            status_response("429 Too Many Requests"),
            json_response(body),
        ])
        .await;

        let client = MetadataClient::new(base_url, test_config()).unwrap();
        let metadata = client.fetch_metadata("cid1").await.unwrap();
        assert_eq!(metadata.name.as_deref(), Some("Galactic Kitty #1"));
        assert_eq!(metadata.attributes[0].trait_type, "Fur");
    }

    #[tokio::test]
    async fn exhausts_retries_on_server_errors() {
        let base_url = serve(vec![
            status_response("500 Internal Server Error"),
            status_response("500 Internal Server Error"),
            status_response("500 Internal Server Error"),
        ])
        .await;

        let client = MetadataClient::new(base_url, test_config()).unwrap();
        let err = client.fetch_metadata("cid1").await.unwrap_err();
        match err {
            FetchError::RetriesExhausted { attempts, last } => {
                assert_eq!(attempts, 3);
                assert!(last.contains("500"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn caches_resolved_documents() {
        // Only one response is served; the second fetch must hit the cache.
        let base_url = serve(vec![json_response(r#"{"name":"Kitty"}"#)]).await;

        let client = MetadataClient::new(base_url, test_config()).unwrap();
        let first = client.fetch_metadata("cid1").await.unwrap();
        let second = client.fetch_metadata("cid1").await.unwrap();
        assert_eq!(first, second);
    }
}
