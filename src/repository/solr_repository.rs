use crate::common::*;

use crate::enums::status_error::*;

use crate::model::configs::exporter_config::*;

use crate::traits::repository::solr_repository_trait::*;

/* Per-request limit for both administrative endpoints. */
pub const HTTP_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct SolrRepositoryImpl {
    scheme: String,
    server: String,
    client: Client,
}

impl SolrRepositoryImpl {
    #[doc = "Solr http connection 생성자"]
    /// # Arguments
    /// * `config` - resolved exporter configuration (server address and scheme)
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(config: &ExporterConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| anyhow!("[SolrRepositoryImpl::new] {:?}", e))?;

        Ok(Self {
            scheme: config.scheme().to_string(),
            server: config.server().to_string(),
            client,
        })
    }
}

#[async_trait]
impl SolrRepository for SolrRepositoryImpl {
    #[doc = "Function that issues a GET request and returns the whole response body."]
    /// # Arguments
    /// * `url` - full url of the administrative endpoint
    ///
    /// # Returns
    /// * Result<Vec<u8>, StatusError> - body bytes when the server answered 200
    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>, StatusError> {
        let response: reqwest::Response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| StatusError::Transport {
                    url: url.to_string(),
                    source: e,
                })?;

        /* The response is dropped (and its connection released) on every early return. */
        if response.status() != StatusCode::OK {
            return Err(StatusError::UnexpectedStatus {
                url: url.to_string(),
                code: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| StatusError::Read {
            url: url.to_string(),
            source: e,
        })?;

        Ok(body.to_vec())
    }

    fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.server)
    }
}
