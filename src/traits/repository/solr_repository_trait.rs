use crate::common::*;

use crate::enums::status_error::*;

#[async_trait]
pub trait SolrRepository {
    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>, StatusError>;
    fn base_url(&self) -> String;
}
