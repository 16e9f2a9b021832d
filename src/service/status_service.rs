use crate::common::*;

use crate::enums::status_error::*;

use crate::model::metrics_record::*;

use crate::traits::{repository::solr_repository_trait::*, service::status_service_trait::*};

use crate::utils_modules::json_utils::*;

/* Thread name prefix Lucene gives its background segment merges. */
pub const MERGE_THREAD_PREFIX: &str = "Lucene Merge Thread";

#[derive(Debug, new)]
pub struct StatusServiceImpl<R: SolrRepository> {
    solr_repo: Arc<R>,
}

impl<R: SolrRepository + Sync + Send> StatusServiceImpl<R> {
    #[doc = "Function that fetches a url and parses its body into a json document."]
    async fn get_parsed_json(&self, url: &str) -> Result<JsonDocument, StatusError> {
        let body: Vec<u8> = self.solr_repo.fetch_body(url).await?;
        JsonDocument::parse(&body)
    }

    fn core_status_url(&self, core: &str) -> String {
        format!(
            "{}/solr/admin/cores?action=STATUS&core={}&wt=json",
            self.solr_repo.base_url(),
            core
        )
    }

    fn thread_dump_url(&self) -> String {
        format!("{}/solr/admin/info/threads", self.solr_repo.base_url())
    }
}

#[doc = "Function that checks whether the core status reply actually describes `core`."]
/// Solr answers 200 even for unknown cores, so the `name` field is the only signal.
pub fn core_exists(data: &JsonDocument, core: &str) -> bool {
    let quoted: String = Value::String(core.to_string()).to_string();
    data.root().path(&["status", core, "name"]).raw_text() == quoted
}

#[doc = "Function that reads one integer under `status.{core}.index`. Missing fields read as 0."]
pub fn index_field(data: &JsonDocument, core: &str, key: &str) -> u64 {
    data.root().path(&["status", core, "index", key]).as_u64()
}

#[doc = "Function that counts `Lucene Merge Thread` entries in a thread dump."]
/// # Arguments
/// * `data` - parsed `/solr/admin/info/threads` reply
///
/// # Returns
/// * u64 - number of entries whose name starts with the prefix
pub fn count_merge_threads(data: &JsonDocument) -> u64 {
    data.root()
        .dot_path("system.threadDump")
        .children()
        .iter()
        .filter(|thread| {
            let name: JsonNode<'_> = thread.child("name");
            name.is_present() && name.trimmed_text().starts_with(MERGE_THREAD_PREFIX)
        })
        .count() as u64
}

#[async_trait]
impl<R: SolrRepository + Sync + Send> StatusService for StatusServiceImpl<R> {
    #[doc = "Function that gathers the core gauges and the merge thread count for one poll."]
    /// # Arguments
    /// * `core` - name of the core to report on
    ///
    /// # Returns
    /// * Result<MetricsRecord, StatusError> - any fetch/parse failure or a missing core aborts the poll
    async fn fetch_status(&self, core: &str) -> Result<MetricsRecord, StatusError> {
        /* 1. core specific stats */
        let core_data: JsonDocument = self.get_parsed_json(&self.core_status_url(core)).await?;

        if !core_exists(&core_data, core) {
            return Err(StatusError::CoreNotFound {
                core: core.to_string(),
            });
        }

        let num_docs: u64 = index_field(&core_data, core, "numDocs");
        let deleted_docs: u64 = index_field(&core_data, core, "deletedDocs");
        let segment_count: u64 = index_field(&core_data, core, "segmentCount");
        let size_in_bytes: u64 = index_field(&core_data, core, "sizeInBytes");

        /* 2. server-wide stats */
        let thread_data: JsonDocument = self.get_parsed_json(&self.thread_dump_url()).await?;
        let merge_thread_count: u64 = count_merge_threads(&thread_data);

        Ok(MetricsRecord::new(
            num_docs,
            deleted_docs,
            segment_count,
            size_in_bytes,
            merge_thread_count,
        ))
    }
}
