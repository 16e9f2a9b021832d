use crate::common::*;

use crate::enums::status_error::*;

use crate::model::metrics_record::*;

#[async_trait]
pub trait StatusService {
    async fn fetch_status(&self, core: &str) -> Result<MetricsRecord, StatusError>;
}
