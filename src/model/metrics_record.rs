use crate::common::*;

/* collectd plugin name used in every identifier */
pub const PLUGIN_NAME: &str = "solr_status";

#[doc = "One poll's worth of gauges. Built fresh every iteration and dropped after emission."]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, new)]
pub struct MetricsRecord {
    num_docs: u64,
    deleted_docs: u64,
    segment_count: u64,
    size_in_bytes: u64,
    merge_thread_count: u64,
}

impl MetricsRecord {
    #[doc = "Gauge type instances paired with their values, in emission order."]
    pub fn gauges(&self) -> [(&'static str, u64); 5] {
        [
            ("numdocs", self.num_docs),
            ("deleteddocs", self.deleted_docs),
            ("segmentcount", self.segment_count),
            ("sizeinbytes", self.size_in_bytes),
            ("mergethreadcount", self.merge_thread_count),
        ]
    }

    #[doc = "Json form of the record, used in debug logs."]
    pub fn to_log_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => format!("{{\"serialize_error\":\"{}\"}}", e),
        }
    }

    #[doc = "Function that renders the record as five PUTVAL lines sharing one timestamp."]
    /// # Arguments
    /// * `hostname` - collectd host the values are reported for
    /// * `unixtime` - seconds since epoch at emission time
    ///
    /// # Returns
    /// * Vec<String> - lines without trailing newline
    pub fn to_putval_lines(&self, hostname: &str, unixtime: i64) -> Vec<String> {
        self.gauges()
            .iter()
            .map(|(type_instance, value)| {
                format!(
                    "PUTVAL {}/{}/gauge-{} {}:{}",
                    hostname, PLUGIN_NAME, type_instance, unixtime, value
                )
            })
            .collect()
    }
}
