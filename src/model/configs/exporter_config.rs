use crate::common::*;

#[doc = "Immutable settings resolved once at startup."]
#[derive(Debug, Clone, Getters, new)]
pub struct ExporterConfig {
    #[getset(get = "pub")]
    server: String,
    #[getset(get = "pub")]
    core: String,
    use_https: bool,
    #[getset(get = "pub")]
    interval_secs: u64,
    #[getset(get = "pub")]
    hostname: String,
}

impl ExporterConfig {
    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_and_interval() {
        let plain: ExporterConfig = ExporterConfig::new(
            "localhost:8983".to_string(),
            "core1".to_string(),
            false,
            20,
            "web01".to_string(),
        );
        assert_eq!(plain.scheme(), "http");
        assert_eq!(plain.interval(), Duration::from_secs(20));
        assert_eq!(plain.hostname(), "web01");

        let tls: ExporterConfig = ExporterConfig::new(
            "localhost:8983".to_string(),
            "core1".to_string(),
            true,
            5,
            "web01".to_string(),
        );
        assert_eq!(tls.scheme(), "https");
    }
}
