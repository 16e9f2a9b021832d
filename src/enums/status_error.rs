use thiserror::Error;

#[doc = "Failures that can happen during a single poll. None of them are fatal to the process."]
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("cannot fetch url '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server did not reply as expected for '{url}': got status code {code}, expected 200")]
    UnexpectedStatus { url: String, code: u16 },

    #[error("cannot read response from '{url}': {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot parse json reply: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no data could be found for the index '{core}'")]
    CoreNotFound { core: String },
}

impl StatusError {
    /// Short tag used in the diagnostic line.
    pub fn kind(&self) -> &'static str {
        match self {
            StatusError::Transport { .. } => "TransportError",
            StatusError::UnexpectedStatus { .. } => "UnexpectedStatusError",
            StatusError::Read { .. } => "ReadError",
            StatusError::Parse(_) => "ParseError",
            StatusError::CoreNotFound { .. } => "CoreNotFoundError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_not_found_names_the_core() {
        let err: StatusError = StatusError::CoreNotFound {
            core: "core1".to_string(),
        };

        assert_eq!(err.kind(), "CoreNotFoundError");
        assert_eq!(
            err.to_string(),
            "no data could be found for the index 'core1'"
        );
    }

    #[test]
    fn unexpected_status_carries_code() {
        let err: StatusError = StatusError::UnexpectedStatus {
            url: "http://localhost:8983/solr/admin/info/threads".to_string(),
            code: 503,
        };

        assert_eq!(err.kind(), "UnexpectedStatusError");
        assert!(err.to_string().contains("got status code 503"));
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let serde_err: serde_json::Error =
            serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err: StatusError = serde_err.into();

        assert_eq!(err.kind(), "ParseError");
        assert!(err.to_string().starts_with("cannot parse json reply:"));
    }
}
