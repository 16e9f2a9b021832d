use thiserror::Error;

#[doc = "Fatal problems found before the first poll. The process exits with status 1."]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupConfigError {
    #[error("no solr server specified. Exiting.")]
    MissingServer,

    #[error("no core name specified. Exiting.")]
    MissingCore,
}
