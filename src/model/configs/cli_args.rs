use clap::Parser;

/// collectd exec plugin that reports Apache Solr core and merge-thread gauges
#[derive(Parser, Debug, Clone)]
#[command(name = "solr_status_exporter")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// The solr server we need to poll (host[:port])
    #[arg(long = "server")]
    pub server: Option<String>,

    /// The core name we want to get data from
    #[arg(long = "core")]
    pub core: Option<String>,

    /// Use HTTPS while connecting to the solr server
    #[arg(long = "https")]
    pub https: bool,
}
