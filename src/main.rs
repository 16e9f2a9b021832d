/*
Author      : Solr status exporter maintainers
Create date : 2026-10-16
Description : Apache Solr 코어의 문서/세그먼트/용량 지표와 Lucene merge thread 개수를
              주기적으로 수집하여 collectd PUTVAL 형식으로 stdout 에 출력하는 exec 플러그인

              Usage : solr_status_exporter --server <host[:port]> --core <name> [--https]
                      COLLECTD_HOSTNAME (default: localhost), COLLECTD_INTERVAL (default: 20)

History     : 2026-10-16 Solr status exporter maintainers   # [v.0.1.0] first create
*/
mod common;
use common::*;

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{schedule_service::*, status_service::*};

mod model;
use model::configs::{cli_args::*, exporter_config::*};

mod repository;
use repository::solr_repository::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod enums;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* .env is optional; real environment variables win */
    dotenv().ok();

    let args: CliArgs = CliArgs::parse();

    /* 전역 로거설정 */
    let _logger: Option<LoggerHandle> = match set_global_logger() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("[main()] {:?}", e);
            None
        }
    };

    let config: ExporterConfig = match load_exporter_config(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Start Solr status exporter: server={} core={} scheme={} interval={}s hostname={}",
        config.server(),
        config.core(),
        config.scheme(),
        config.interval_secs(),
        config.hostname()
    );

    let solr_repo: SolrRepositoryImpl = SolrRepositoryImpl::new(&config).unwrap_or_else(|e| {
        error!("[main()] Unable to build the http client: {:?}", e);
        std::process::exit(1)
    });

    let config: Arc<ExporterConfig> = Arc::new(config);

    /* Dependency Injection(DI) */
    let status_service: Arc<StatusServiceImpl<SolrRepositoryImpl>> =
        Arc::new(StatusServiceImpl::new(Arc::new(solr_repo)));
    let schedule: Arc<FixedIntervalSchedule> =
        Arc::new(FixedIntervalSchedule::new(config.interval()));

    let controller: MainController<StatusServiceImpl<SolrRepositoryImpl>, FixedIntervalSchedule> =
        MainController::new(status_service, schedule, Arc::clone(&config));

    if let Err(e) = controller.main_task().await {
        error!("[main] controller error: {:?}", e);
    }
}
