use std::future::Future;

use crate::common::*;

use crate::model::configs::exporter_config::*;

use crate::traits::{schedule_trait::*, service::status_service_trait::*};

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct MainController<S: StatusService, P: PollSchedule> {
    status_service: Arc<S>,
    schedule: Arc<P>,
    config: Arc<ExporterConfig>,
}

impl<S, P> MainController<S, P>
where
    S: StatusService + Send + Sync + 'static,
    P: PollSchedule + Send + Sync + 'static,
{
    #[doc = "Function that runs the poll loop on stdout until Ctrl+C."]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let mut stdout: std::io::StdoutLock<'static> = std::io::stdout().lock();

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("[MainController::main_task] Failed to listen for Ctrl+C signal: {:?}", e);
                std::future::pending::<()>().await;
            }
        };

        self.run(&mut stdout, shutdown).await;

        info!("Shutting down...");
        Ok(())
    }

    #[doc = "Function that polls immediately, then once per schedule tick, until `shutdown` resolves."]
    /// A broken output pipe also ends the loop since nobody is left to read the values.
    /// # Arguments
    /// * `out`      - destination of the PUTVAL lines
    /// * `shutdown` - future that ends the loop when it completes
    pub async fn run<W, F>(&self, out: &mut W, shutdown: F)
    where
        W: Write,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let poll_ok: bool = match self.poll_once().await {
                Some(lines) => match self.emit(out, &lines) {
                    EmitOutcome::Written => true,
                    EmitOutcome::Failed => false,
                    EmitOutcome::ReaderGone => return,
                },
                None => false,
            };

            tokio::select! {
                _ = self.schedule.wait(poll_ok) => {}
                _ = &mut shutdown => return,
            }
        }
    }

    #[doc = "Function that performs one poll and renders it. Failures are logged and yield None."]
    pub async fn poll_once(&self) -> Option<Vec<String>> {
        let core: &str = self.config.core().as_str();

        match self.status_service.fetch_status(core).await {
            Ok(record) => {
                debug!(
                    "[MainController::poll_once] core '{}': {}",
                    core,
                    record.to_log_json()
                );
                Some(record.to_putval_lines(self.config.hostname(), current_unix_secs()))
            }
            Err(e) => {
                error!("[MainController::poll_once] {}: {}", e.kind(), e);
                None
            }
        }
    }

    fn emit<W: Write>(&self, out: &mut W, lines: &[String]) -> EmitOutcome {
        match write_lines_flushed(out, lines) {
            Ok(_) => EmitOutcome::Written,
            Err(e) => {
                error!("[MainController::emit] {:?}", e);

                let broken_pipe: bool = e
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::BrokenPipe);

                if broken_pipe {
                    EmitOutcome::ReaderGone
                } else {
                    EmitOutcome::Failed
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmitOutcome {
    Written,
    Failed,
    ReaderGone,
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::enums::status_error::*;
    use crate::model::metrics_record::*;
    use crate::service::schedule_service::*;

    /* Fails on the polls listed in `failing`, succeeds otherwise. */
    struct ScriptedStatusService {
        calls: AtomicUsize,
        failing: Vec<usize>,
    }

    impl ScriptedStatusService {
        fn new(failing: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failing,
            }
        }
    }

    #[async_trait]
    impl StatusService for ScriptedStatusService {
        async fn fetch_status(&self, core: &str) -> Result<MetricsRecord, StatusError> {
            let call: usize = self.calls.fetch_add(1, Ordering::SeqCst);

            if self.failing.contains(&call) {
                Err(StatusError::CoreNotFound {
                    core: core.to_string(),
                })
            } else {
                Ok(MetricsRecord::new(42, 3, 5, 102400, 1))
            }
        }
    }

    fn controller(
        failing: Vec<usize>,
    ) -> (
        MainController<ScriptedStatusService, FixedIntervalSchedule>,
        Arc<ScriptedStatusService>,
    ) {
        let service: Arc<ScriptedStatusService> = Arc::new(ScriptedStatusService::new(failing));
        let config: ExporterConfig = ExporterConfig::new(
            "localhost:8983".to_string(),
            "core1".to_string(),
            false,
            20,
            "web01".to_string(),
        );
        let schedule: FixedIntervalSchedule = FixedIntervalSchedule::new(config.interval());

        (
            MainController::new(Arc::clone(&service), Arc::new(schedule), Arc::new(config)),
            service,
        )
    }

    #[tokio::test]
    async fn successful_poll_renders_five_lines() {
        let (ctrl, _) = controller(vec![]);

        let lines: Vec<String> = ctrl.poll_once().await.expect("poll succeeds");

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("PUTVAL web01/solr_status/gauge-numdocs "));
        assert!(lines[4].ends_with(":1"));

        let stamps: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.rsplit(' ').next())
            .filter_map(|v| v.split(':').next())
            .collect();
        assert!(stamps.iter().all(|s| *s == stamps[0]));
    }

    #[tokio::test]
    async fn failed_poll_renders_nothing() {
        let (ctrl, _) = controller(vec![0]);

        assert!(ctrl.poll_once().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn loop_survives_failures_and_keeps_the_interval() {
        let (ctrl, service) = controller(vec![0]);
        let mut out: Vec<u8> = Vec::new();

        /* polls at t=0 (fails), t=20, t=40; stopped at t=50 */
        ctrl.run(&mut out, sleep(Duration::from_secs(50))).await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 3);

        let text: String = String::from_utf8(out).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines
                .iter()
                .filter(|l| l.starts_with("PUTVAL web01/solr_status/gauge-mergethreadcount "))
                .count(),
            2
        );
    }

    /* Rejects every write with the given error kind. */
    struct FailingWriter(std::io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(self.0))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn closed_stdout_pipe_ends_the_loop() {
        let (ctrl, service) = controller(vec![]);
        let mut out: FailingWriter = FailingWriter(std::io::ErrorKind::BrokenPipe);

        ctrl.run(&mut out, std::future::pending::<()>()).await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn other_write_errors_keep_polling() {
        let (ctrl, service) = controller(vec![]);
        let mut out: FailingWriter = FailingWriter(std::io::ErrorKind::Other);

        /* polls at t=0 and t=20; stopped at t=30 */
        ctrl.run(&mut out, sleep(Duration::from_secs(30))).await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn first_poll_fires_without_delay() {
        let (ctrl, service) = controller(vec![]);
        let mut out: Vec<u8> = Vec::new();

        ctrl.run(&mut out, sleep(Duration::from_secs(1))).await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(String::from_utf8(out).expect("utf8 output").lines().count(), 5);
    }
}
