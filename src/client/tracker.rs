//! Periodic GPS reporting for a signed-in agent
//!
//! [`GpsReporter`] runs one background task per active session. Every tick it
//! asks a [`LocationSource`] for a fix and hands it to a [`PingSink`]. A tick
//! without a fix is skipped; a failed submission is logged and the loop keeps
//! going.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::domain::{CreateGpsPingDto, DomainResult, RepositoryProvider, DEFAULT_ACTIVITY_TYPE};

/// A position reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of one position report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PingSubmission {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub activity_type: String,
}

#[async_trait]
pub trait LocationSource: Send + Sync {
    /// `None` when no fix is available right now.
    async fn current_fix(&self) -> Option<Fix>;
}

#[async_trait]
pub trait PingSink: Send + Sync {
    async fn submit(&self, ping: PingSubmission) -> DomainResult<()>;
}

/// Sink that records pings straight into the store.
pub struct RepositoryPingSink {
    repos: Arc<dyn RepositoryProvider>,
}

impl RepositoryPingSink {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl PingSink for RepositoryPingSink {
    async fn submit(&self, ping: PingSubmission) -> DomainResult<()> {
        self.repos
            .gps_pings()
            .record_ping(CreateGpsPingDto {
                user_id: ping.user_id,
                latitude: ping.latitude,
                longitude: ping.longitude,
                activity_type: Some(ping.activity_type),
            })
            .await
            .map(|_| ())
    }
}

struct Running {
    user_id: String,
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

pub struct GpsReporter {
    source: Arc<dyn LocationSource>,
    sink: Arc<dyn PingSink>,
    interval: Duration,
    activity_type: String,
    running: Option<Running>,
}

impl GpsReporter {
    pub fn new(source: Arc<dyn LocationSource>, sink: Arc<dyn PingSink>, interval: Duration) -> Self {
        Self {
            source,
            sink,
            interval,
            activity_type: DEFAULT_ACTIVITY_TYPE.to_string(),
            running: None,
        }
    }

    pub fn from_config(
        source: Arc<dyn LocationSource>,
        sink: Arc<dyn PingSink>,
        config: &TrackerConfig,
    ) -> Self {
        Self::new(source, sink, Duration::from_secs(config.interval_secs.max(1)))
    }

    pub fn with_activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|r| !r.task.is_finished())
    }

    /// User the reporter is currently reporting for.
    pub fn active_user(&self) -> Option<&str> {
        self.running.as_ref().map(|r| r.user_id.as_str())
    }

    /// Begin reporting for `user_id`. A reporter that is already running is
    /// stopped first.
    pub async fn start(&mut self, user_id: impl Into<String>) {
        self.stop().await;

        let user_id = user_id.into();
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(report_loop(
            user_id.clone(),
            Arc::clone(&self.source),
            Arc::clone(&self.sink),
            self.interval,
            self.activity_type.clone(),
            stop_rx,
        ));

        info!(%user_id, interval_secs = self.interval.as_secs_f64(), "GPS reporting started");
        self.running = Some(Running {
            user_id,
            stop_tx,
            task,
        });
    }

    /// Stop reporting. Calling it when nothing runs is a no-op.
    pub async fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        let _ = running.stop_tx.send(true);
        if let Err(e) = running.task.await {
            warn!(user_id = %running.user_id, error = %e, "GPS reporting task ended abnormally");
        }
        info!(user_id = %running.user_id, "GPS reporting stopped");
    }
}

impl Drop for GpsReporter {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.stop_tx.send(true);
            running.task.abort();
        }
    }
}

async fn report_loop(
    user_id: String,
    source: Arc<dyn LocationSource>,
    sink: Arc<dyn PingSink>,
    interval: Duration,
    activity_type: String,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = stop_rx.changed() => break,
            _ = ticker.tick() => {
                let Some(fix) = source.current_fix().await else {
                    debug!(%user_id, "No location fix; skipping report");
                    continue;
                };

                let ping = PingSubmission {
                    user_id: user_id.clone(),
                    latitude: fix.latitude,
                    longitude: fix.longitude,
                    activity_type: activity_type.clone(),
                };
                if let Err(e) = sink.submit(ping).await {
                    warn!(%user_id, error = %e, "Failed to submit GPS ping");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::domain::{DomainError, UserRole};
    use crate::test_support::TestContext;

    struct FixedSource(Option<Fix>);

    #[async_trait]
    impl LocationSource for FixedSource {
        async fn current_fix(&self) -> Option<Fix> {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        pings: Mutex<Vec<PingSubmission>>,
        attempts: AtomicUsize,
        fail_first: bool,
    }

    impl RecordingSink {
        fn count(&self) -> usize {
            self.pings.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PingSink for RecordingSink {
        async fn submit(&self, ping: PingSubmission) -> DomainResult<()> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && attempt == 0 {
                return Err(DomainError::Storage("offline".into()));
            }
            self.pings.lock().unwrap().push(ping);
            Ok(())
        }
    }

    const TICK: Duration = Duration::from_millis(10);
    const TASHKENT: Fix = Fix {
        latitude: 41.2995,
        longitude: 69.2401,
    };

    #[tokio::test]
    async fn reports_while_started_and_stops_after_stop() {
        let sink = Arc::new(RecordingSink::default());
        let mut reporter = GpsReporter::new(Arc::new(FixedSource(Some(TASHKENT))), sink.clone(), TICK);

        reporter.start("u1").await;
        assert_eq!(reporter.active_user(), Some("u1"));
        tokio::time::sleep(TICK * 5).await;
        reporter.stop().await;
        assert!(!reporter.is_running());

        let reported = sink.count();
        assert!(reported >= 2, "expected several pings, got {reported}");
        let first = sink.pings.lock().unwrap()[0].clone();
        assert_eq!(first.user_id, "u1");
        assert_eq!(first.activity_type, "active");
        assert_eq!(first.latitude, TASHKENT.latitude);

        tokio::time::sleep(TICK * 3).await;
        assert_eq!(sink.count(), reported);

        // Idempotent
        reporter.stop().await;
    }

    #[tokio::test]
    async fn ticks_without_a_fix_are_skipped() {
        let sink = Arc::new(RecordingSink::default());
        let mut reporter = GpsReporter::new(Arc::new(FixedSource(None)), sink.clone(), TICK);

        reporter.start("u1").await;
        tokio::time::sleep(TICK * 4).await;
        reporter.stop().await;

        assert_eq!(sink.attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_submission_does_not_end_the_loop() {
        let sink = Arc::new(RecordingSink {
            fail_first: true,
            ..Default::default()
        });
        let mut reporter = GpsReporter::new(Arc::new(FixedSource(Some(TASHKENT))), sink.clone(), TICK);

        reporter.start("u1").await;
        tokio::time::sleep(TICK * 5).await;
        assert!(reporter.is_running());
        reporter.stop().await;

        assert!(sink.attempts.load(Ordering::SeqCst) >= 2);
        assert!(sink.count() >= 1);
    }

    #[tokio::test]
    async fn restart_switches_user() {
        let sink = Arc::new(RecordingSink::default());
        let mut reporter = GpsReporter::new(Arc::new(FixedSource(Some(TASHKENT))), sink.clone(), TICK)
            .with_activity_type("visit");

        reporter.start("u1").await;
        reporter.start("u2").await;
        assert_eq!(reporter.active_user(), Some("u2"));
        tokio::time::sleep(TICK * 3).await;
        reporter.stop().await;

        let pings = sink.pings.lock().unwrap();
        let last = pings.last().unwrap();
        assert_eq!(last.user_id, "u2");
        assert_eq!(last.activity_type, "visit");
    }

    #[tokio::test]
    async fn repository_sink_stores_pings() {
        let ctx = TestContext::new().await;
        let agent = ctx.seed_profile("walker@example.com", "Walker", UserRole::Agent).await;
        let sink = RepositoryPingSink::new(ctx.repos.clone());

        sink.submit(PingSubmission {
            user_id: agent.id.clone(),
            latitude: 1.5,
            longitude: 2.5,
            activity_type: "active".to_string(),
        })
        .await
        .unwrap();

        let pings = ctx.repos.gps_pings().list_latest(10).await.unwrap();
        assert_eq!(pings.len(), 1);
        assert_eq!(pings[0].user_id, agent.id);
    }
}
