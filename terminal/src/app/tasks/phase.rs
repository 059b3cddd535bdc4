//! # Phase Poller
//!
//! Background task that re-reads the sale phase on a fixed interval and reports each
//! reading as [`AppEvent::PhaseObserved`].
//!
//! - One tick at a time: the next tick is not scheduled until the current check
//!   returns, so checks never overlap.
//! - Stops for good once the presale is observed to have ended.
//! - A failed check is logged and the next tick retries.
//! - Dropping the poller aborts the task.

use crate::app::events::AppEvent;
use crate::core::service::PhaseSource;
use async_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Unstarted,
    Polling,
    Stopped,
}

/// Floor for the tick period; `tokio::time::interval` rejects zero.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

pub struct PhasePoller {
    state: Arc<Mutex<PollerState>>,
    handle: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl PhasePoller {
    pub fn new(interval: Duration) -> Self {
        if interval < MIN_INTERVAL {
            warn!(interval_ms = interval.as_millis() as u64, "Phase poll interval too short, clamping");
        }
        Self {
            state: Arc::new(Mutex::new(PollerState::Unstarted)),
            handle: Mutex::new(None),
            interval: interval.max(MIN_INTERVAL),
        }
    }

    pub fn state(&self) -> PollerState {
        *self.state.lock()
    }

    /// Spawn the polling loop. Only the first call starts anything; later calls
    /// return `false`.
    pub fn start(&self, source: Arc<dyn PhaseSource>, events: Sender<AppEvent>) -> bool {
        {
            let mut state = self.state.lock();
            if *state != PollerState::Unstarted {
                return false;
            }
            *state = PollerState::Polling;
        }

        let state = Arc::clone(&self.state);
        let period = self.interval;
        info!(interval_ms = period.as_millis() as u64, "Starting phase poller");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // Delay keeps a slow check from being followed by a burst of catch-up ticks
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let observation = match source.observe_phase().await {
                    Ok(observation) => observation,
                    Err(e) => {
                        warn!(error = %e, "Phase check failed, retrying on next tick");
                        continue;
                    }
                };
                debug!(started = observation.started, ended = observation.ended, "Phase observed");

                if events.send(AppEvent::PhaseObserved(observation)).await.is_err() {
                    debug!("Event channel closed, phase poller exiting");
                    break;
                }

                if observation.started && observation.ended {
                    info!("Presale ended, phase poller stopped");
                    break;
                }
            }
            *state.lock() = PollerState::Stopped;
        });

        *self.handle.lock() = Some(handle);
        true
    }
}

impl Drop for PhasePoller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.lock().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::services::PhaseObservation;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed list of observations, holding each check open for `latency`.
    struct ScriptedPhases {
        script: Mutex<VecDeque<Result<PhaseObservation>>>,
        latency: Duration,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedPhases {
        fn new(script: Vec<Result<PhaseObservation>>, latency: Duration) -> Self {
            Self {
                script: Mutex::new(script.into()),
                latency,
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PhaseSource for ScriptedPhases {
        async fn observe_phase(&self) -> Result<PhaseObservation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(self.latency).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.script
                .lock()
                .pop_front()
                .unwrap_or(Ok(PhaseObservation { started: false, ended: false }))
        }
    }

    fn not_started() -> Result<PhaseObservation> {
        Ok(PhaseObservation { started: false, ended: false })
    }

    #[tokio::test]
    async fn test_checks_never_overlap() {
        // Each check takes longer than the interval
        let source = Arc::new(ScriptedPhases::new(Vec::new(), Duration::from_millis(15)));
        let poller = PhasePoller::new(Duration::from_millis(2));
        let (tx, rx) = async_channel::unbounded();

        assert!(poller.start(source.clone(), tx));
        for _ in 0..4 {
            rx.recv().await.unwrap();
        }

        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stops_after_presale_ended() {
        let script = vec![
            not_started(),
            Ok(PhaseObservation { started: true, ended: false }),
            Ok(PhaseObservation { started: true, ended: true }),
        ];
        let source = Arc::new(ScriptedPhases::new(script, Duration::ZERO));
        let poller = PhasePoller::new(Duration::from_millis(1));
        let (tx, rx) = async_channel::unbounded();

        poller.start(source.clone(), tx);

        let mut seen = Vec::new();
        for _ in 0..3 {
            match rx.recv().await.unwrap() {
                AppEvent::PhaseObserved(obs) => seen.push(obs),
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert!(seen[2].started && seen[2].ended);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(poller.state(), PollerState::Stopped);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failed_check_retries_next_tick() {
        let script = vec![
            Err(AppError::Wallet("rpc down".to_string())),
            Ok(PhaseObservation { started: true, ended: false }),
        ];
        let source = Arc::new(ScriptedPhases::new(script, Duration::ZERO));
        let poller = PhasePoller::new(Duration::from_millis(1));
        let (tx, rx) = async_channel::unbounded();

        poller.start(source.clone(), tx);

        match rx.recv().await.unwrap() {
            AppEvent::PhaseObserved(obs) => assert!(obs.started && !obs.ended),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(poller.state(), PollerState::Polling);
    }

    #[tokio::test]
    async fn test_zero_interval_still_polls() {
        let script = vec![Ok(PhaseObservation { started: true, ended: true })];
        let source = Arc::new(ScriptedPhases::new(script, Duration::ZERO));
        let poller = PhasePoller::new(Duration::ZERO);
        let (tx, rx) = async_channel::unbounded();

        assert!(poller.start(source, tx));
        assert!(matches!(rx.recv().await.unwrap(), AppEvent::PhaseObserved(_)));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(poller.state(), PollerState::Stopped);
    }

    #[tokio::test]
    async fn test_second_start_is_ignored() {
        let source = Arc::new(ScriptedPhases::new(Vec::new(), Duration::ZERO));
        let poller = PhasePoller::new(Duration::from_millis(50));
        let (tx, _rx) = async_channel::unbounded();

        assert_eq!(poller.state(), PollerState::Unstarted);
        assert!(poller.start(source.clone(), tx.clone()));
        assert!(!poller.start(source, tx));
        assert_eq!(poller.state(), PollerState::Polling);
    }

    #[tokio::test]
    async fn test_drop_aborts_polling() {
        let source = Arc::new(ScriptedPhases::new(Vec::new(), Duration::ZERO));
        let poller = PhasePoller::new(Duration::from_millis(1));
        let (tx, rx) = async_channel::unbounded();

        poller.start(source.clone(), tx);
        rx.recv().await.unwrap();
        drop(poller);

        // Let the abort land, then make sure no further checks run
        tokio::time::sleep(Duration::from_millis(10)).await;
        let calls = source.calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), calls);
    }
}
