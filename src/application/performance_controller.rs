//! Model-performance request lifecycle.
//!
//! Owns the {data, loading, error} view for the currently selected mission.
//! Every fetch carries a monotonically increasing sequence number; a
//! settlement only lands if its number still matches the latest issued one,
//! so a mission switch or retry can never be overwritten by an older
//! in-flight request that settles late. Settlements therefore apply in
//! fetch-initiation order, not network-completion order.

use crate::domain::mission::Mission;
use crate::domain::performance::PerformanceMetrics;
use crate::domain::ports::MetricsProvider;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Lifecycle of the current fetch. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// A fetch is in flight; no data or error is visible
    Loading,
    /// The latest fetch settled with metrics
    Success(PerformanceMetrics),
    /// The latest fetch settled with a failure message
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&PerformanceMetrics> {
        match self {
            Self::Success(metrics) => Some(metrics),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

struct ControllerState {
    mission: Mission,
    request: RequestState,
}

/// Drives metric fetches for the selected mission and exposes a consistent
/// {loading, data, error} snapshot to presentation code.
///
/// `refetch` with a new mission is a mission switch; `refetch` with the
/// current mission is the retry mechanism. The controller never retries on
/// its own and has no terminal state.
pub struct PerformanceController {
    provider: Arc<dyn MetricsProvider>,
    state: Arc<RwLock<ControllerState>>,
    latest_fetch: Arc<AtomicU64>,
}

impl PerformanceController {
    /// Creates the controller and eagerly starts the first fetch for
    /// `mission`. Must be called from within a tokio runtime.
    pub fn new(provider: Arc<dyn MetricsProvider>, mission: Mission) -> Self {
        let controller = Self {
            provider,
            state: Arc::new(RwLock::new(ControllerState {
                mission,
                request: RequestState::Loading,
            })),
            latest_fetch: Arc::new(AtomicU64::new(0)),
        };
        controller.refetch(mission);
        controller
    }

    /// Snapshot of the current request lifecycle
    pub fn state(&self) -> RequestState {
        read_guard(&self.state).request.clone()
    }

    /// The most recently requested mission
    pub fn mission(&self) -> Mission {
        read_guard(&self.state).mission
    }

    /// Starts a new fetch for `mission`, superseding any in-flight one.
    /// Transitions to Loading immediately; progress is observed through
    /// `state()`.
    pub fn refetch(&self, mission: Mission) {
        let fetch_id = self.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut guard = write_guard(&self.state);
            // A later refetch may already have won the sequence number race;
            // only the latest one owns the Loading transition.
            if self.latest_fetch.load(Ordering::SeqCst) == fetch_id {
                guard.mission = mission;
                guard.request = RequestState::Loading;
            }
        }
        debug!("Starting fetch #{} for mission {}", fetch_id, mission);

        let provider = Arc::clone(&self.provider);
        let state = Arc::clone(&self.state);
        let latest_fetch = Arc::clone(&self.latest_fetch);

        tokio::spawn(async move {
            let outcome = provider.fetch_metrics(mission).await;

            let mut guard = write_guard(&state);
            if latest_fetch.load(Ordering::SeqCst) != fetch_id {
                debug!(
                    "Discarding stale settlement of fetch #{} for mission {}",
                    fetch_id, mission
                );
                return;
            }

            guard.request = match outcome {
                Ok(metrics) => {
                    info!("Fetch #{} settled with metrics for mission {}", fetch_id, mission);
                    RequestState::Success(metrics)
                }
                Err(err) => {
                    warn!("Fetch #{} for mission {} failed: {}", fetch_id, mission, err);
                    RequestState::Failure(err.to_string())
                }
            };
        });
    }
}

// Lock poisoning only happens if a holder panicked mid-transition; the
// state value itself is always coherent, so recover it.
fn read_guard(state: &RwLock<ControllerState>) -> RwLockReadGuard<'_, ControllerState> {
    state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_guard(state: &RwLock<ControllerState>) -> RwLockWriteGuard<'_, ControllerState> {
    state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
