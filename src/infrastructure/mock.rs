//! Mock metrics provider for tests and offline development.

use crate::domain::errors::TransportError;
use crate::domain::mission::Mission;
use crate::domain::performance::{PerformanceMetrics, PrPoint, RocPoint};
use crate::domain::ports::MetricsProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Clone)]
enum ScriptedOutcome {
    Metrics(PerformanceMetrics),
    Transport(String),
    Timeout(u64),
}

#[derive(Clone)]
struct ScriptedFetch {
    latency: Duration,
    outcome: ScriptedOutcome,
}

/// Scripted `MetricsProvider`: each mission gets a latency and an outcome,
/// so tests can interleave in-flight fetches deterministically.
pub struct MockMetricsProvider {
    scripts: Mutex<HashMap<Mission, ScriptedFetch>>,
    calls: AtomicUsize,
}

impl MockMetricsProvider {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a successful fetch settling after `latency`
    pub fn succeed_after(&self, mission: Mission, latency: Duration) {
        self.script(
            mission,
            latency,
            ScriptedOutcome::Metrics(sample_metrics(mission)),
        );
    }

    /// Script a failing fetch settling after `latency`
    pub fn fail_after(&self, mission: Mission, latency: Duration, message: &str) {
        self.script(
            mission,
            latency,
            ScriptedOutcome::Transport(message.to_string()),
        );
    }

    /// Script a fetch that exhausts a `budget_ms` timeout after `latency`
    pub fn time_out_after(&self, mission: Mission, latency: Duration, budget_ms: u64) {
        self.script(mission, latency, ScriptedOutcome::Timeout(budget_ms));
    }

    /// Number of fetches issued so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn script(&self, mission: Mission, latency: Duration, outcome: ScriptedOutcome) {
        let mut scripts = self.scripts.lock().unwrap_or_else(|e| e.into_inner());
        scripts.insert(mission, ScriptedFetch { latency, outcome });
    }
}

impl Default for MockMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsProvider for MockMetricsProvider {
    async fn fetch_metrics(&self, mission: Mission) -> Result<PerformanceMetrics, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let script = {
            let scripts = self.scripts.lock().unwrap_or_else(|e| e.into_inner());
            scripts.get(&mission).cloned()
        };

        let Some(script) = script else {
            return Err(TransportError::Request {
                reason: format!("no scripted response for mission {}", mission),
            });
        };

        tokio::time::sleep(script.latency).await;

        match script.outcome {
            ScriptedOutcome::Metrics(metrics) => Ok(metrics),
            ScriptedOutcome::Transport(reason) => Err(TransportError::Request { reason }),
            ScriptedOutcome::Timeout(duration_ms) => Err(TransportError::Timeout { duration_ms }),
        }
    }
}

/// Plausible metrics for a mission, shaped like the remote service's payload
pub fn sample_metrics(mission: Mission) -> PerformanceMetrics {
    // Slightly different numbers per mission so tests can tell results apart
    let (precision, recall) = match mission {
        Mission::Kepler => (0.91, 0.88),
        Mission::Tess => (0.93, 0.89),
    };
    let f1score = 2.0 * precision * recall / (precision + recall);

    PerformanceMetrics {
        mission,
        precision,
        recall,
        f1score,
        performance: f1score * 100.0,
        roc: vec![
            RocPoint { fpr: 0.0, tpr: 0.0 },
            RocPoint {
                fpr: 1.0 - precision,
                tpr: recall,
            },
            RocPoint { fpr: 1.0, tpr: 1.0 },
        ],
        pr: vec![
            PrPoint {
                recall: 0.0,
                precision: 1.0,
            },
            PrPoint { recall, precision },
            PrPoint {
                recall: 1.0,
                precision: 0.5,
            },
        ],
    }
}
