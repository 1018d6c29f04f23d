//! Remote exoplanet model service client.
//!
//! Talks to the exoapi service for:
//! - Per-mission model performance metrics
//! - Exoplanet catalog lookups and search

use crate::config::ApiEnvConfig;
use crate::domain::errors::TransportError;
use crate::domain::exoplanet::Exoplanet;
use crate::domain::mission::Mission;
use crate::domain::performance::PerformanceMetrics;
use crate::domain::ports::{ExoplanetCatalog, MetricsProvider};
use crate::infrastructure::core::http_client_factory::{HttpClientFactory, endpoint_url};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

pub struct ExoApiService {
    client: ClientWithMiddleware,
    base_url: String,
    timeout: Duration,
}

impl ExoApiService {
    pub fn new(config: &ApiEnvConfig) -> Self {
        Self {
            client: HttpClientFactory::create_client(config),
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        }
    }

    /// One GET returning a deserialized body. The underlying client bounds
    /// every attempt with the configured timeout, so this cannot pend
    /// indefinitely.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TransportError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.send_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|err| {
            if err.is_timeout() {
                self.timeout_error()
            } else {
                TransportError::Payload {
                    reason: err.to_string(),
                }
            }
        })
    }

    fn send_error(&self, err: reqwest_middleware::Error) -> TransportError {
        match err {
            reqwest_middleware::Error::Reqwest(inner) if inner.is_timeout() => {
                self.timeout_error()
            }
            other => TransportError::Request {
                reason: other.to_string(),
            },
        }
    }

    fn timeout_error(&self) -> TransportError {
        TransportError::Timeout {
            duration_ms: self.timeout.as_millis() as u64,
        }
    }
}

/// A payload only counts as well-formed when it echoes the requested
/// mission and satisfies the renderable-shape invariants.
fn validate_metrics(
    requested: Mission,
    metrics: &PerformanceMetrics,
) -> Result<(), TransportError> {
    if metrics.mission != requested {
        return Err(TransportError::Payload {
            reason: format!(
                "mission mismatch: requested {}, got {}",
                requested, metrics.mission
            ),
        });
    }
    metrics
        .check_shape()
        .map_err(|reason| TransportError::Payload { reason })
}

#[async_trait]
impl MetricsProvider for ExoApiService {
    async fn fetch_metrics(&self, mission: Mission) -> Result<PerformanceMetrics, TransportError> {
        let url = endpoint_url(&self.base_url, "/ai_model", &[("mission", mission.as_str())]);
        info!("Fetching model performance for mission {}", mission);

        let metrics: PerformanceMetrics = self.get_json(&url).await?;
        validate_metrics(mission, &metrics)?;

        info!(
            "Mission {} model: f1 {:.3}, performance {:.1}%",
            mission, metrics.f1score, metrics.performance
        );
        Ok(metrics)
    }
}

#[async_trait]
impl ExoplanetCatalog for ExoApiService {
    async fn list_exoplanets(&self) -> Result<Vec<Exoplanet>, TransportError> {
        let url = endpoint_url(&self.base_url, "/exoplanets", &[]);
        self.get_json(&url).await
    }

    async fn get_exoplanet(&self, id: &str) -> Result<Exoplanet, TransportError> {
        let url = endpoint_url(&self.base_url, &format!("/exoplanets/{}", id), &[]);
        self.get_json(&url).await
    }

    async fn search_exoplanets(&self, query: &str) -> Result<Vec<Exoplanet>, TransportError> {
        let url = endpoint_url(&self.base_url, "/exoplanets", &[("search", query)]);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::sample_metrics;

    #[test]
    fn test_validate_metrics_accepts_matching_mission() {
        let metrics = sample_metrics(Mission::Kepler);
        assert!(validate_metrics(Mission::Kepler, &metrics).is_ok());
    }

    #[test]
    fn test_validate_metrics_rejects_mission_mismatch() {
        let metrics = sample_metrics(Mission::Tess);
        let err = validate_metrics(Mission::Kepler, &metrics).unwrap_err();
        assert!(err.to_string().contains("mission mismatch"));
    }

    #[test]
    fn test_validate_metrics_rejects_bad_shape() {
        let mut metrics = sample_metrics(Mission::Kepler);
        metrics.pr.clear();
        let err = validate_metrics(Mission::Kepler, &metrics).unwrap_err();
        assert!(err.to_string().contains("pr curve is empty"));
    }
}
