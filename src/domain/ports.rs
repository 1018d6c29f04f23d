use crate::domain::errors::TransportError;
use crate::domain::exoplanet::Exoplanet;
use crate::domain::mission::Mission;
use crate::domain::performance::PerformanceMetrics;
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Fetch evaluation metrics for one mission's trained model
    async fn fetch_metrics(&self, mission: Mission) -> Result<PerformanceMetrics, TransportError>;
}

#[async_trait]
pub trait ExoplanetCatalog: Send + Sync {
    async fn list_exoplanets(&self) -> Result<Vec<Exoplanet>, TransportError>;
    async fn get_exoplanet(&self, id: &str) -> Result<Exoplanet, TransportError>;
    async fn search_exoplanets(&self, query: &str) -> Result<Vec<Exoplanet>, TransportError>;
}
