use super::mission::Mission;
use serde::{Deserialize, Serialize};

/// Exoplanet catalog entry.
///
/// The remote catalog is sparse, so everything beyond the identifier and
/// name is optional and passed through without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mission: Option<Mission>,
    #[serde(default)]
    pub disposition: Option<String>,
    #[serde(default)]
    pub orbital_period_days: Option<f64>,
    #[serde(default)]
    pub radius_earth: Option<f64>,
    #[serde(default)]
    pub discovery_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_catalog_entry_deserializes() {
        let body = r#"{"id": "K00752.01", "name": "Kepler-227 b"}"#;
        let planet: Exoplanet = serde_json::from_str(body).unwrap();
        assert_eq!(planet.name, "Kepler-227 b");
        assert!(planet.mission.is_none());
        assert!(planet.orbital_period_days.is_none());
    }

    #[test]
    fn test_full_catalog_entry_deserializes() {
        let body = r#"{
            "id": "K00752.01",
            "name": "Kepler-227 b",
            "mission": "kepler",
            "disposition": "CONFIRMED",
            "orbital_period_days": 9.488,
            "radius_earth": 2.26,
            "discovery_year": 2014
        }"#;
        let planet: Exoplanet = serde_json::from_str(body).unwrap();
        assert_eq!(planet.mission, Some(Mission::Kepler));
        assert_eq!(planet.discovery_year, Some(2014));
    }
}
