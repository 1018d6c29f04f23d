use super::mission::Mission;
use serde::{Deserialize, Serialize};

/// Point on the receiver-operating-characteristic curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
}

/// Point on the precision-recall curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrPoint {
    pub recall: f64,
    pub precision: f64,
}

/// Evaluation metrics for one mission's trained classifier.
///
/// `roc` and `pr` are ordered for plotting; point order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Mission the metrics belong to, echoed by the service
    pub mission: Mission,
    pub precision: f64,
    pub recall: f64,
    pub f1score: f64,
    /// Overall score as a percentage, 0-100
    pub performance: f64,
    pub roc: Vec<RocPoint>,
    pub pr: Vec<PrPoint>,
}

impl PerformanceMetrics {
    /// Checks the invariants a renderable result must satisfy: non-empty
    /// curves and finite numeric fields. Curve monotonicity and value
    /// ranges are the remote service's responsibility.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.roc.is_empty() {
            return Err("roc curve is empty".to_string());
        }
        if self.pr.is_empty() {
            return Err("pr curve is empty".to_string());
        }

        let scalars = [
            ("precision", self.precision),
            ("recall", self.recall),
            ("f1score", self.f1score),
            ("performance", self.performance),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(format!("{} is not finite: {}", name, value));
            }
        }

        if let Some(idx) = self
            .roc
            .iter()
            .position(|p| !p.fpr.is_finite() || !p.tpr.is_finite())
        {
            return Err(format!("roc point {} is not finite", idx));
        }
        if let Some(idx) = self
            .pr
            .iter()
            .position(|p| !p.recall.is_finite() || !p.precision.is_finite())
        {
            return Err(format!("pr point {} is not finite", idx));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            mission: Mission::Kepler,
            precision: 0.91,
            recall: 0.88,
            f1score: 0.894,
            performance: 89.4,
            roc: vec![
                RocPoint { fpr: 0.0, tpr: 0.0 },
                RocPoint { fpr: 1.0, tpr: 1.0 },
            ],
            pr: vec![PrPoint {
                recall: 0.88,
                precision: 0.91,
            }],
        }
    }

    #[test]
    fn test_well_formed_metrics_pass_shape_check() {
        assert!(metrics().check_shape().is_ok());
    }

    #[test]
    fn test_empty_curve_fails_shape_check() {
        let mut m = metrics();
        m.roc.clear();
        assert_eq!(m.check_shape().unwrap_err(), "roc curve is empty");

        let mut m = metrics();
        m.pr.clear();
        assert_eq!(m.check_shape().unwrap_err(), "pr curve is empty");
    }

    #[test]
    fn test_non_finite_values_fail_shape_check() {
        let mut m = metrics();
        m.f1score = f64::NAN;
        assert!(m.check_shape().unwrap_err().contains("f1score"));

        let mut m = metrics();
        m.roc[1].tpr = f64::INFINITY;
        assert!(m.check_shape().unwrap_err().contains("roc point 1"));
    }

    #[test]
    fn test_deserializes_service_payload() {
        let body = r#"{
            "mission": "tess",
            "precision": 0.93,
            "recall": 0.89,
            "f1score": 0.909,
            "performance": 91.2,
            "roc": [{"fpr": 0.0, "tpr": 0.0}, {"fpr": 0.08, "tpr": 0.86}, {"fpr": 1.0, "tpr": 1.0}],
            "pr": [{"recall": 0.0, "precision": 1.0}, {"recall": 0.89, "precision": 0.93}]
        }"#;

        let m: PerformanceMetrics = serde_json::from_str(body).unwrap();
        assert_eq!(m.mission, Mission::Tess);
        assert_eq!(m.roc.len(), 3);
        assert_eq!(m.pr.len(), 2);
        assert!(m.check_shape().is_ok());
    }
}
