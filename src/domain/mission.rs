use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Detection mission whose trained model is being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mission {
    Kepler,
    Tess,
}

impl Mission {
    /// Lowercase identifier as the remote service expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kepler => "kepler",
            Self::Tess => "tess",
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kepler" => Ok(Mission::Kepler),
            "tess" => Ok(Mission::Tess),
            _ => anyhow::bail!("Invalid mission: {}. Must be 'kepler' or 'tess'", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_parses_case_insensitively() {
        assert_eq!("kepler".parse::<Mission>().unwrap(), Mission::Kepler);
        assert_eq!("TESS".parse::<Mission>().unwrap(), Mission::Tess);
        assert_eq!("Kepler".parse::<Mission>().unwrap(), Mission::Kepler);
    }

    #[test]
    fn test_unknown_mission_is_rejected() {
        let err = "jwst".parse::<Mission>().unwrap_err();
        assert!(err.to_string().contains("jwst"));
    }

    #[test]
    fn test_mission_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mission::Tess).unwrap(), "\"tess\"");
        let mission: Mission = serde_json::from_str("\"kepler\"").unwrap();
        assert_eq!(mission, Mission::Kepler);
    }
}
