//! Chat advisor configuration

use serde::Deserialize;

/// Advisor settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisorConfig {
    /// Seed for the fallback prompt picker; unseeded when absent
    pub random_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_defaults_unseeded() {
        assert!(AdvisorConfig::default().random_seed.is_none());
    }

    #[test]
    fn test_seed_deserializes() {
        let config: AdvisorConfig = serde_json::from_str(r#"{"random_seed": 7}"#).unwrap();
        assert_eq!(config.random_seed, Some(7));
    }
}
