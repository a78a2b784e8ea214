//! Engine configuration.

use crate::error::{Error, Result};
use crate::speed::Speed;

/// Environment variable holding the initial speed (1-100).
pub const SPEED_VAR: &str = "ALGOVIZ_SPEED";

/// Environment variable holding the dataset RNG seed.
pub const SEED_VAR: &str = "ALGOVIZ_SEED";

/// Configuration shared by every visualizer instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Speed new controllers start at.
    pub speed: Speed,

    /// Seed for dataset generation. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SPEED_VAR) {
            let value: u8 = raw.trim().parse().map_err(|_| Error::InvalidConfig {
                var: SPEED_VAR,
                value: raw.clone(),
                reason: "expected an integer",
            })?;
            if !(Speed::MIN.value()..=Speed::MAX.value()).contains(&value) {
                return Err(Error::InvalidConfig {
                    var: SPEED_VAR,
                    value: raw,
                    reason: "speed must be between 1 and 100",
                });
            }
            config.speed = Speed::new(value);
        }

        if let Some(raw) = lookup(SEED_VAR) {
            let seed = raw.trim().parse().map_err(|_| Error::InvalidConfig {
                var: SEED_VAR,
                value: raw.clone(),
                reason: "expected an unsigned integer",
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    /// Override the initial speed.
    #[must_use]
    pub fn with_speed(mut self, speed: impl Into<Speed>) -> Self {
        self.speed = speed.into();
        self
    }

    /// Fix the dataset seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.speed, Speed::DEFAULT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn reads_speed_and_seed() {
        let config =
            EngineConfig::from_lookup(lookup(&[(SPEED_VAR, " 80 "), (SEED_VAR, "7")])).unwrap();
        assert_eq!(config.speed.value(), 80);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_bad_values() {
        let err = EngineConfig::from_lookup(lookup(&[(SPEED_VAR, "fast")])).unwrap_err();
        assert!(err.to_string().contains(SPEED_VAR));

        assert!(EngineConfig::from_lookup(lookup(&[(SPEED_VAR, "0")])).is_err());
        assert!(EngineConfig::from_lookup(lookup(&[(SPEED_VAR, "101")])).is_err());
        assert!(EngineConfig::from_lookup(lookup(&[(SEED_VAR, "-1")])).is_err());
    }

    #[test]
    fn builders_override() {
        let config = EngineConfig::default().with_speed(250).with_seed(3);
        assert_eq!(config.speed, Speed::MAX);
        assert_eq!(config.seed, Some(3));
    }
}
