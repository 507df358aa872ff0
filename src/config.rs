//! Runtime configuration for the host loop
//!
//! Defaults, then `LIMNUS_*` environment variables, then CLI flags.

use std::env;
use std::time::Duration;

use crate::error::{LimnusError, Result};

/// Frame interval for the tick driver (~60 fps)
pub const DEFAULT_TICK_MS: u64 = 16;

/// Artificial pause before a scripted reply is shown
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// How many recent crystals the terminal shows
pub const DEFAULT_CRYSTAL_WINDOW: usize = 8;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tick interval in milliseconds
    pub tick_ms: u64,
    /// Scripted reply delay in milliseconds
    pub reply_delay_ms: u64,
    /// Crystal display window
    pub crystal_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            crystal_window: DEFAULT_CRYSTAL_WINDOW,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("LIMNUS_TICK_MS") {
            config.tick_ms = parse_var("LIMNUS_TICK_MS", &v)?;
        }
        if let Some(v) = lookup("LIMNUS_REPLY_DELAY_MS") {
            config.reply_delay_ms = parse_var("LIMNUS_REPLY_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("LIMNUS_CRYSTAL_WINDOW") {
            config.crystal_window = parse_var("LIMNUS_CRYSTAL_WINDOW", &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides on top of this config
    pub fn with_overrides(
        mut self,
        tick_ms: Option<u64>,
        reply_delay_ms: Option<u64>,
        crystal_window: Option<usize>,
    ) -> Result<Self> {
        if let Some(ms) = tick_ms {
            self.tick_ms = ms;
        }
        if let Some(ms) = reply_delay_ms {
            self.reply_delay_ms = ms;
        }
        if let Some(n) = crystal_window {
            self.crystal_window = n;
        }
        self.validate()?;
        Ok(self)
    }

    /// Tick interval must be non-zero (tokio intervals panic on zero)
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(LimnusError::Config("tick interval must be > 0 ms".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LimnusError::Config(format!("{} has invalid value '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
        assert_eq!(config.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.crystal_window, 8);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LIMNUS_TICK_MS", "33"),
            ("LIMNUS_REPLY_DELAY_MS", " 250 "),
            ("LIMNUS_CRYSTAL_WINDOW", "12"),
        ]))
        .unwrap();
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.crystal_window, 12);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = Config::from_lookup(lookup_from(&[("LIMNUS_TICK_MS", "fast")])).unwrap_err();
        assert!(matches!(err, LimnusError::Config(_)));
        assert!(err.to_string().contains("LIMNUS_TICK_MS"));
    }

    #[test]
    fn test_rejects_zero_tick() {
        assert!(Config::from_lookup(lookup_from(&[("LIMNUS_TICK_MS", "0")])).is_err());
        assert!(Config::default().with_overrides(Some(0), None, None).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::default()
            .with_overrides(Some(50), Some(0), Some(3))
            .unwrap();
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.crystal_window, 3);
    }
}
