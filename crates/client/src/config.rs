//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::DEFAULT_CADENCE;

/// Configuration required to run an auto-play session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Session seed. `None` lets the runtime pick one.
    pub seed: Option<u64>,
    /// Delay between battle ticks.
    pub tick: Duration,
    pub max_floors: Option<u32>,
    /// Ask on stdin which reward to take instead of taking the first.
    pub interactive: bool,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Write the final game state here as JSON.
    pub dump_state: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick: DEFAULT_CADENCE,
            max_floors: None,
            interactive: false,
            session_id: None,
            log_dir: None,
            dump_state: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPIRE_SEED` - Session seed (default: random)
    /// - `SPIRE_TICK_MS` - Milliseconds between ticks (default: 1000)
    /// - `SPIRE_MAX_FLOORS` - Stop after clearing this many floors (default: unlimited)
    /// - `SPIRE_INTERACTIVE` - Choose rewards on stdin (default: false)
    /// - `SPIRE_SESSION_ID` - Log session name (default: timestamp)
    /// - `SPIRE_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `SPIRE_DUMP_STATE` - Path for a JSON dump of the final state
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parse = |key: &str| read(key).and_then(|value| value.trim().parse::<u64>().ok());

        let mut config = Self::default();

        config.seed = parse("SPIRE_SEED");

        if let Some(ms) = parse("SPIRE_TICK_MS") {
            config.tick = Duration::from_millis(ms);
        }

        config.max_floors = parse("SPIRE_MAX_FLOORS").and_then(|n| u32::try_from(n).ok());

        // Accept just setting the variable without a value as "true"
        if let Some(value) = lookup("SPIRE_INTERACTIVE") {
            config.interactive = value.trim().parse::<bool>().unwrap_or(value.trim() != "0");
        }

        config.session_id = read("SPIRE_SESSION_ID");
        config.log_dir = read("SPIRE_LOG_DIR").map(PathBuf::from);
        config.dump_state = read("SPIRE_DUMP_STATE").map(PathBuf::from);

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.tick, Duration::from_millis(1000));
        assert!(!config.interactive);
        assert!(config.dump_state.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("SPIRE_SEED", "42"),
            ("SPIRE_TICK_MS", "250"),
            ("SPIRE_MAX_FLOORS", "5"),
            ("SPIRE_INTERACTIVE", "true"),
            ("SPIRE_SESSION_ID", "run-1"),
            ("SPIRE_LOG_DIR", "/tmp/spire"),
            ("SPIRE_DUMP_STATE", "state.json"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick, Duration::from_millis(250));
        assert_eq!(config.max_floors, Some(5));
        assert!(config.interactive);
        assert_eq!(config.session_id.as_deref(), Some("run-1"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/spire")));
        assert_eq!(config.dump_state, Some(PathBuf::from("state.json")));
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let config = config_from(&[("SPIRE_SEED", "abc"), ("SPIRE_TICK_MS", "-3")]);
        assert_eq!(config.seed, None);
        assert_eq!(config.tick, DEFAULT_CADENCE);
    }

    #[test]
    fn bare_interactive_flag_enables() {
        assert!(config_from(&[("SPIRE_INTERACTIVE", "")]).interactive);
        assert!(!config_from(&[("SPIRE_INTERACTIVE", "0")]).interactive);
        assert!(!config_from(&[("SPIRE_INTERACTIVE", "false")]).interactive);
    }
}
