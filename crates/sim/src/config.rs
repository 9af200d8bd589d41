//! Environment configuration for the simulator.
use std::env;
use std::path::PathBuf;

/// Settings read from the environment before CLI overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
    /// Per-match tick budget; a match still running after it is an error.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0,
            max_ticks: 100_000,
        }
    }
}

impl SimConfig {
    /// Construct simulator configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FIGHTER_DATA_DIR` - Content directory (default: `data`)
    /// - `FIGHTER_SEED` - Session seed (default: 0)
    /// - `FIGHTER_MAX_TICKS` - Tick budget per match (default: 100000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] over any key lookup. Unparsable values
    /// keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_var::<PathBuf>(&lookup, "FIGHTER_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(seed) = read_var::<u64>(&lookup, "FIGHTER_SEED") {
            config.seed = seed;
        }
        if let Some(max_ticks) = read_var::<u64>(&lookup, "FIGHTER_MAX_TICKS") {
            config.max_ticks = max_ticks.max(1);
        }

        config
    }

    /// Applies command-line values on top of the environment.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        seed: Option<u64>,
        max_ticks: Option<u64>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(max_ticks) = max_ticks {
            self.max_ticks = max_ticks.max(1);
        }
        self
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
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
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(SimConfig::from_lookup(lookup(&[])), SimConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = SimConfig::from_lookup(lookup(&[
            ("FIGHTER_DATA_DIR", "/srv/fighter"),
            ("FIGHTER_SEED", "42"),
            ("FIGHTER_MAX_TICKS", "500"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/srv/fighter"));
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_ticks, 500);
    }

    #[test]
    fn bad_values_keep_defaults_and_zero_ticks_clamp_to_one() {
        let config = SimConfig::from_lookup(lookup(&[
            ("FIGHTER_SEED", "forty-two"),
            ("FIGHTER_MAX_TICKS", "0"),
        ]));
        assert_eq!(config.seed, 0);
        assert_eq!(config.max_ticks, 1);
    }

    #[test]
    fn command_line_wins_over_environment() {
        let config = SimConfig::from_lookup(lookup(&[
            ("FIGHTER_DATA_DIR", "/srv/fighter"),
            ("FIGHTER_SEED", "42"),
            ("FIGHTER_MAX_TICKS", "500"),
        ]))
        .with_overrides(None, Some(7), Some(0));

        assert_eq!(config.data_dir, PathBuf::from("/srv/fighter"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_ticks, 1);
    }

    #[test]
    fn from_env_reads_the_process_environment() {
        // Only test in this crate touching the process environment.
        unsafe {
            env::set_var("FIGHTER_SEED", "9001");
        }
        let config = SimConfig::from_env();
        unsafe {
            env::remove_var("FIGHTER_SEED");
        }
        assert_eq!(config.seed, 9001);
    }
}
