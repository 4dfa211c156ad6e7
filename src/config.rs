//! Runtime knobs, loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LOAD_DELAY_MS: u64 = 800;
const DEFAULT_MUTATE_DELAY_MS: u64 = 500;
const DEFAULT_REORDER_DELAY_MS: u64 = 0;
const DEFAULT_DATA_DIR: &str = "menuboard-data";

/// Parse an environment variable, falling back to `default` when unset or
/// unparseable.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Simulated latency applied by the menu data service.
///
/// The delays emulate a network-backed API so the consuming UI can be
/// exercised against realistic loading states. Reorder is zero by default:
/// drag-and-drop must feel instantaneous, while add/update/delete simulate
/// a slower round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayConfig {
    /// Applied once while the service loads its collections.
    pub load: Duration,
    /// Applied before each add/update/delete.
    pub mutate: Duration,
    /// Applied before each bulk reorder.
    pub reorder: Duration,
}

impl DelayConfig {
    /// Defaults with `MENUBOARD_*_DELAY_MS` overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            load: Duration::from_millis(env_parse("MENUBOARD_LOAD_DELAY_MS", DEFAULT_LOAD_DELAY_MS)),
            mutate: Duration::from_millis(env_parse(
                "MENUBOARD_MUTATE_DELAY_MS",
                DEFAULT_MUTATE_DELAY_MS,
            )),
            reorder: Duration::from_millis(env_parse(
                "MENUBOARD_REORDER_DELAY_MS",
                DEFAULT_REORDER_DELAY_MS,
            )),
        }
    }

    /// All delays disabled. Tests use this.
    #[must_use]
    pub fn zero() -> Self {
        Self { load: Duration::ZERO, mutate: Duration::ZERO, reorder: Duration::ZERO }
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            load: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            mutate: Duration::from_millis(DEFAULT_MUTATE_DELAY_MS),
            reorder: Duration::from_millis(DEFAULT_REORDER_DELAY_MS),
        }
    }
}

/// Data directory for the file-backed store (`MENUBOARD_DATA_DIR`).
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var("MENUBOARD_DATA_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
