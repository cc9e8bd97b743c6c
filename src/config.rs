// Runtime configuration: where the controller lives and which local file
// is synchronised. Everything comes from environment variables with
// sensible defaults so the binaries can run without arguments.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the controller base URL.
pub const HOST_ENV: &str = "ESP_HOST";
/// Environment variable holding the local file path.
pub const FILE_ENV: &str = "SENSORES_FILE";

/// mDNS name announced by the controller. A direct IP such as
/// `http://192.168.1.100` works too.
pub const DEFAULT_HOST: &str = "http://alarme.local";
pub const DEFAULT_FILE: &str = "sensores.json";

/// Download gives up after this long. Upload waits indefinitely.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without trailing slash.
    pub host: String,
    pub file: PathBuf,
    pub download_timeout: Duration,
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config using `lookup` to resolve variables. Unset or blank
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_blank(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.into());
        let file = non_blank(FILE_ENV).unwrap_or_else(|| DEFAULT_FILE.into());

        Config {
            host: host.trim().trim_end_matches('/').to_string(),
            file: PathBuf::from(file),
            download_timeout: DOWNLOAD_TIMEOUT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
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
    fn defaults_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.host, "http://alarme.local");
        assert_eq!(config.file, PathBuf::from("sensores.json"));
        assert_eq!(config.download_timeout, Duration::from_secs(5));
    }

    #[test]
    fn overrides_host_and_file() {
        let config = Config::from_lookup(lookup_from(&[
            (HOST_ENV, "http://192.168.1.100/"),
            (FILE_ENV, "/tmp/backup/sensores.json"),
        ]));
        assert_eq!(config.host, "http://192.168.1.100");
        assert_eq!(config.file, PathBuf::from("/tmp/backup/sensores.json"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[(HOST_ENV, "  "), (FILE_ENV, "")]));
        assert_eq!(config, Config::default());
    }
}
