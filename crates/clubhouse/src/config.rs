//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::ClubhouseError;

/// The production API.
pub const DEFAULT_API_URL: &str = "https://club-server-25gd.onrender.com";

/// Overrides [`ClientConfig::api_url`].
pub const API_URL_ENV: &str = "CLUBHOUSE_API_URL";
/// Overrides [`ClientConfig::session_file`]. An empty value keeps the
/// session in memory only.
pub const SESSION_FILE_ENV: &str = "CLUBHOUSE_SESSION_FILE";
/// Overrides [`ClientConfig::timeout`], in whole seconds. `0` disables it.
pub const TIMEOUT_ENV: &str = "CLUBHOUSE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a [`ClubClient`](crate::ClubClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the club API, without a trailing slash.
    pub api_url: String,

    /// Where the session is persisted. `None` keeps it in memory, so it
    /// is gone when the process exits.
    pub session_file: Option<PathBuf>,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_file(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by whichever `CLUBHOUSE_*` variables are set.
    ///
    /// # Errors
    /// Returns [`ClubhouseError::Config`] if `CLUBHOUSE_TIMEOUT_SECS` is
    /// not a whole number or `CLUBHOUSE_API_URL` is empty.
    pub fn from_env() -> Result<Self, ClubhouseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClubhouseError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ClubhouseError::Config(format!("{API_URL_ENV} is empty")));
            }
            config.api_url = url.to_string();
        }

        if let Some(path) = lookup(SESSION_FILE_ENV) {
            config.session_file = match path.trim() {
                "" => None,
                path => Some(PathBuf::from(path)),
            };
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClubhouseError::Config(format!("{TIMEOUT_ENV} must be a whole number, got `{raw}`"))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Sets the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Persists the session at `path`.
    pub fn session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Keeps the session in memory only.
    pub fn in_memory(mut self) -> Self {
        self.session_file = None;
        self
    }

    /// Sets the per-request timeout. `None` disables it.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `<data dir>/clubhouse/session.json`, if the platform has a data dir.
pub fn default_session_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("clubhouse").join("session.json"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://club-server-25gd.onrender.com");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_lookup_no_vars_is_default() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides_every_field() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "http://localhost:5000"),
            (SESSION_FILE_ENV, "/tmp/club/session.json"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(
            config.session_file,
            Some(PathBuf::from("/tmp/club/session.json"))
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_lookup_empty_session_file_means_in_memory() {
        let config = ClientConfig::from_lookup(lookup(&[(SESSION_FILE_ENV, "")])).unwrap();
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_from_lookup_zero_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")])).unwrap();
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_from_lookup_bad_timeout_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ClubhouseError::Config(ref m) if m.contains("soon")));
    }

    #[test]
    fn test_from_lookup_empty_url_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[(API_URL_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, ClubhouseError::Config(_)));
    }

    #[test]
    fn test_setters_chain() {
        let config = ClientConfig::default()
            .api_url("http://127.0.0.1:1")
            .in_memory()
            .timeout(None);
        assert_eq!(config.api_url, "http://127.0.0.1:1");
        assert!(config.session_file.is_none());
        assert!(config.timeout.is_none());
    }
}
