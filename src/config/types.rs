// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_SUGGEST_ENDPOINT: &str = "http://127.0.0.1:5000/suggest";
pub const DEFAULT_DEFINE_ENDPOINT: &str = "http://127.0.0.1:5000/define";
pub const DEFAULT_RESULTS_LIMIT: usize = 9;
/// Upper bound on suggestions requested per query
pub const MAX_RESULTS_LIMIT: usize = 100;
pub const DEFAULT_NOT_FOUND_MS: u64 = 5000;

/// Suggestion service configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_suggest_endpoint")]
    pub endpoint: String,
    /// Maximum number of suggestions shown below the raw query
    #[serde(default = "default_results_limit")]
    pub results_limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            endpoint: default_suggest_endpoint(),
            results_limit: DEFAULT_RESULTS_LIMIT,
        }
    }
}

/// Definition service configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_define_endpoint")]
    pub endpoint: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            endpoint: default_define_endpoint(),
        }
    }
}

/// Notification configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// How long the "no definition found" message stays on screen
    #[serde(default = "default_not_found_ms")]
    pub not_found_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            not_found_ms: DEFAULT_NOT_FOUND_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

fn default_suggest_endpoint() -> String {
    DEFAULT_SUGGEST_ENDPOINT.to_string()
}

fn default_define_endpoint() -> String {
    DEFAULT_DEFINE_ENDPOINT.to_string()
}

fn default_results_limit() -> usize {
    DEFAULT_RESULTS_LIMIT
}

fn default_not_found_ms() -> u64 {
    DEFAULT_NOT_FOUND_MS
}
