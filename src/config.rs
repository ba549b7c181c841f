// ============================================================================
// APP CONFIG - Compile-time settings with sensible defaults
// ============================================================================
// Values come from `option_env!` (filled by build.rs from `.env`); anything
// missing or unparsable falls back to the defaults in `utils::constants`.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    BACKEND_URL, DEFAULT_ITEMS_PER_PAGE, SEARCH_DEBOUNCE_MS, TOAST_DURATION_MS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub items_per_page: usize,
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            toast_duration_ms: TOAST_DURATION_MS,
            log_level: "info".to_string(),
        }
    }
}

fn parsed<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: defaults.backend_url,
            items_per_page: parsed(option_env!("ITEMS_PER_PAGE"), defaults.items_per_page).max(1),
            search_debounce_ms: parsed(option_env!("SEARCH_DEBOUNCE_MS"), defaults.search_debounce_ms),
            toast_duration_ms: parsed(option_env!("TOAST_DURATION_MS"), defaults.toast_duration_ms),
            log_level: option_env!("LOG_LEVEL").unwrap_or(&defaults.log_level).to_string(),
        }
    }

    /// Level for `wasm_logger`; unknown names mean `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = AppConfig::default();
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"log_level":"debug","items_per_page":25}"#)
            .expect("config parses");
        assert_eq!(config.items_per_page, 25);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.toast_duration_ms, TOAST_DURATION_MS);
    }

    #[test]
    fn bad_values_fall_back() {
        assert_eq!(parsed(Some("abc"), 7usize), 7);
        assert_eq!(parsed(Some(" 12 "), 7usize), 12);
        assert_eq!(parsed::<u32>(None, 300), 300);

        let config = AppConfig { log_level: "loud".into(), ..AppConfig::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
