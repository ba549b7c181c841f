use yew::prelude::*;

use crate::config::AppConfig;

/// Settings of the nearest provider; the compile-time ones outside it.
#[hook]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}
