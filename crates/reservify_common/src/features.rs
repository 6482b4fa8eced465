//! Feature flag handling.
//!
//! ## Available Features
//!
//! - `gcal`: Enables Google Calendar integration
//!
//! Compile-time features decide what is built; the runtime flags in
//! [`AppConfig`] decide what is used. A feature is active at runtime only when
//! its `use_*` flag is set AND its configuration section is present.

use reservify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the Google Calendar feature is enabled at runtime.
#[cfg(feature = "gcal")]
pub fn is_gcal_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_gcal, config.gcal.as_ref())
}
