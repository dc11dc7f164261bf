//! Configuration for the session service

use chrono::Duration;
use sl_shared::config::SessionConfig;

/// Configuration for the session service
#[derive(Debug, Clone, Default)]
pub struct SessionServiceConfig {
    /// Maximum session age; `None` keeps sessions until logout
    pub max_age: Option<Duration>,
}

impl SessionServiceConfig {
    /// Maximum session age in whole seconds
    pub fn max_age_seconds(&self) -> Option<i64> {
        self.max_age.map(|age| age.num_seconds())
    }
}

impl From<&SessionConfig> for SessionServiceConfig {
    fn from(config: &SessionConfig) -> Self {
        Self {
            max_age: config.max_age_seconds.map(Duration::seconds),
        }
    }
}
