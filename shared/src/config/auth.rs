//! Authentication configuration: password hashing and session cookies

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Lowest bcrypt cost accepted by the bcrypt crate
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest bcrypt cost accepted by the bcrypt crate
pub const MAX_BCRYPT_COST: u32 = 31;

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token
    pub cookie_name: String,

    /// Maximum session age in seconds; `None` keeps sessions until logout
    pub max_age_seconds: Option<i64>,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie HttpOnly flag
    pub http_only: bool,

    /// Session cookie SameSite attribute (`Strict`, `Lax` or `None`)
    pub same_site: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("sl_session"),
            max_age_seconds: Some(86_400),
            secure: false,
            http_only: true,
            same_site: String::from("Lax"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub password: PasswordConfig,
    pub session: SessionConfig,
}

impl AuthConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let cost = self.password.bcrypt_cost;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(ConfigError::Invalid {
                key: "auth.password.bcrypt_cost",
                reason: format!(
                    "must be between {} and {}, got {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST, cost
                ),
            });
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "auth.session.cookie_name",
                reason: String::from("must not be empty"),
            });
        }

        if let Some(max_age) = self.session.max_age_seconds {
            if max_age <= 0 {
                return Err(ConfigError::Invalid {
                    key: "auth.session.max_age_seconds",
                    reason: format!("must be positive, got {}", max_age),
                });
            }
        }

        match self.session.same_site.to_ascii_lowercase().as_str() {
            "strict" | "lax" | "none" => Ok(()),
            other => Err(ConfigError::Invalid {
                key: "auth.session.same_site",
                reason: format!("unknown SameSite policy: {}", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "sl_session");
        assert_eq!(config.max_age_seconds, Some(86_400));
        assert!(config.http_only);
        assert!(!config.secure);
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        let mut config = AuthConfig::default();
        config.password.bcrypt_cost = 3;
        assert!(config.validate().is_err());

        config.password.bcrypt_cost = MIN_BCRYPT_COST;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_max_age() {
        let mut config = AuthConfig::default();
        config.session.max_age_seconds = Some(0);
        assert!(config.validate().is_err());

        config.session.max_age_seconds = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_same_site() {
        let mut config = AuthConfig::default();
        config.session.same_site = String::from("sometimes");
        assert!(config.validate().is_err());
    }
}
