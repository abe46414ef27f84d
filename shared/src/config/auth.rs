//! Authentication configuration: password policy and session lifetime

use serde::{Deserialize, Serialize};

use super::{clamp_setting, env_in_range, env_or};

/// bcrypt's own default work factor
pub const DEFAULT_HASH_COST: u32 = 12;

/// Lowest work factor bcrypt accepts; only suitable for tests
pub const MIN_HASH_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_HASH_COST: u32 = 31;

/// Shortest session token issued
pub const MIN_TOKEN_LENGTH: usize = 32;

/// Longest session token issued
pub const MAX_TOKEN_LENGTH: usize = 256;

/// Longest session lifetime accepted: ten years
pub const MAX_SESSION_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Rules applied to registration input and to stored password hashes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordPolicy {
    /// Minimum password length in characters
    pub min_password_length: usize,

    /// Maximum password length in bytes (bcrypt ignores anything past 72)
    #[serde(default = "default_max_password_length")]
    pub max_password_length: usize,

    /// Maximum display name length in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Maximum email length in characters
    #[serde(default = "default_max_email_length")]
    pub max_email_length: usize,

    /// bcrypt work factor
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            max_password_length: default_max_password_length(),
            max_name_length: default_max_name_length(),
            max_email_length: default_max_email_length(),
            hash_cost: default_hash_cost(),
        }
    }
}

impl PasswordPolicy {
    /// Policy with the cheapest hash cost, for tests
    pub fn for_tests() -> Self {
        Self {
            hash_cost: MIN_HASH_COST,
            ..Default::default()
        }
    }
}

/// Session token configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Length of issued tokens in characters
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Session lifetime in seconds; `None` keeps sessions until restart
    #[serde(default)]
    pub ttl_seconds: Option<i64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_length: default_token_length(),
            ttl_seconds: None,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Password policy
    #[serde(default)]
    pub password: PasswordPolicy,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = PasswordPolicy::default();
        let password = PasswordPolicy {
            min_password_length: env_or("PASSWORD_MIN_LENGTH", defaults.min_password_length),
            hash_cost: env_in_range(
                "PASSWORD_HASH_COST",
                defaults.hash_cost,
                MIN_HASH_COST,
                MAX_HASH_COST,
            ),
            ..defaults
        };

        Self {
            password,
            session: SessionConfig {
                token_length: env_in_range(
                    "SESSION_TOKEN_LENGTH",
                    default_token_length(),
                    MIN_TOKEN_LENGTH,
                    MAX_TOKEN_LENGTH,
                ),
                ttl_seconds: parse_ttl(std::env::var("SESSION_TTL_SECONDS").ok().as_deref()),
            },
        }
    }
}

/// Session lifetime from its raw setting
///
/// Unset, unparsable or non-positive values mean no expiry; anything past
/// [`MAX_SESSION_TTL_SECONDS`] is capped there.
fn parse_ttl(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    match raw.parse::<i64>() {
        Ok(ttl) if ttl > 0 => Some(clamp_setting(
            "SESSION_TTL_SECONDS",
            ttl,
            1,
            MAX_SESSION_TTL_SECONDS,
        )),
        _ => {
            tracing::warn!(value = %raw, "Ignoring SESSION_TTL_SECONDS; sessions will not expire");
            None
        }
    }
}

fn default_max_password_length() -> usize {
    72
}

fn default_max_name_length() -> usize {
    100
}

fn default_max_email_length() -> usize {
    254
}

fn default_hash_cost() -> u32 {
    DEFAULT_HASH_COST
}

fn default_token_length() -> usize {
    48
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_policy_default() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_password_length, 6);
        assert_eq!(policy.max_password_length, 72);
        assert_eq!(policy.hash_cost, DEFAULT_HASH_COST);
    }

    #[test]
    fn test_password_policy_for_tests() {
        let policy = PasswordPolicy::for_tests();
        assert_eq!(policy.hash_cost, MIN_HASH_COST);
        assert_eq!(policy.min_password_length, 6);
    }

    #[test]
    fn test_session_config_default_has_no_expiry() {
        let config = SessionConfig::default();
        assert_eq!(config.token_length, 48);
        assert!(config.ttl_seconds.is_none());
    }

    #[test]
    fn test_parse_ttl() {
        assert_eq!(parse_ttl(None), None);
        assert_eq!(parse_ttl(Some("3600")), Some(3600));
        assert_eq!(parse_ttl(Some(" 60 ")), Some(60));
        assert_eq!(parse_ttl(Some("0")), None);
        assert_eq!(parse_ttl(Some("-5")), None);
        assert_eq!(parse_ttl(Some("soon")), None);
    }

    #[test]
    fn test_parse_ttl_caps_huge_values() {
        assert_eq!(parse_ttl(Some("10000000000000")), Some(MAX_SESSION_TTL_SECONDS));
        assert_eq!(
            parse_ttl(Some(&i64::MAX.to_string())),
            Some(MAX_SESSION_TTL_SECONDS)
        );
        // past i64 does not parse at all
        assert_eq!(parse_ttl(Some("99999999999999999999")), None);
    }

    #[test]
    fn test_out_of_range_settings_are_clamped() {
        assert_eq!(clamp_setting("PASSWORD_HASH_COST", 99, MIN_HASH_COST, MAX_HASH_COST), 31);
        assert_eq!(clamp_setting("PASSWORD_HASH_COST", 0, MIN_HASH_COST, MAX_HASH_COST), 4);
        assert_eq!(
            clamp_setting("SESSION_TOKEN_LENGTH", 1_000_000, MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH),
            256
        );
    }

    #[test]
    fn test_auth_config_deserialize_with_defaults() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"session": {"ttl_seconds": 3600}}"#).unwrap();
        assert_eq!(config.session.ttl_seconds, Some(3600));
        assert_eq!(config.session.token_length, 48);
        assert_eq!(config.password, PasswordPolicy::default());
    }
}
