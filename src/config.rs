use std::str::FromStr;

/// Runtime configuration, read once at startup from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub session_key: Option<String>,
    pub admin_email: String,
    pub admin_password: String,
    pub app_name: String,
    pub max_body_bytes: usize,
    pub draft_ttl_hours: i64,
    pub cookie_secure: bool,
}

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            database_url: "sqlite://data/church.db".to_string(),
            session_key: None,
            admin_email: "admin@assembly.local".to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            app_name: "Abensu Assembly".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
            draft_ttl_hours: 72,
            cookie_secure: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            bind_addr: text("BIND_ADDR", defaults.bind_addr),
            database_url: text("DATABASE_URL", defaults.database_url),
            session_key: lookup("SESSION_KEY").filter(|v| !v.is_empty()),
            admin_email: text("ADMIN_EMAIL", defaults.admin_email),
            admin_password: lookup("ADMIN_PASSWORD")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.admin_password),
            app_name: text("APP_NAME", defaults.app_name),
            max_body_bytes: parsed(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes),
            draft_ttl_hours: parsed(&lookup, "DRAFT_TTL_HOURS", defaults.draft_ttl_hours),
            cookie_secure: parsed(&lookup, "COOKIE_SECURE", defaults.cookie_secure),
        }
    }
}

fn parsed<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("Invalid {key}={raw:?}, using default {default}");
                default
            }
        },
        _ => default,
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
    fn empty_environment_gives_defaults() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.max_body_bytes, 10 * 1024 * 1024);
        assert_eq!(cfg.admin_password, DEFAULT_ADMIN_PASSWORD);
        assert!(cfg.session_key.is_none());
        assert!(!cfg.cookie_secure);
    }

    #[test]
    fn values_override_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("ADMIN_EMAIL", "office@church.org"),
            ("DRAFT_TTL_HOURS", "12"),
            ("COOKIE_SECURE", "true"),
        ]));
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.admin_email, "office@church.org");
        assert_eq!(cfg.draft_ttl_hours, 12);
        assert!(cfg.cookie_secure);
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("MAX_BODY_BYTES", "lots")]));
        assert_eq!(cfg.max_body_bytes, 10 * 1024 * 1024);
    }
}
