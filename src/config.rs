use crate::error::ConfigError;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3146";

/// Runtime settings, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub tmdb_api_base: String,
    pub image_base: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tmdb_api_key = non_empty("TMDB_API_KEY").ok_or(ConfigError::Missing("TMDB_API_KEY"))?;
        let tmdb_api_base =
            non_empty("TMDB_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let image_base =
            non_empty("TMDB_IMAGE_BASE").unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string());
        let bind_raw = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: format!("'{}': {}", bind_raw, e),
            })?;

        Ok(Self {
            tmdb_api_key,
            tmdb_api_base: tmdb_api_base.trim_end_matches('/').to_string(),
            image_base,
            bind_addr,
        })
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
    fn applies_defaults_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("TMDB_API_KEY", "secret")])).unwrap();
        assert_eq!(config.tmdb_api_key, "secret");
        assert_eq!(config.tmdb_api_base, DEFAULT_API_BASE);
        assert_eq!(config.image_base, DEFAULT_IMAGE_BASE);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn rejects_missing_or_blank_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TMDB_API_KEY")));

        let err = Config::from_lookup(lookup_from(&[("TMDB_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TMDB_API_KEY")));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = Config::from_lookup(lookup_from(&[
            ("TMDB_API_KEY", "secret"),
            ("BIND_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }

    #[test]
    fn strips_trailing_slash_from_api_base() {
        let config = Config::from_lookup(lookup_from(&[
            ("TMDB_API_KEY", "secret"),
            ("TMDB_API_BASE", "http://127.0.0.1:9000/3/"),
        ]))
        .unwrap();
        assert_eq!(config.tmdb_api_base, "http://127.0.0.1:9000/3");
    }
}
