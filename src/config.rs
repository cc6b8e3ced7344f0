// src/config.rs
use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{Context, Result};

pub const DEFAULT_ASK_ENDPOINT: &str = "http://localhost:8000/ask";

/// Runtime configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub ask_endpoint: String,
    pub ask_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub seed_greeting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ask_endpoint: DEFAULT_ASK_ENDPOINT.to_string(),
            ask_timeout: Duration::from_secs(30),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from("public"),
            seed_greeting: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let ask_timeout = match lookup("ASK_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .context("ASK_TIMEOUT_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    anyhow::bail!("ASK_TIMEOUT_SECS must be at least 1 second");
                }
                Duration::from_secs(secs)
            }
            None => defaults.ask_timeout,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .with_context(|| format!("BIND_ADDR '{raw}' is not a valid socket address"))?,
            None => defaults.bind_addr,
        };

        let seed_greeting = match lookup("CHAT_SEED_GREETING") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("CHAT_SEED_GREETING '{raw}' must be true or false"))?,
            None => defaults.seed_greeting,
        };

        Ok(Config {
            ask_endpoint: lookup("ASK_ENDPOINT").unwrap_or(defaults.ask_endpoint),
            ask_timeout,
            bind_addr,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_greeting,
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised boolean '{other}'"),
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
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.ask_endpoint, DEFAULT_ASK_ENDPOINT);
        assert_eq!(config.ask_timeout, Duration::from_secs(30));
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.seed_greeting);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("ASK_ENDPOINT", "http://inference:9000/ask"),
            ("ASK_TIMEOUT_SECS", "5"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("CHAT_SEED_GREETING", "false"),
        ]))
        .unwrap();
        assert_eq!(config.ask_endpoint, "http://inference:9000/ask");
        assert_eq!(config.ask_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert!(!config.seed_greeting);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("ASK_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("ASK_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("CHAT_SEED_GREETING", "maybe")])).is_err());
    }
}
