use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use neighborly_classifier::ClassifierConfig;
use neighborly_classifier::client::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

/// Server settings, read from the environment (after `.env` is loaded).
#[derive(Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub classifier: ClassifierConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("NEIGHBORLY_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = get("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("PORT must be a port number")?;
        let seed_path = get("NEIGHBORLY_SEED_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let timeout = match get("NEIGHBORLY_CLASSIFIER_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .context("NEIGHBORLY_CLASSIFIER_TIMEOUT_SECS must be a whole number")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        let classifier = ClassifierConfig {
            url: get("NEIGHBORLY_CLASSIFIER_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
            token: get("HF_TOKEN").filter(|t| !t.is_empty()),
            timeout,
        };

        Ok(Self {
            host,
            port,
            seed_path,
            classifier,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:3000");
        assert!(config.seed_path.is_none());
        assert!(config.classifier.token.is_none());
        assert_eq!(config.classifier.url, DEFAULT_API_URL);
        assert_eq!(config.classifier.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "8080"),
            ("NEIGHBORLY_HOST", "127.0.0.1"),
            ("HF_TOKEN", "hf_abc"),
            ("NEIGHBORLY_CLASSIFIER_TIMEOUT_SECS", "5"),
            ("NEIGHBORLY_SEED_PATH", "seed.json"),
        ])
        .unwrap();

        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.classifier.token.as_deref(), Some("hf_abc"));
        assert_eq!(config.classifier.timeout, Duration::from_secs(5));
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn empty_token_is_ignored() {
        let config = config(&[("HF_TOKEN", "")]).unwrap();
        assert!(config.classifier.token.is_none());
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("PORT", "not-a-port")]).is_err());
    }
}
