pub mod queries;
pub mod seed;

use anyhow::{Context, Result};
use neighborly_types::models::Exchange;
use std::path::Path;
use tracing::info;

/// Read-only exchange list, loaded once at startup and shared by all handlers.
pub struct ExchangeStore {
    exchanges: Vec<Exchange>,
}

impl ExchangeStore {
    pub fn new(exchanges: Vec<Exchange>) -> Self {
        Self { exchanges }
    }

    /// Store holding the built-in demo exchanges.
    pub fn demo() -> Self {
        let store = Self::new(seed::demo_exchanges());
        info!("Exchange store seeded with {} demo exchanges", store.len());
        store
    }

    /// Load exchanges from a JSON file containing an array of exchanges.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let exchanges: Vec<Exchange> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed file {}", path.display()))?;

        info!("Exchange store loaded {} exchanges from {}", exchanges.len(), path.display());
        Ok(Self::new(exchanges))
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_reads_json_seed() {
        let path = std::env::temp_dir().join(format!("neighborly-seed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id":7,"userId":3,"type":"need","skill":"Moving","description":"Sofa","location":"Elm St","points":40}]"#,
        )
        .unwrap();

        let store = ExchangeStore::open(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].skill, "Moving");
    }

    #[test]
    fn open_rejects_malformed_seed() {
        let path = std::env::temp_dir().join(format!("neighborly-bad-seed-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        let result = ExchangeStore::open(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn open_missing_file_fails() {
        assert!(ExchangeStore::open(Path::new("/definitely/not/here.json")).is_err());
    }
}
