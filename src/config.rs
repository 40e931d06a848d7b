use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CATALOG: &str = "data/elements.json";
/// Where the page imports three.js from. Point `ATOMS_THREE_URL` at a local copy to run offline.
pub const DEFAULT_THREE_URL: &str = "https://unpkg.com/three@0.160.0/build/three.module.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub three_url: String,
}

impl Config {
    /// `ATOMS_ADDR`, `ATOMS_CATALOG` and `ATOMS_THREE_URL`, with the first CLI argument
    /// overriding the catalog path.
    pub fn from_env() -> Result<Config, ConfigError> {
        let mut config = Config::from_parts(
            std::env::var("ATOMS_ADDR").ok().as_deref(),
            std::env::var("ATOMS_CATALOG").ok().as_deref(),
            std::env::args().nth(1).as_deref(),
        )?;
        if let Ok(url) = std::env::var("ATOMS_THREE_URL") {
            config = config.with_three_url(&url)?;
        }
        Ok(config)
    }

    pub fn with_three_url(mut self, url: &str) -> Result<Config, ConfigError> {
        let url = url.trim();
        if url.is_empty() || url.contains(['"', '<', '>']) {
            return Err(ConfigError::InvalidThreeUrl(url.to_string()));
        }
        self.three_url = url.to_string();
        Ok(self)
    }

    pub fn from_parts(
        addr: Option<&str>,
        catalog: Option<&str>,
        arg: Option<&str>,
    ) -> Result<Config, ConfigError> {
        let addr = addr.unwrap_or(DEFAULT_ADDR).trim();
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr.to_string()))?;

        let catalog_path = arg
            .or(catalog)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

        Ok(Config {
            addr,
            catalog_path,
            three_url: DEFAULT_THREE_URL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_parts(None, None, None).unwrap();
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.catalog_path, PathBuf::from("data/elements.json"));
    }

    #[test]
    fn env_values() {
        let config = Config::from_parts(Some("0.0.0.0:8080"), Some("/tmp/el.json"), None).unwrap();
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/el.json"));
    }

    #[test]
    fn argument_overrides_env() {
        let config = Config::from_parts(None, Some("/tmp/el.json"), Some("other.json")).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("other.json"));
    }

    #[test]
    fn three_url_override() {
        let config = Config::from_parts(None, None, None).unwrap();
        assert_eq!(config.three_url, DEFAULT_THREE_URL);

        let config = config.with_three_url(" /static/three.module.js ").unwrap();
        assert_eq!(config.three_url, "/static/three.module.js");

        assert_eq!(
            config.clone().with_three_url("\"><script>"),
            Err(ConfigError::InvalidThreeUrl("\"><script>".to_string()))
        );
        assert!(config.with_three_url("  ").is_err());
    }

    #[test]
    fn invalid_addr() {
        assert_eq!(
            Config::from_parts(Some("localhost"), None, None),
            Err(ConfigError::InvalidAddr("localhost".to_string()))
        );
    }
}
