use std::time::Duration;

use anyhow::Context as _;
use catalog::CachePolicy;
use toml::{map::Map, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub cache: CachePolicy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub allow_origins: Vec<String>,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec!["http://localhost:3000".to_string()],
            port: 8000,
        }
    }
}

impl Config {
    pub fn load(config_name: &str) -> anyhow::Result<Self> {
        let config = util::load_config(config_name)?;
        Self::from_toml(&config)
    }

    /// Every section and key is optional; the cache is unbounded and never
    /// expires unless `[cache]` says otherwise.
    pub fn from_toml(config: &Map<String, Value>) -> anyhow::Result<Self> {
        let mut server = ServerConfig::default();
        if let Some(section) = config.get("server") {
            if let Some(origins) = section.get("allow_origins") {
                server.allow_origins = origins
                    .as_array()
                    .context("failed to parse server.allow_origins config")?
                    .iter()
                    .map(|origin| {
                        origin
                            .as_str()
                            .map(str::to_string)
                            .context("failed to parse server.allow_origins entry")
                    })
                    .collect::<anyhow::Result<_>>()?;
            }
            if let Some(port) = section.get("port") {
                let port = port
                    .as_integer()
                    .context("failed to parse server.port config")?;
                server.port = u16::try_from(port)
                    .context("server.port is out of range")?;
            }
        }

        let mut cache = CachePolicy::default();
        if let Some(section) = config.get("cache") {
            if let Some(ttl_secs) = section.get("ttl_secs") {
                let ttl_secs = ttl_secs
                    .as_integer()
                    .context("failed to parse cache.ttl_secs config")?;
                let ttl_secs = u64::try_from(ttl_secs)
                    .context("cache.ttl_secs must not be negative")?;
                cache.time_to_live = Some(Duration::from_secs(ttl_secs));
            }
            if let Some(max_capacity) = section.get("max_capacity") {
                let max_capacity = max_capacity
                    .as_integer()
                    .context("failed to parse cache.max_capacity config")?;
                cache.max_capacity = Some(
                    u64::try_from(max_capacity)
                        .context("cache.max_capacity must not be negative")?,
                );
            }
        }

        Ok(Config { server, cache })
    }
}
