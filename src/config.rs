use anyhow::Context;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: tracing::Level,

    // Per peer IP, applied to POST/PUT/DELETE. 0 disables the limiter.
    pub rate_mutations_per_min: u32,

    /// Max accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            data_file: PathBuf::from("data.json"),
            static_dir: PathBuf::from("public"),
            log_dir: PathBuf::from("logs"),
            log_level: tracing::Level::INFO,
            rate_mutations_per_min: 600,
            json_limit: 64 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or(defaults.server_addr),
            data_file: lookup("DATA_FILE").map_or(defaults.data_file, PathBuf::from),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            log_dir: lookup("LOG_DIR").map_or(defaults.log_dir, PathBuf::from),
            log_level: parse_or("LOG_LEVEL", lookup("LOG_LEVEL"), defaults.log_level)?,
            rate_mutations_per_min: parse_or(
                "RATE_MUTATIONS_PER_MIN",
                lookup("RATE_MUTATIONS_PER_MIN"),
                defaults.rate_mutations_per_min,
            )?,
            json_limit: parse_or("JSON_LIMIT", lookup("JSON_LIMIT"), defaults.json_limit)?,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has invalid value {value:?}")),
    }
}
