use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    pub seed_file: Option<PathBuf>,
    pub pretty_output: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_vars("QUIZZY")
    }

    /// Reads `{prefix}_LOG_FORMAT`, `{prefix}_SEED_FILE` and
    /// `{prefix}_PRETTY_OUTPUT`. A blank seed file counts as unset.
    fn from_vars(prefix: &str) -> Result<Self> {
        Ok(Self {
            log_format: get_env_parse_or(&format!("{}_LOG_FORMAT", prefix), LogFormat::Pretty)?,
            seed_file: env::var(format!("{}_SEED_FILE", prefix))
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            pretty_output: get_env_parse_or(&format!("{}_PRETTY_OUTPUT", prefix), true)?,
        })
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(Error::Config(format!(
            "Environment variable {} is not valid unicode",
            name
        ))),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
