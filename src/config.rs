use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.hh.ru";
const DEFAULT_OAUTH_URL: &str = "https://hh.ru/oauth/token";
const DEFAULT_USER_AGENT: &str = "hh-applicant-gateway/0.1 (automation@localhost)";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub hh_api_url: String,
    pub hh_oauth_url: String,
    pub hh_client_id: Option<String>,
    pub hh_client_secret: Option<String>,
    pub hh_user_agent: String,
    pub token_path: Option<PathBuf>,
    pub profile_path: PathBuf,
    pub http_timeout_secs: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "127.0.0.1:8080"),
            hh_api_url: get_env_url("HH_API_URL", DEFAULT_API_URL)?,
            hh_oauth_url: get_env_url("HH_OAUTH_URL", DEFAULT_OAUTH_URL)?,
            hh_client_id: get_env_opt("HH_CLIENT_ID"),
            hh_client_secret: get_env_opt("HH_CLIENT_SECRET"),
            hh_user_agent: get_env_or("HH_USER_AGENT", DEFAULT_USER_AGENT),
            token_path: get_env_opt("HH_TOKEN_PATH").map(PathBuf::from),
            profile_path: PathBuf::from(get_env_or("PROFILE_PATH", "profile.json")),
            http_timeout_secs: get_env_parse("HTTP_TIMEOUT_SECS", 30)?,
        })
    }
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

fn get_env_url(name: &str, default: &str) -> Result<String> {
    let raw = get_env_or(name, default);
    Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid URL in {}: {}", name, e)))?;
    Ok(raw.trim_end_matches('/').to_string())
}

fn get_env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
