use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{Result, SummarizeError};

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Unset means requests wait as long as the API takes.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. An absent API key is left
    /// empty and only fails once the API rejects it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY").unwrap_or_default();
        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let gemini_base_url = lookup("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = lookup("GEMINI_TIMEOUT_SECS")
            .map(|secs| parse_timeout(&secs))
            .transpose()?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| SummarizeError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| SummarizeError::Config(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            request_timeout,
        })
    }
}

fn parse_timeout(secs: &str) -> Result<Duration> {
    match secs.trim().parse::<u64>() {
        Ok(0) => Err(SummarizeError::Config("Invalid timeout: must be at least 1 second".to_string())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(SummarizeError::Config(format!("Invalid timeout: {}", e))),
    }
}
