use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use tracing::info;

use crate::error::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ORIGINS: [&str; 2] = ["http://127.0.0.1:8080", "http://127.0.0.1:3000"];
const STATIC_DIR_CANDIDATES: [&str; 3] = ["static", "backend/static", "../backend/static"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub prize: Option<String>,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let bind_raw = get("WOF_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| Error::InvalidBindAddr(bind_raw.clone()))?;

        // An empty prize is served as null so winners get the support message
        let prize = get("WOF_PRIZE")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let static_dir = match get("WOF_STATIC_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => find_static_dir(),
        };

        let allowed_origins = match get("WOF_ALLOWED_ORIGINS") {
            Some(list) => parse_origins(&list)?,
            None => parse_origins(&DEFAULT_ORIGINS.join(","))?,
        };

        Ok(Self {
            bind_addr,
            prize,
            static_dir,
            allowed_origins,
        })
    }
}

fn parse_origins(list: &str) -> Result<Vec<HeaderValue>, Error> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::InvalidOrigin(origin.to_string()))
        })
        .collect()
}

fn find_static_dir() -> PathBuf {
    for candidate in STATIC_DIR_CANDIDATES {
        if Path::new(candidate).exists() {
            info!("Serving widget files from {}", candidate);
            return PathBuf::from(candidate);
        }
    }
    // Default to static even if it doesn't exist
    PathBuf::from(STATIC_DIR_CANDIDATES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, Error> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("WOF_STATIC_DIR", "dist")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.prize, None);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_prize_and_origins() {
        let config = config_from(&[
            ("WOF_PRIZE", " 10% off "),
            ("WOF_ALLOWED_ORIGINS", "https://shop.example.com, ,http://localhost:8080"),
            ("WOF_BIND_ADDR", "0.0.0.0:8000"),
        ])
        .unwrap();
        assert_eq!(config.prize.as_deref(), Some("10% off"));
        assert_eq!(config.allowed_origins, vec![
            HeaderValue::from_static("https://shop.example.com"),
            HeaderValue::from_static("http://localhost:8080"),
        ]);
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn test_blank_prize_is_none() {
        let config = config_from(&[("WOF_PRIZE", "   ")]).unwrap();
        assert_eq!(config.prize, None);
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = config_from(&[("WOF_BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, Error::InvalidBindAddr(_)));
    }

    #[test]
    fn test_bad_origin() {
        let err = config_from(&[("WOF_ALLOWED_ORIGINS", "http://ok.example, bad\norigin")]).unwrap_err();
        assert!(matches!(err, Error::InvalidOrigin(_)));
    }
}
