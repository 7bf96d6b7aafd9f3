//! Server configuration from command-line flags and environment.
//!
//! Precedence: `--bind` / `--catalog` flags, then `CATALOG_BIND` /
//! `CATALOG_PATH`, then the built-in defaults. A bare positional argument is
//! read as the catalog path.

use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_CATALOG: &str = "product_texts.json";
pub const BIND_ENV: &str = "CATALOG_BIND";
pub const CATALOG_ENV: &str = "CATALOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub catalog_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name.
    pub fn parse(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut bind: Option<String> = None;
        let mut catalog: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--catalog" => {
                    catalog = Some(flag_value(args, i)?);
                    i += 2;
                }
                other if !other.starts_with("--") && catalog.is_none() => {
                    catalog = Some(other.to_string());
                    i += 1;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env(BIND_ENV))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address {:?}", bind))?;

        let catalog_path = catalog
            .or_else(|| env(CATALOG_ENV))
            .unwrap_or_else(|| DEFAULT_CATALOG.to_string())
            .into();

        Ok(Self { bind, catalog_path })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::parse(&[], no_env).unwrap();

        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("product_texts.json"));
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::parse(
            &args(&["--bind", "127.0.0.1:9000", "--catalog", "data/products.json"]),
            no_env,
        )
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("data/products.json"));
    }

    #[test]
    fn test_positional_catalog_path() {
        let config = ServerConfig::parse(&args(&["catalog.json"]), no_env).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
    }

    #[test]
    fn test_env_fallback() {
        let env = |key: &str| match key {
            BIND_ENV => Some("127.0.0.1:7000".to_string()),
            CATALOG_ENV => Some("/srv/catalog.json".to_string()),
            _ => None,
        };
        let config = ServerConfig::parse(&[], env).unwrap();

        assert_eq!(config.bind, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
    }

    #[test]
    fn test_flags_override_env() {
        let env = |_: &str| Some("127.0.0.1:7000".to_string());
        let config = ServerConfig::parse(&args(&["--bind", "127.0.0.1:9000"]), env).unwrap();

        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let config = ServerConfig::parse(&args(&["--verbose", "--bind", "127.0.0.1:1"]), no_env)
            .unwrap();
        assert_eq!(config.bind, "127.0.0.1:1".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_missing_flag_value() {
        assert!(ServerConfig::parse(&args(&["--bind"]), no_env).is_err());
    }

    #[test]
    fn test_invalid_bind_address() {
        assert!(ServerConfig::parse(&args(&["--bind", "not-an-address"]), no_env).is_err());
    }
}
