use std::net::SocketAddr;

use anyhow::Context;
use cookie::Key;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://wmdb.db?mode=rwc".to_string());

        let secret_key = std::env::var("SECRET_KEY").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            secret_key,
        })
    }

    /// Builds the flash cookie signing key. Called once at start-up.
    pub fn cookie_key(&self) -> anyhow::Result<Key> {
        match &self.secret_key {
            Some(secret) => Key::try_from(secret.as_bytes())
                .map_err(|_| anyhow::anyhow!("SECRET_KEY must be at least 64 bytes")),
            None => {
                tracing::warn!("no SECRET_KEY provided, generating a per-process key");
                Ok(Key::generate())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret_key: Option<&str>) -> Config {
        Config {
            addr: "127.0.0.1:3000".parse().unwrap(),
            database_url: "sqlite::memory:".to_string(),
            secret_key: secret_key.map(str::to_string),
        }
    }

    #[test]
    fn short_secret_is_rejected() {
        assert!(config(Some("too short")).cookie_key().is_err());
    }

    #[test]
    fn long_secret_is_stable() {
        let secret = "k".repeat(64);
        let a = config(Some(&secret)).cookie_key().unwrap();
        let b = config(Some(&secret)).cookie_key().unwrap();
        assert_eq!(a.master(), b.master());
    }

    #[test]
    fn missing_secret_generates_key() {
        assert!(config(None).cookie_key().is_ok());
    }
}
