use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_address: SocketAddr,

    /// Path to the RocksDB database
    pub database_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "./data/taskdeck.db".to_string())
            .into();

        Ok(Config {
            bind_address,
            database_path,
        })
    }
}
