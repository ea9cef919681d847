//! Server configuration, read from the process environment.
//!
//! Three knobs, all optional:
//! - `DATABASE_URL` — MongoDB connection string
//! - `TASKBOARD_DB` — database name
//! - `TASKBOARD_ADDR` — bind address for the HTTP server

use std::env;
use std::net::SocketAddr;

use crate::error::{ApiError, Result};

pub const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017";
pub const DEFAULT_DATABASE_NAME: &str = "taskboard";
pub const DEFAULT_ADDR: &str = "127.0.0.1:4000";

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string.
    pub database_url: String,
    /// Name of the database holding the `projects` and `tasks` collections.
    pub database_name: String,
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let database_name =
            env::var("TASKBOARD_DB").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());
        let addr = env::var("TASKBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        Ok(Self {
            database_url,
            database_name,
            bind: parse_bind(&addr)?,
        })
    }
}

fn parse_bind(addr: &str) -> Result<SocketAddr> {
    addr.parse()
        .map_err(|_| ApiError::Config(format!("invalid bind address: {}", addr)))
}
