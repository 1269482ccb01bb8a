use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_USERS: &str = "kirubha:12345,admin:admin123";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` serves the sample dataset.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub static_dir: PathBuf,
    /// Demo credentials, username -> password.
    pub users: HashMap<String, String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let users_raw = std::env::var("ELIX_USERS").unwrap_or_else(|_| DEFAULT_USERS.to_string());

        Ok(Config {
            dataset_path: env_or("DATASET_PATH", "DATASET.csv").into(),
            static_dir: env_or("STATIC_DIR", "static").into(),
            users: parse_users(&users_raw).context("ELIX_USERS is malformed")?,
            port: parse_port(&env_or("PORT", "8000"))?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))
}

/// Parses `user:password` pairs separated by commas.
pub fn parse_users(raw: &str) -> Result<HashMap<String, String>> {
    let mut users = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((user, password)) = pair.split_once(':') else {
            bail!("expected user:password, got '{pair}'");
        };
        let (user, password) = (user.trim(), password.trim());
        if user.is_empty() || password.is_empty() {
            bail!("empty user or password in '{pair}'");
        }
        users.insert(user.to_string(), password.to_string());
    }
    Ok(users)
}
