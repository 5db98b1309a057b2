use std::{env, path::PathBuf};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value {raw:?}"))?,
            Err(_) => 3000,
        };
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "docs".to_string());
        Ok(Self {
            host,
            port,
            data_dir: data_dir.into(),
            static_dir: static_dir.into(),
        })
    }
}
