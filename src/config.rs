// src/config.rs

use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that receives one JSON file per submitted survey.
    pub data_dir: PathBuf,
    pub bind_addr: String,
    pub log_dir: PathBuf,
    pub rust_log: String,
    /// Sessions untouched for this many minutes are dropped.
    pub session_idle_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("survey_data"),
            bind_addr: "0.0.0.0:3000".to_string(),
            log_dir: PathBuf::from("logs"),
            rust_log: "info".to_string(),
            session_idle_minutes: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let data_dir = env::var("SURVEY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let bind_addr = env::var("SURVEY_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let log_dir = env::var("SURVEY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let session_idle_minutes = env::var("SURVEY_SESSION_IDLE_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.session_idle_minutes);

        Self {
            data_dir,
            bind_addr,
            log_dir,
            rust_log,
            session_idle_minutes,
        }
    }
}
