use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory holding company logo assets.
    pub asset_dir: String,
    /// Directory holding the TTF font family used by the PDF composer.
    pub font_dir: String,
    pub font_family: String,
    /// Caller-enforced upload ceiling. Default 10 MiB.
    pub max_upload_bytes: usize,
    /// Sessions older than this are evicted by the background sweep.
    pub session_ttl_minutes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            asset_dir: std::env::var("ASSET_DIR").unwrap_or_else(|_| "assets".to_string()),
            font_dir: std::env::var("FONT_DIR").unwrap_or_else(|_| "assets/fonts".to_string()),
            font_family: std::env::var("FONT_FAMILY")
                .unwrap_or_else(|_| "LiberationSans".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a number")?,
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("SESSION_TTL_MINUTES must be a number")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
