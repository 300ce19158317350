use std::env;

pub const DEFAULT_BACKEND_URL: &str = "https://your-python-api.vercel.app";

/// Where the backend base URL is taken from.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendUrl {
    /// `BACKEND_URL` is looked up on every request.
    FromEnv,
    Fixed(String),
}

impl BackendUrl {
    pub fn resolve(&self) -> String {
        match self {
            BackendUrl::FromEnv => backend_url_or_default(env::var("BACKEND_URL").ok()),
            BackendUrl::Fixed(url) => url.clone(),
        }
    }
}

pub fn backend_url_or_default(value: Option<String>) -> String {
    match value {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

pub struct Config {
    pub environment: String,
    pub backend_url: BackendUrl,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            backend_url: BackendUrl::FromEnv,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Serialises tests that mutate `BACKEND_URL`.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
