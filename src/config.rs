use std::env;
use std::time::Duration;

const DEFAULT_CATALOG_BASE_URL: &str = "https://api.rawg.io/api";

pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub catalog_base_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_key: env::var("RAWG_API_KEY").expect("RAWG_API_KEY must be set"),
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string()),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
