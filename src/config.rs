use crate::error::{DashboardError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8051;

/// Runtime configuration, read from the environment at startup.
///
/// `DATABASE_URL` is required so credentials never live in source. `HOST`
/// and `PORT` fall back to defaults suitable for local use.
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| DashboardError::Config("DATABASE_URL is not set".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| DashboardError::Config(format!("PORT is not a number: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(AppConfig {
            database_url,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_url_is_a_config_error() {
        std::env::remove_var("DATABASE_URL");
        let result = AppConfig::from_env();
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }
}
