#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The price store could not be queried. Callers must not confuse this
    /// with an empty result set.
    #[error("Price data unavailable: {0}")]
    DataUnavailable(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
