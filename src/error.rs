use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No price data available for symbol '{symbol}'")]
    NotFound { symbol: String },

    /// Zero previous close would divide by zero in the percent change.
    #[error("Previous close is zero for symbol '{symbol}'")]
    InvalidData { symbol: String },

    #[error("Failed to reach market data provider")]
    Upstream(#[from] anyhow::Error),
}
