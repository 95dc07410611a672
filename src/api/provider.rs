use anyhow::Result;
use async_trait::async_trait;

use crate::models::Bar;

/// Upstream market data source, injected into the normalizer so tests can
/// substitute a fake.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Up to `limit` most recent daily bars for `symbol`, oldest first.
    /// An unknown or delisted symbol yields an empty vector, not an error.
    async fn daily_bars(&self, symbol: &str, limit: usize) -> Result<Vec<Bar>>;
}
