use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::api::MarketDataProvider;
use crate::error::GatewayError;
use crate::gateway::format::format_volume;
use crate::models::Quote;

const BAR_COUNT: usize = 2;
const PRICE_DECIMALS: u32 = 4;

#[derive(Clone)]
pub struct QuoteNormalizer {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteNormalizer {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Latest close, previous close, observation time and volume for `symbol`.
    /// With a single bar the previous close falls back to the latest close.
    async fn fetch(
        &self,
        symbol: &str,
    ) -> Result<(Decimal, Decimal, DateTime<Utc>, u64), GatewayError> {
        let bars = self.provider.daily_bars(symbol, BAR_COUNT).await?;

        let last = bars.last().ok_or_else(|| GatewayError::NotFound {
            symbol: symbol.to_string(),
        })?;
        let prev_close = if bars.len() > 1 {
            *bars[bars.len() - 2].close()
        } else {
            *last.close()
        };

        if prev_close == Decimal::ZERO {
            return Err(GatewayError::InvalidData {
                symbol: symbol.to_string(),
            });
        }

        Ok((*last.close(), prev_close, *last.timestamp(), *last.volume()))
    }

    pub async fn build(&self, symbol: &str) -> Result<Quote, GatewayError> {
        let symbol = symbol.to_uppercase();
        let (last_price, prev_close, timestamp, volume) = self.fetch(&symbol).await?;

        let change_percent =
            ((last_price - prev_close) / prev_close * dec!(100)).round_dp(PRICE_DECIMALS);
        let fetched_at = Utc::now();

        tracing::info!(
            %symbol,
            %last_price,
            %prev_close,
            volume,
            %timestamp,
            %fetched_at,
            "Quote fetched"
        );

        Ok(Quote::new(
            symbol,
            last_price.round_dp(PRICE_DECIMALS),
            prev_close.round_dp(PRICE_DECIMALS),
            change_percent,
            volume,
            format_volume(volume),
            timestamp,
            fetched_at,
        ))
    }
}
