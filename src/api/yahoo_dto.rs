use chrono::{TimeZone, Utc};
use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Bar;

#[derive(Debug, Deserialize, Getters)]
pub struct ChartResponseDto {
    chart: ChartDto,
}

#[derive(Debug, Deserialize, Getters)]
pub struct ChartDto {
    result: Option<Vec<ChartResultDto>>,
    error: Option<ChartErrorDto>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct ChartErrorDto {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize, Getters)]
pub struct ChartResultDto {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: IndicatorsDto,
}

#[derive(Debug, Deserialize, Getters)]
pub struct IndicatorsDto {
    quote: Vec<QuoteIndicatorDto>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct QuoteIndicatorDto {
    #[serde(default)]
    close: Vec<Option<Decimal>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

impl ChartResultDto {
    /// Rows with a null close (holidays, half-days) are skipped; a missing
    /// volume becomes zero since Yahoo omits it for some instruments.
    pub fn to_bars(&self) -> Vec<Bar> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        let mut bars = Vec::new();
        for (i, ts) in self.timestamp.iter().enumerate() {
            let close = quote.close.get(i).copied().flatten();
            let stamp = Utc.timestamp_opt(*ts, 0).single();
            if let (Some(close), Some(timestamp)) = (close, stamp) {
                let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);
                bars.push(Bar::new(close, volume, timestamp));
            }
        }
        bars
    }
}
