use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized quote payload, built fresh per request and never persisted.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    last_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    previous_close: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    change_percent: Decimal,
    volume: u64,
    volume_formatted: String,
    observation_timestamp: DateTime<Utc>,
    fetched_at: DateTime<Utc>,
}
