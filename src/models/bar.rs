use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One daily aggregated price/volume observation from the provider.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Bar {
    close: Decimal,
    volume: u64,
    timestamp: DateTime<Utc>,
}
