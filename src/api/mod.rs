pub mod provider;
pub mod yahoo;
pub mod yahoo_dto;

pub use provider::MarketDataProvider;
pub use yahoo::YahooProvider;
