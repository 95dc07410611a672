pub mod format;
pub mod normalizer;

pub use format::format_volume;
pub use normalizer::QuoteNormalizer;
