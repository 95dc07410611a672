pub mod bar;
pub mod quote;

pub use bar::Bar;
pub use quote::Quote;
