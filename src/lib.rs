pub mod api;
pub mod error;
pub mod gateway;
pub mod models;
pub mod server;

#[cfg(test)]
mod test;
