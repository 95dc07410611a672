use std::{net::SocketAddr, sync::Arc, time::Duration};

use clap::Parser;
use quote_gateway::api::{YahooProvider, yahoo};
use quote_gateway::gateway::QuoteNormalizer;
use quote_gateway::server;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "HTTP gateway for normalized stock quotes")]
struct Args {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let client = yahoo::build_client(Duration::from_secs(args.timeout_secs))?;
    let provider = Arc::new(YahooProvider::new(client));
    let normalizer = QuoteNormalizer::new(provider);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, server::router(normalizer)).await?;

    Ok(())
}
