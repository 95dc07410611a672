use std::time::Duration;

use anyhow::{Context, Error, Result};
use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::api::{provider::MarketDataProvider, yahoo_dto::ChartResponseDto};
use crate::models::Bar;

const BASE_URL: &str = "https://query1.finance.yahoo.com";

// Yahoo rejects the default reqwest agent, so pose as a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
    );

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

#[derive(Clone, Debug)]
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn make_request(&self, symbol: &str, range_days: usize) -> Result<ChartResponseDto> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}d&interval=1d",
            self.base_url, symbol, range_days
        );
        let res = self.client.get(&url).send().await?;
        let status = res.status();

        // Unknown symbols come back as a 404 with a chart.error JSON body,
        // which still needs to be parsed rather than treated as a failure.
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(Error::msg(format!("Request failed: {}", status)));
        }

        let text = res.text().await?;
        serde_json::from_str::<ChartResponseDto>(&text)
            .with_context(|| format!("Failed to parse chart response for {}", symbol))
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn daily_bars(&self, symbol: &str, limit: usize) -> Result<Vec<Bar>> {
        let res = self.make_request(symbol, limit).await?;

        if res.chart().error().is_some() {
            return Ok(Vec::new());
        }

        let bars = res
            .chart()
            .result()
            .as_ref()
            .and_then(|results| results.first())
            .map(|result| result.to_bars())
            .unwrap_or_default();

        let skip = bars.len().saturating_sub(limit);
        Ok(bars.into_iter().skip(skip).collect())
    }
}
