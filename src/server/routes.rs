use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::error::GatewayError;
use crate::gateway::QuoteNormalizer;
use crate::models::Quote;

pub fn router(normalizer: QuoteNormalizer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/quote/{symbol}", get(get_quote))
        .with_state(normalizer)
}

async fn get_quote(
    State(normalizer): State<QuoteNormalizer>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, GatewayError> {
    let quote = normalizer.build(&symbol).await?;
    Ok(Json(quote))
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Use /api/quote/{symbol} to fetch the latest price and change percent.",
        "example": "/api/quote/AAPL",
    }))
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::NotFound { .. } | GatewayError::InvalidData { .. } => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
            GatewayError::Upstream(source) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": self.to_string(), "details": format!("{:#}", source) }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
