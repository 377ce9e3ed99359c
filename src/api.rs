// 🌐 REST API
// GET /api/words/:number → JSON with the grouped numeral and its words

use crate::grouping::group_thousands;
use crate::input::parse_number;
use crate::words::to_english;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub number: i64,
    pub grouped: String,
    pub words: String,
}

impl From<i64> for Conversion {
    fn from(number: i64) -> Self {
        Conversion {
            number,
            grouped: group_thousands(number),
            words: to_english(number),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/words/:number - Convert one number
async fn get_words(Path(number): Path<String>) -> impl IntoResponse {
    match parse_number(&number) {
        Ok(n) => (StatusCode::OK, Json(ApiResponse::ok(Conversion::from(n)))).into_response(),
        Err(e) => {
            debug!(number = %number, error = %e, "rejected request");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Conversion>::err(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Routes under /api, with request tracing and permissive CORS
pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/words/:number", get(get_words));

    Router::new().nest("/api", api_routes).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
