//! Paisa Web Server
//!
//! Axum-based REST API for the Paisa cashflow demo:
//! - `GET /api/forecast`: 7-day balance forecast
//! - `POST /api/income`: add income to the shared modifier
//! - `GET /api/nudge`: AI-generated behavioral nudge
//!
//! CORS is open for the two local dev frontend origins with credentials
//! allowed; methods and headers mirror the request.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use paisa_core::{BalanceLedger, ForecastTable, NudgeClient, NudgeContext};

mod handlers;

/// Local dev frontend origins (Vite defaults)
const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEV_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Shared application state
pub struct AppState {
    /// Cumulative income modifier, shared by forecast and income handlers
    pub ledger: BalanceLedger,
    /// Base balances keyed by day offset
    pub forecast: ForecastTable,
    /// Nudge prompt facts
    pub nudge_context: NudgeContext,
    /// Text-generation client
    pub ai: NudgeClient,
}

/// Create the application router with the default demo state
pub fn create_router(config: ServerConfig) -> Router {
    let ai = NudgeClient::from_env();
    info!(model = ai.model(), "Nudge backend configured");

    create_router_with_state(
        BalanceLedger::new(),
        ForecastTable::default(),
        ai,
        config,
    )
}

/// Create the application router with injected state (for testing)
pub fn create_router_with_state(
    ledger: BalanceLedger,
    forecast: ForecastTable,
    ai: NudgeClient,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState {
        ledger,
        forecast,
        nudge_context: NudgeContext::default(),
        ai,
    });

    let api_routes = Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route("/income", post(handlers::add_income))
        .route("/nudge", get(handlers::get_nudge));

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    // Credentialed CORS cannot use wildcards; mirroring the request gives
    // the all-methods/all-headers behavior the dev frontend expects
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    if std::env::var("GEMINI_API_KEY").is_err() {
        warn!("GEMINI_API_KEY not set - nudge requests will fail until it is");
    }

    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_gateway(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
