//! HTTP server setup and the `/all` endpoint.
//!
//! # Responsibilities
//! - Build the axum Router and middleware stack
//! - Fetch, serialize, and answer in the caller-chosen encoding
//! - Wrap the fetch+serialize span in the timing decorator
//! - Map every failure path to a determinate status code and body

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::codec::{CodecError, Format};
use crate::config::AppConfig;
use crate::execlog::LogSink;
use crate::places::{FetchError, PlacesClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub places: Arc<PlacesClient>,
    pub sink: LogSink,
}

/// HTTP server for the aggregation service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: &AppConfig, places: Arc<PlacesClient>, sink: LogSink) -> Self {
        let state = AppState { places, sink };

        let router = Router::new()
            .route("/all", get(get_all))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Serve until the shutdown signal fires, then stop accepting and drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct GetAllParams {
    format: Option<String>,
}

#[derive(Debug, Error)]
enum GetAllError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// `GET /all?format={json|gob}` — aggregate every upstream page and answer
/// with the serialized list.
async fn get_all(State(state): State<AppState>, Query(params): Query<GetAllParams>) -> Response {
    // JSON is the fallback only when the parameter is entirely absent; an
    // explicit unknown value is the caller's error.
    let format = match params.format.as_deref() {
        None => Format::Json,
        Some(raw) => match Format::from_str(raw) {
            Ok(format) => format,
            Err(e) => {
                tracing::warn!(format = raw, "Rejected request");
                return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
            }
        },
    };

    let result = state
        .sink
        .observe("get_all", async {
            let places = state.places.fetch_all().await?;
            let body = format.serialize(&places)?;
            Ok::<Vec<u8>, GetAllError>(body)
        })
        .await;

    match result {
        Ok(body) => ([(header::CONTENT_TYPE, format.content_type())], body).into_response(),
        Err(GetAllError::Fetch(e)) => {
            tracing::error!(error = %e, "Upstream fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                format!("upstream fetch failed: {e}"),
            )
                .into_response()
        }
        Err(GetAllError::Codec(e)) => {
            tracing::error!(error = %e, "Serialization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("serialization failed: {e}"),
            )
                .into_response()
        }
    }
}
