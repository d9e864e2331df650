use crate::error::RelayError;
use crate::models::chat::AskResponse;
use crate::relay::{ parse_request, ChatRelay };
use std::any::Any;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    routing::post,
    Router,
    extract::State,
    response::{ IntoResponse, Response },
    Json,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{ Any as CorsAny, CorsLayer };
use log::{ info, warn, error };

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

/// `/api/*` carries permissive CORS; a panic anywhere below is answered as a 500 JSON body.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(CorsAny)
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    let api = Router::new().route("/ask", post(ask_handler)).layer(cors);

    Router::new()
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    relay: Arc<ChatRelay>
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    let app = router(AppState { relay });

    let listener = tokio::net::TcpListener
        ::bind(addr).await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
    info!("HTTP API server listening on: http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn ask_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>
) -> Result<Json<AskResponse>, RelayError> {
    let body = body.map_err(|rejection| {
        warn!("Rejected /api/ask body: {}", rejection.body_text());
        RelayError::from(rejection)
    })?;

    let request = parse_request(&body).map_err(|e| {
        warn!("Rejected /api/ask request: {}", e);
        e
    })?;

    let response = state.relay.ask(request).await?;
    Ok(Json(AskResponse { response }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Server error: {}", details);
    RelayError::Internal(details).into_response()
}
