use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::PasteStore;
use crate::types::{CreatePaste, Document};
use crate::{ApiError, AppState};

pub async fn run(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port));

    info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/pastes", get(list_pastes).post(create_paste))
        .route("/pastes/:paste_id", get(get_paste))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .route_layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(state)
}

async fn list_pastes(State(store): State<PasteStore>) -> impl IntoResponse {
    Json(Document {
        data: store.get_all_pastes(),
    })
}

async fn get_paste(
    State(store): State<PasteStore>,
    Path(paste_id): Path<String>,
) -> crate::ApiResult<impl IntoResponse> {
    let paste = paste_id
        .parse()
        .ok()
        .and_then(|id| store.get_paste(id))
        .ok_or(ApiError::PasteNotFound(paste_id))?;

    Ok(Json(Document { data: paste }))
}

async fn create_paste(
    State(store): State<PasteStore>,
    body: Option<Json<CreatePaste>>,
) -> crate::ApiResult<impl IntoResponse> {
    // an absent or unparsable body counts as an empty draft
    let body = body.map(|Json(body)| body).unwrap_or_default();

    let paste = store.insert_paste(body.data)?;

    info!(
        "new paste: id={id}, size={size}",
        id = paste.id,
        size = paste.text.len()
    );

    Ok((StatusCode::CREATED, Json(Document { data: paste })))
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.to_string())
}
