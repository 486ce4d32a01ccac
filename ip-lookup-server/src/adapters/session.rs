use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    application::services::lookup_service::LookupService,
    domain::{
        errors::AppError,
        ports::{geo_lookup::GeoLookup, reply_sink::ReplySink},
        view::{Theme, ViewMode},
    },
};

use super::{app_state::AppState, client_origin::ClientOrigin, presentation::SessionView};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: ViewMode,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct ClipboardView {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OpenedSession {
    pub session_id: Uuid,
    pub session: SessionView,
}

async fn session<G: GeoLookup, S: ReplySink>(
    state: &AppState<G, S>,
    id: Uuid,
) -> Result<Arc<LookupService<G>>, AppError> {
    state
        .sessions
        .get(&id)
        .await
        .ok_or(AppError::SessionNotFound(id))
}

pub async fn open_session<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    ClientOrigin(origin): ClientOrigin,
) -> (StatusCode, Json<OpenedSession>) {
    let (session_id, snapshot) = state.sessions.create(origin).await;
    (
        StatusCode::CREATED,
        Json(OpenedSession {
            session_id,
            session: SessionView::from(&snapshot),
        }),
    )
}

pub async fn close_session<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound(id))
    }
}

pub async fn get_session<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id).await?.snapshot().await;
    Ok(Json(SessionView::from(&snapshot)))
}

pub async fn refresh<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
    ClientOrigin(origin): ClientOrigin,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id).await?.lookup_self(origin).await;
    Ok(Json(SessionView::from(&snapshot)))
}

pub async fn search<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id)
        .await?
        .submit_search(&request.query)
        .await?;
    Ok(Json(SessionView::from(&snapshot)))
}

pub async fn set_query<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id).await?.set_query(&request.text).await;
    Ok(Json(SessionView::from(&snapshot)))
}

pub async fn copy<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
    Json(request): Json<CopyRequest>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id)
        .await?
        .copy_address(&request.text)
        .await;
    Ok(Json(SessionView::from(&snapshot)))
}

pub async fn clipboard<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClipboardView>, AppError> {
    Ok(Json(ClipboardView {
        text: session(&state, id).await?.clipboard_text(),
    }))
}

pub async fn select_view<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
    ClientOrigin(origin): ClientOrigin,
    Json(request): Json<ViewRequest>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id)
        .await?
        .select_view(request.view, origin)
        .await;
    Ok(Json(SessionView::from(&snapshot)))
}

pub async fn set_theme<G: GeoLookup, S: ReplySink>(
    State(state): State<AppState<G, S>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = session(&state, id).await?.set_theme(request.theme).await;
    Ok(Json(SessionView::from(&snapshot)))
}
