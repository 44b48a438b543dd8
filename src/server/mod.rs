//! Collection API service
//!
//! A small HTTP front over [`CollectionStore`]: list the tree, create/patch/
//! delete groups, patch cards. Handlers take the store through shared axum
//! state and lock it for the duration of each (synchronous) mutation, so
//! every request observes and produces a consistent tree. No auth is
//! enforced.

pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::Json;
use parking_lot::Mutex;
use serde_json::json;
use tracing::info;

use crate::api::{Ack, CardPatch, CreateGroupBody, CreatedGroup, GroupPatch};
use crate::board::Funnel;
use crate::error::Result;
use crate::types::GroupMode;

pub use store::CollectionStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<CollectionStore>>,
}

impl AppState {
    pub fn new(store: CollectionStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn store(&self) -> &Arc<Mutex<CollectionStore>> {
        &self.store
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/funnels", get(list_funnels))
        .route("/groups", post(create_group))
        .route("/groups/{id}", patch(patch_group).delete(delete_group))
        .route("/cards/{id}", patch(patch_card))
        .with_state(state)
}

async fn list_funnels(State(state): State<AppState>) -> Json<Vec<Funnel>> {
    Json(state.store.lock().materialize())
}

async fn create_group(
    State(state): State<AppState>,
    Json(body): Json<CreateGroupBody>,
) -> Response {
    let name = body.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    let funnel_id = body.funnel_id.as_deref().filter(|f| !f.is_empty());
    let (Some(name), Some(funnel_id)) = (name, funnel_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name and funnelId required" })),
        )
            .into_response();
    };

    let id = state.store.lock().create_group(
        name,
        funnel_id,
        body.description.clone(),
        body.mode.unwrap_or(GroupMode::Manual),
        body.color.clone(),
    );
    info!(group = %id, funnel = %funnel_id, "group created");
    Json(CreatedGroup { id }).into_response()
}

async fn patch_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<GroupPatch>,
) -> Response {
    if !state.store.lock().patch_group(&id, &patch) {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(Ack { ok: true }).into_response()
}

async fn delete_group(State(state): State<AppState>, Path(id): Path<String>) -> Json<Ack> {
    let removed = state.store.lock().delete_group(&id);
    info!(group = %id, cards = removed, "group deleted");
    Json(Ack { ok: true })
}

async fn patch_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CardPatch>,
) -> Response {
    if !state.store.lock().patch_card(&id, &patch) {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(Ack { ok: true }).into_response()
}

/// Bind and serve the collection API until interrupted.
pub async fn run_server(host: &str, port: u16, store: CollectionStore) -> Result<()> {
    let state = AppState::new(store);
    let app = build_router(state);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("collection API listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
