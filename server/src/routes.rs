use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{error::AppError, state::AppState};

/// Resolves a term through the read-through cache. The detached
/// write-back handle is dropped here: persistence never blocks a lookup.
pub async fn term_handler(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resolution = state.resolver.resolve(&term).await?;

    Ok(Json(resolution.record))
}

pub async fn list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.resolver.store().ok_or(AppError::StoreUnconfigured)?;

    Ok(Json(store.list().await?))
}
