//! Item handlers - paginated listing, detail lookup and creation.
//!
//! Extractor rejections (unparseable query strings, path params or JSON
//! bodies) are mapped to the same generic validation error the explicit
//! checks produce, so every malformed request gets the one 400 body.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::{ItemCreatedDto, ItemsPageDto, ListItemsQuery};
use crate::error::HttpError;
use crate::state::AppState;
use wares_core::{Item, ItemDraft};

/// List a page of items, optionally filtered by a search term.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<ItemsPageDto>, HttpError> {
    let Query(raw) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable listing query");
        HttpError::Validation
    })?;
    let params = raw.validate()?;

    let term = params.term.as_deref().unwrap_or("");
    let (items, pagination) = state
        .core
        .catalog()
        .browse(term, params.page, params.limit)
        .await?;

    Ok(Json(ItemsPageDto {
        items,
        pagination,
        search_query: params.term,
    }))
}

/// Get a single item by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, HttpError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable item id");
        HttpError::Validation
    })?;
    if id < 1 {
        tracing::debug!(id, "rejected non-positive item id");
        return Err(HttpError::Validation);
    }

    match state.core.catalog().get(id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(HttpError::NotFound("Item not found".to_string())),
    }
}

/// Create a new item from a JSON draft.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemCreatedDto>), HttpError> {
    let Json(draft) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable item payload");
        HttpError::Validation
    })?;

    let item = state.core.catalog().create(draft).await?;
    tracing::debug!(id = item.id, "item created via API");

    Ok((StatusCode::CREATED, Json(ItemCreatedDto::new(item))))
}
