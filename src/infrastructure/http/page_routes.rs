//! Catalog page and card interaction API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::{
    CardSnapshot, CatalogPage, PageError, PageSnapshot, SpriteFailureResult,
};
use crate::domain::value_objects::{DexNumber, PageId, SpriteVisualState};
use crate::infrastructure::state::AppState;

type ApiError = (StatusCode, String);

/// Body of a sprite failure report: which attempt the image element showed
#[derive(Debug, Deserialize)]
pub struct SpriteFailureReport {
    pub attempt: SpriteVisualState,
}

impl From<PageError> for (StatusCode, String) {
    fn from(e: PageError) -> Self {
        (StatusCode::NOT_FOUND, e.to_string())
    }
}

fn parse_page_id(page_id: &str) -> Result<PageId, ApiError> {
    Uuid::parse_str(page_id)
        .map(PageId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid page ID".to_string()))
}

fn parse_number(number: u32) -> Result<DexNumber, ApiError> {
    DexNumber::new(number)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Invalid catalog number".to_string()))
}

async fn find_page(state: &AppState, page_id: &str) -> Result<Arc<CatalogPage>, ApiError> {
    let page_id = parse_page_id(page_id)?;
    state
        .pages
        .write()
        .await
        .touch(page_id)
        .ok_or_else(|| PageError::PageNotFound(page_id).into())
}

/// Page-ready: load the catalog and open a new page
pub async fn open_page(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<PageSnapshot>), ApiError> {
    let page = state.page_service.open_page().await;
    let page = state.pages.write().await.insert(page);
    let snapshot = state.page_service.page_snapshot(&page).await;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// Get the current view of a page
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(page_id): Path<String>,
) -> Result<Json<PageSnapshot>, ApiError> {
    let page = find_page(&state, &page_id).await?;
    Ok(Json(state.page_service.page_snapshot(&page).await))
}

/// Tear down a page
pub async fn close_page(
    State(state): State<Arc<AppState>>,
    Path(page_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_page_id(&page_id)?;
    if state.pages.write().await.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PageError::PageNotFound(id).into())
    }
}

/// Get the current view of one card
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path((page_id, number)): Path<(String, u32)>,
) -> Result<Json<CardSnapshot>, ApiError> {
    let page = find_page(&state, &page_id).await?;
    let card = state
        .page_service
        .card_snapshot(&page, parse_number(number)?)
        .await?;
    Ok(Json(card))
}

/// Flip a card; the first flip to the back face starts card resolution
pub async fn flip_card(
    State(state): State<Arc<AppState>>,
    Path((page_id, number)): Path<(String, u32)>,
) -> Result<Json<CardSnapshot>, ApiError> {
    let page = find_page(&state, &page_id).await?;
    let card = state.page_service.flip(&page, parse_number(number)?).await?;
    Ok(Json(card))
}

/// The browser failed to load the card's current sprite
pub async fn report_sprite_failure(
    State(state): State<Arc<AppState>>,
    Path((page_id, number)): Path<(String, u32)>,
    Json(report): Json<SpriteFailureReport>,
) -> Result<Json<SpriteFailureResult>, ApiError> {
    let page = find_page(&state, &page_id).await?;
    let result = state
        .page_service
        .sprite_failed(&page, parse_number(number)?, report.attempt)
        .await?;
    Ok(Json(result))
}

/// The browser failed to load the card's resolved card image
pub async fn report_card_image_failure(
    State(state): State<Arc<AppState>>,
    Path((page_id, number)): Path<(String, u32)>,
) -> Result<Json<CardSnapshot>, ApiError> {
    let page = find_page(&state, &page_id).await?;
    let card = state
        .page_service
        .card_image_failed(&page, parse_number(number)?)
        .await?;
    Ok(Json(card))
}
