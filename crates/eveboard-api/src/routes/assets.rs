//! Routes for the Ship Hangar bounded context.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use eveboard_assets::application::query_handlers;
use eveboard_assets::domain::views::{ShipDetailView, ShipListingView};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /ships — every listable ship across the caller's characters.
async fn list_ships(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ShipListingView>>, ApiError> {
    let views = query_handlers::list_ships(user.id, state.assets.as_ref()).await?;
    Ok(Json(views))
}

/// GET /ships/{id} — one ship by asset ID.
async fn ship_detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ShipDetailView>, ApiError> {
    let view = query_handlers::get_ship(user.id, id, state.assets.as_ref()).await?;
    Ok(Json(view))
}

/// Returns the router for the hangar context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ships", get(list_ships))
        .route("/ships/{id}", get(ship_detail))
}
