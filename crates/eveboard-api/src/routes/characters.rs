//! Routes for the Character & Skills bounded context.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use eveboard_character::application::command_handlers::{self, DisconnectOutcome};
use eveboard_character::application::query_handlers;
use eveboard_character::domain::views::{CharacterSheetView, CharacterSummaryView};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

/// GET / — the caller's characters, highest skillpoint total first.
async fn list_characters(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<CharacterSummaryView>>, ApiError> {
    let views = query_handlers::list_characters(user.id, state.characters.as_ref()).await?;
    Ok(Json(views))
}

/// GET /{id} — the full character sheet.
async fn character_sheet(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<CharacterSheetView>, ApiError> {
    let sheet = query_handlers::get_character_sheet(user.id, id, state.characters.as_ref()).await?;
    Ok(Json(sheet))
}

/// POST /{id}/disconnect — unlink the character and delete its SSO token.
async fn disconnect_character(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<DisconnectOutcome>, ApiError> {
    let outcome =
        command_handlers::disconnect_character(user.id, id, state.characters.as_ref()).await?;
    Ok(Json(outcome))
}

/// Returns the router for the character context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_characters))
        .route("/{id}", get(character_sheet))
        .route("/{id}/disconnect", post(disconnect_character))
}
