//! Bearer-session authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use eveboard_core::records::UserRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated account behind the request.
///
/// Resolved from the `Authorization: Bearer <token>` header through the
/// session store. A missing or malformed header, an unknown token, or an
/// expired session all reject with 401.
pub struct CurrentUser(pub UserRecord);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated)?;

        let user = state
            .sessions
            .user_for_token(token)
            .await
            .map_err(ApiError::from)?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Self(user))
    }
}
