//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use eveboard_api::routes;
use eveboard_api::state::AppState;
use eveboard_store::{PgAssetRepository, PgCharacterRepository, PgSessionRepository};

/// Build the full app router backed by real PostgreSQL repositories. Uses the
/// same route structure as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let app_state = AppState::new(
        Arc::new(PgCharacterRepository::new(pool.clone())),
        Arc::new(PgAssetRepository::new(pool.clone())),
        Arc::new(PgSessionRepository::new(pool)),
    );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/characters", routes::characters::router())
        .nest("/api/v1/assets", routes::assets::router())
        .with_state(app_state)
}

/// Send a GET request, optionally with a bearer token, and return the
/// response.
pub async fn get_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a bodyless POST request, optionally with a bearer token, and return
/// the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Seed the static-data corner every scenario needs: ship and skill groups,
/// a few hulls, and the Jita system.
pub async fn seed_static(pool: &PgPool) {
    sqlx::raw_sql(
        r"
        INSERT INTO item_categories (id, name) VALUES (6, 'Ship'), (16, 'Skill');
        INSERT INTO item_groups (id, name, category_id) VALUES
            (25, 'Frigate', 6), (27, 'Battleship', 6), (29, 'Capsule', 6),
            (255, 'Gunnery', 16), (1216, 'Engineering', 16);
        INSERT INTO item_types (id, name, group_id, mass) VALUES
            (587, 'Rifter', 25, 1067000),
            (639, 'Tempest', 27, 103600000),
            (670, 'Capsule', 29, 32000),
            (3300, 'Gunnery', 255, 0),
            (3402, 'Science', 1216, 0);
        INSERT INTO regions (id, name) VALUES (10000002, 'The Forge');
        INSERT INTO systems (id, name, region_id) VALUES (30000142, 'Jita', 10000002);
        ",
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Create a user with a valid session and return its ID; the session token
/// is `tok-{username}`.
pub async fn seed_user_with_session(pool: &PgPool, username: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO users (username) VALUES ($1) RETURNING id")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, NOW() + INTERVAL '1 hour')",
    )
    .bind(format!("tok-{username}"))
    .bind(id)
    .execute(pool)
    .await
    .unwrap();
    id
}

/// Create an SSO token row for a user and return its ID.
pub async fn seed_auth_token(pool: &PgPool, user_id: i64) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO auth_tokens (user_id) VALUES ($1) RETURNING id")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

/// Create a character row.
pub async fn seed_character(
    pool: &PgPool,
    id: i64,
    name: &str,
    owner_id: Option<i64>,
    token_id: Option<i64>,
) {
    sqlx::query("INSERT INTO characters (id, name, owner_id, token_id) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(owner_id)
        .bind(token_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Attach a trained skill to a character.
pub async fn seed_skill(
    pool: &PgPool,
    character_id: i64,
    type_id: i64,
    level: i16,
    skillpoints: i64,
) {
    sqlx::query(
        "INSERT INTO skills (character_id, type_id, trained_level, skillpoints) VALUES ($1, $2, $3, $4)",
    )
    .bind(character_id)
    .bind(type_id)
    .bind(level)
    .bind(skillpoints)
    .execute(pool)
    .await
    .unwrap();
}

/// Park an assembled asset of `type_id` in Jita.
pub async fn seed_asset_in_jita(pool: &PgPool, id: i64, character_id: i64, type_id: i64) {
    sqlx::query(
        "INSERT INTO assets (id, character_id, type_id, system_id, singleton) VALUES ($1, $2, $3, 30000142, TRUE)",
    )
    .bind(id)
    .bind(character_id)
    .bind(type_id)
    .execute(pool)
    .await
    .unwrap();
}
