use axum::{extract::State, routing::get, Json, Router};
use tracing::{instrument, warn};

use crate::{
    state::AppState,
    users::{
        error::UserError,
        extractors::JsonBody,
        repo_types::{NewUser, User, UserPatch},
    },
};

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user).put(update_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list_all())
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> Result<Json<User>, UserError> {
    state.users.create(payload).map(Json).map_err(|e| {
        warn!(error = %e, "create user failed");
        e
    })
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPatch>,
) -> Result<Json<User>, UserError> {
    let user_id = payload.id;
    state.users.update(payload).map(Json).map_err(|e| {
        warn!(error = %e, user_id, "update user failed");
        e
    })
}
