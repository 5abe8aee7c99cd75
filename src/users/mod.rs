use crate::state::AppState;
use axum::Router;

pub mod error;
pub(crate) mod extractors;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use repo::UserStore;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::users_routes())
}
