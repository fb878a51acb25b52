use crate::interface_adapters::handlers::{google_login, logout, password_login, verify_token};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth/verify-token", post(verify_token))
        .route("/auth/password", post(password_login))
        .route("/auth/google", post(google_login))
        .route("/auth/logout", post(logout))
        .with_state(state)
}
