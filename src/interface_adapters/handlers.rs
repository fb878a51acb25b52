use crate::domain::{AuthClientError, UserInfo};
use crate::interface_adapters::protocol::{
    ErrorResponse, GoogleLoginRequest, LogoutRequest, LogoutResponse, PasswordLoginRequest,
    UserInfoResponse, VerifyTokenRequest,
};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, warn};

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Handler for validating a previously issued token.
#[tracing::instrument(name = "verify_token", skip_all)]
pub async fn verify_token(
    State(state): State<AppState>,
    Json(payload): Json<VerifyTokenRequest>,
) -> Result<Json<UserInfoResponse>, HandlerError> {
    let user = state
        .auth
        .validate_token(&payload.token)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::VerifyToken))?;

    Ok(Json(to_response(user)))
}

// Handler for username/password sign-in.
#[tracing::instrument(name = "password_login", skip_all, fields(username = %payload.username))]
pub async fn password_login(
    State(state): State<AppState>,
    Json(payload): Json<PasswordLoginRequest>,
) -> Result<Json<UserInfoResponse>, HandlerError> {
    let user = state
        .auth
        .auth_with_password(&payload.username, &payload.password)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::Login))?;

    info!("password sign-in succeeded");
    Ok(Json(to_response(user)))
}

// Handler for Google id token sign-in.
#[tracing::instrument(name = "google_login", skip_all)]
pub async fn google_login(
    State(state): State<AppState>,
    Json(payload): Json<GoogleLoginRequest>,
) -> Result<Json<UserInfoResponse>, HandlerError> {
    if !state.auth.supports_google_sign_in() {
        return Err(error_response(
            StatusCode::NOT_IMPLEMENTED,
            "google sign-in not supported",
        ));
    }

    let user = state
        .auth
        .auth_with_google_id_token(&payload.id_token)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::Login))?;

    info!("google sign-in succeeded");
    Ok(Json(to_response(user)))
}

// Handler for revoking a token.
#[tracing::instrument(name = "logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, HandlerError> {
    state
        .auth
        .invalidate_token(&payload.token)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::Logout))?;

    Ok(Json(LogoutResponse { revoked: true }))
}

fn to_response(user: UserInfo) -> UserInfoResponse {
    UserInfoResponse {
        token: user.token,
        display_name: user.display_name,
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Maps client errors to HTTP responses by endpoint context.
enum AuthErrorContext {
    VerifyToken,
    Login,
    Logout,
}

fn map_auth_error(err: AuthClientError, context: AuthErrorContext) -> HandlerError {
    match err {
        AuthClientError::AuthenticationError => match context {
            AuthErrorContext::VerifyToken | AuthErrorContext::Logout => {
                error_response(StatusCode::UNAUTHORIZED, "invalid token")
            }
            AuthErrorContext::Login => {
                error_response(StatusCode::UNAUTHORIZED, "invalid credentials")
            }
        },
        AuthClientError::ServerError(text) => {
            // Diagnostic text stays in the logs.
            warn!(error = %text, "auth client reported a server error");
            error_response(StatusCode::BAD_GATEWAY, "upstream auth error")
        }
    }
}
