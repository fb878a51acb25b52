use serde::{Deserialize, Serialize};

// Shared by the HTTP handlers and the reqwest client, so every payload is
// both serializable and deserializable.

// Request payload for token verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

// Request payload for username/password sign-in.
#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordLoginRequest {
    pub username: String,
    pub password: String,
}

// Request payload for Google id token sign-in.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub id_token: String,
}

// Response payload carrying an authenticated identity.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub token: String,
    pub display_name: String,
}

// Request payload for logout.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

// Response payload for logout.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
