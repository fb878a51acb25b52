use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::{AuthClient, AuthClientError, AuthClientResult, UserInfo};
use crate::frameworks::config;
use crate::interface_adapters::protocol::{
    ErrorResponse, GoogleLoginRequest, LogoutRequest, LogoutResponse, PasswordLoginRequest,
    UserInfoResponse, VerifyTokenRequest,
};

// Thin reqwest client for the auth backend.
#[derive(Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    // Client pointed at AUTH_SERVICE_URL with AUTH_REQUEST_TIMEOUT_MS.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(config::auth_service_url(), config::auth_request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> AuthClientResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| AuthClientError::ServerError(format!("auth transport error: {err}")))?;
        let status = response.status();

        if status.is_success() {
            return response.json::<R>().await.map_err(|err| {
                AuthClientError::ServerError(format!("auth response decode error: {err}"))
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(AuthClientError::AuthenticationError);
        }

        // Keep upstream status/message for diagnostics.
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|payload| payload.message);
        tracing::debug!(%status, ?message, path, "auth upstream rejected request");
        Err(AuthClientError::ServerError(match message {
            Some(message) => format!("auth upstream error {status}: {message}"),
            None => format!("auth upstream error {status}"),
        }))
    }
}

fn into_user_info(response: UserInfoResponse) -> UserInfo {
    UserInfo {
        token: response.token,
        display_name: response.display_name,
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn validate_token(&self, token: &str) -> AuthClientResult<UserInfo> {
        let request = VerifyTokenRequest {
            token: token.to_string(),
        };
        self.post::<_, UserInfoResponse>("/auth/verify-token", &request)
            .await
            .map(into_user_info)
    }

    async fn auth_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> AuthClientResult<UserInfo> {
        let request = PasswordLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post::<_, UserInfoResponse>("/auth/password", &request)
            .await
            .map(into_user_info)
    }

    async fn auth_with_google_id_token(&self, id_token: &str) -> AuthClientResult<UserInfo> {
        let request = GoogleLoginRequest {
            id_token: id_token.to_string(),
        };
        self.post::<_, UserInfoResponse>("/auth/google", &request)
            .await
            .map(into_user_info)
    }

    async fn invalidate_token(&self, token: &str) -> AuthClientResult<()> {
        let request = LogoutRequest {
            token: token.to_string(),
        };
        let response = self
            .post::<_, LogoutResponse>("/auth/logout", &request)
            .await?;
        tracing::debug!(revoked = response.revoked, "token invalidated");
        Ok(())
    }
}
