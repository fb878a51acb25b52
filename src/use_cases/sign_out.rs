use crate::domain::{AuthClient, SignInError, TokenStore};

// Response returned by the sign-out use case.
pub struct SignOutResponse {
    // False when there was no session to end.
    pub signed_out: bool,
}

// Revokes the stored token server-side and forgets it locally.
pub struct SignOutUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignOutUseCase<A, S>
where
    A: AuthClient,
    S: TokenStore,
{
    pub async fn execute(&self) -> Result<SignOutResponse, SignInError> {
        let token = self.store.load().await.map_err(|err| {
            tracing::error!(error = %err, "failed to load session token");
            SignInError::Unknown
        })?;
        let Some(token) = token else {
            return Ok(SignOutResponse { signed_out: false });
        };

        // Server-side revocation is best effort; the local session always ends.
        if let Err(err) = self.auth.invalidate_token(&token).await {
            tracing::warn!(error = %err, "failed to invalidate token");
        }

        self.store.clear().await.map_err(|err| {
            tracing::error!(error = %err, "failed to clear session token");
            SignInError::Unknown
        })?;

        Ok(SignOutResponse { signed_out: true })
    }
}
