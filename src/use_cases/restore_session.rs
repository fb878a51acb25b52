use crate::domain::{AuthClient, AuthClientError, SignInError, TokenStore, UserInfo};

// Revalidates a stored token, e.g. at startup.
pub struct RestoreSessionUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> RestoreSessionUseCase<A, S>
where
    A: AuthClient,
    S: TokenStore,
{
    // Ok(None) means the caller is signed out.
    pub async fn execute(&self) -> Result<Option<UserInfo>, SignInError> {
        let token = self.store.load().await.map_err(|err| {
            tracing::error!(error = %err, "failed to load session token");
            SignInError::Unknown
        })?;
        let Some(token) = token else {
            return Ok(None);
        };

        match self.auth.validate_token(&token).await {
            Ok(user) => Ok(Some(user)),
            Err(AuthClientError::AuthenticationError) => {
                tracing::info!("stored token rejected, clearing session");
                // Best-effort cleanup of the rejected token.
                if let Err(err) = self.store.clear().await {
                    tracing::warn!(error = %err, "failed to clear rejected token");
                }
                Ok(None)
            }
            Err(err @ AuthClientError::ServerError(_)) => {
                // Keep the token; the server may recover.
                tracing::warn!(error = %err, "could not validate stored token");
                Err(SignInError::Unknown)
            }
        }
    }
}
