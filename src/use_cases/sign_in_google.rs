use crate::domain::{AuthClient, SignInError, TokenStore, UserInfo};

// Google id token sign-in. Clients that cannot serve it are never invoked.
pub struct SignInWithGoogleUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignInWithGoogleUseCase<A, S>
where
    A: AuthClient,
    S: TokenStore,
{
    pub async fn execute(&self, id_token: &str) -> Result<UserInfo, SignInError> {
        if !self.auth.supports_google_sign_in() {
            return Err(SignInError::Unsupported);
        }

        let user = self
            .auth
            .auth_with_google_id_token(id_token)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "google sign-in failed");
                SignInError::from(err)
            })?;

        self.store.save(user.token.clone()).await.map_err(|err| {
            tracing::error!(error = %err, "failed to store session token");
            SignInError::Unknown
        })?;

        Ok(user)
    }
}
