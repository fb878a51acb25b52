use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{AuthClient, TokenStore};

// Application state for the auth HTTP backend.
#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> lets the backend serve any client implementation.
    pub auth: Arc<dyn AuthClient>,
}

// In-memory store for the caller-side session token.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    pub token: Arc<Mutex<Option<String>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, String> {
        let token = self.token.lock().await;
        Ok(token.clone())
    }

    async fn save(&self, token: String) -> Result<(), String> {
        let mut slot = self.token.lock().await;
        *slot = Some(token);
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        let mut slot = self.token.lock().await;
        *slot = None;
        Ok(())
    }
}
