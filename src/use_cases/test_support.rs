use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{AuthClient, AuthClientError, AuthClientResult, TokenStore, UserInfo};

// AuthClient double whose outcome is fixed up front and whose calls are recorded.
#[derive(Clone)]
pub(crate) struct ScriptedAuthClient {
    outcome: Result<UserInfo, AuthClientError>,
    invalidate_outcome: AuthClientResult<()>,
    google_supported: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedAuthClient {
    pub(crate) fn succeeding() -> Self {
        Self {
            outcome: Ok(UserInfo::new("scripted-token", "Scripted User")),
            invalidate_outcome: Ok(()),
            google_supported: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(err: AuthClientError) -> Self {
        Self {
            outcome: Err(err.clone()),
            invalidate_outcome: Err(err),
            ..Self::succeeding()
        }
    }

    pub(crate) fn without_google(mut self) -> Self {
        self.google_supported = false;
        self
    }

    pub(crate) fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

#[async_trait]
impl AuthClient for ScriptedAuthClient {
    async fn validate_token(&self, token: &str) -> AuthClientResult<UserInfo> {
        self.record(format!("validate_token:{token}"));
        self.outcome.clone()
    }

    async fn auth_with_password(
        &self,
        username: &str,
        _password: &str,
    ) -> AuthClientResult<UserInfo> {
        self.record(format!("auth_with_password:{username}"));
        self.outcome.clone()
    }

    async fn auth_with_google_id_token(&self, id_token: &str) -> AuthClientResult<UserInfo> {
        self.record(format!("auth_with_google_id_token:{id_token}"));
        self.outcome.clone()
    }

    async fn invalidate_token(&self, token: &str) -> AuthClientResult<()> {
        self.record(format!("invalidate_token:{token}"));
        self.invalidate_outcome.clone()
    }

    fn supports_google_sign_in(&self) -> bool {
        self.google_supported
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub load: bool,
    pub save: bool,
    pub clear: bool,
}

// TokenStore double with inspectable contents and failure toggles.
#[derive(Clone, Default)]
pub(crate) struct RecordingTokenStore {
    token: Arc<Mutex<Option<String>>>,
    failures: FailureFlags,
}

impl RecordingTokenStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        *store.token.lock().expect("token mutex poisoned") = Some(token.into());
        store
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn stored_token(&self) -> Option<String> {
        self.token.lock().expect("token mutex poisoned").clone()
    }
}

#[async_trait]
impl TokenStore for RecordingTokenStore {
    async fn load(&self) -> Result<Option<String>, String> {
        if self.failures.load {
            return Err("load failed".to_string());
        }
        Ok(self.stored_token())
    }

    async fn save(&self, token: String) -> Result<(), String> {
        if self.failures.save {
            return Err("save failed".to_string());
        }
        *self.token.lock().expect("token mutex poisoned") = Some(token);
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        if self.failures.clear {
            return Err("clear failed".to_string());
        }
        *self.token.lock().expect("token mutex poisoned") = None;
        Ok(())
    }
}
