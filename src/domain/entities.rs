use serde::{Deserialize, Serialize};

// Authenticated identity handed back by an auth client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub token: String,
    pub display_name: String,
}

impl UserInfo {
    pub fn new(token: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            display_name: display_name.into(),
        }
    }
}
