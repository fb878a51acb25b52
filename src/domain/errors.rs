use std::fmt;

// Failure causes reported by an auth client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthClientError {
    // Credentials or token rejected.
    AuthenticationError,
    // Backend-reported failure. The text is for diagnostics, not for end users.
    ServerError(String),
}

impl fmt::Display for AuthClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthClientError::AuthenticationError => write!(f, "authentication rejected"),
            AuthClientError::ServerError(text) => write!(f, "auth server error: {text}"),
        }
    }
}

impl std::error::Error for AuthClientError {}

pub type AuthClientResult<T> = Result<T, AuthClientError>;

// Sign-in error codes surfaced to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInError {
    InvalidCredentials,
    Unsupported,
    Unknown,
}

impl From<AuthClientError> for SignInError {
    fn from(err: AuthClientError) -> Self {
        match err {
            AuthClientError::AuthenticationError => SignInError::InvalidCredentials,
            AuthClientError::ServerError(_) => SignInError::Unknown,
        }
    }
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::InvalidCredentials => write!(f, "invalid credentials"),
            SignInError::Unsupported => write!(f, "sign-in method not supported"),
            SignInError::Unknown => write!(f, "unknown error"),
        }
    }
}

impl std::error::Error for SignInError {}
