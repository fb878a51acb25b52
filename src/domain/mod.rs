pub mod entities;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use entities::UserInfo;
pub use errors::{AuthClientError, AuthClientResult, SignInError};
pub use ports::{AuthClient, TokenStore};
