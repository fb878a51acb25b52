// Concrete AuthClient implementations.

pub mod http;
pub mod mock;

pub use http::HttpAuthClient;
pub use mock::MockAuthClient;
