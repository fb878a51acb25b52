pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{auth_request_timeout, auth_service_url, http_port};
pub use frameworks::server::{run, serve};
