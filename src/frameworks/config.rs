use std::{env, time::Duration};

// Runtime configuration read from the environment (.env is loaded at startup).

pub fn http_port() -> u16 {
    parse_port(env::var("AUTH_SERVER_PORT").ok().as_deref())
}

pub fn auth_service_url() -> String {
    parse_service_url(env::var("AUTH_SERVICE_URL").ok())
}

pub fn auth_request_timeout() -> Duration {
    parse_timeout(env::var("AUTH_REQUEST_TIMEOUT_MS").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(3002)
}

fn parse_service_url(value: Option<String>) -> String {
    value.unwrap_or_else(|| "http://127.0.0.1:3002".to_string())
}

fn parse_timeout(value: Option<&str>) -> Duration {
    let millis = value
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}
