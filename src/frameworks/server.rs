use crate::domain::AuthClient;
use crate::frameworks::config;
use crate::interface_adapters::clients::MockAuthClient;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the auth routes for `auth` on an already bound listener.
pub async fn serve(listener: TcpListener, auth: Arc<dyn AuthClient>) -> std::io::Result<()> {
    let app = app(AppState { auth });
    axum::serve(listener, app).await
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    // The bundled backend serves the mock client; it is a test fixture, not a verifier.
    let auth: Arc<dyn AuthClient> = Arc::new(MockAuthClient::new());
    tracing::warn!("serving the mock auth client: passwords are not checked");

    let addr = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return;
        }
    };
    tracing::info!(%addr, "listening");

    if let Err(e) = serve(listener, auth).await {
        tracing::error!(error = %e, "server error");
    }
}
