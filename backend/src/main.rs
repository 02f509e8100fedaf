//! Backend entry-point: wires settings, stores, REST endpoints, and probes.

mod server;

use actix_web::{web, HttpServer};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use server::{build_app, build_http_state, AppSettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let state = build_http_state(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(state.clone(), server_health_state.clone())
    })
    .bind(settings.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}
