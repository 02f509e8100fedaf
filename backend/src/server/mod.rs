//! Server construction and adapter wiring.
//!
//! Builds the handler state from configuration: database-backed adapters
//! when store URLs are configured, in-memory adapters otherwise so the
//! service still serves traffic in development and tests.

mod config;

pub use config::AppSettings;

use std::io;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::domain::ports::{BonusStore, InMemoryBonusStore, InMemoryUserStore, UserStore};
use backend::domain::{BonusLedger, SpendingAnalytics};
use backend::inbound::http::bonus::record_bonus;
use backend::inbound::http::{json_config, path_config, query_config};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::spending::{average_spending_by_age, total_spending};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{get_user, list_users};
use backend::outbound::documents::RedisBonusStore;
use backend::outbound::persistence::{DbPool, DieselUserStore, PoolConfig};
#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::Trace;

/// Build the handler state from configuration.
///
/// Each store falls back to its in-memory adapter when no URL is
/// configured; the fallback is logged so a production deployment missing a
/// URL is visible at startup.
pub async fn build_http_state(settings: &AppSettings) -> io::Result<HttpState> {
    let users: Arc<dyn UserStore> = match settings.database_url.as_deref() {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|err| io::Error::other(err.to_string()))?;
            info!("user store: PostgreSQL");
            Arc::new(DieselUserStore::new(pool))
        }
        None => {
            warn!("no database_url configured; using the in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let bonus: Arc<dyn BonusStore> = match settings.redis_url.as_deref() {
        Some(url) => {
            let store = RedisBonusStore::connect(url)
                .await
                .map_err(|err| io::Error::other(err.to_string()))?;
            info!("bonus store: Redis");
            Arc::new(store)
        }
        None => {
            warn!("no redis_url configured; using the in-memory bonus store");
            Arc::new(InMemoryBonusStore::new())
        }
    };

    Ok(HttpState::new(
        SpendingAnalytics::new(users.clone()),
        BonusLedger::new(bonus),
        users,
    ))
}

/// Assemble the application with middleware, routes, and probes.
pub fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(total_spending)
        .service(average_spending_by_age)
        .service(record_bonus)
        .service(list_users)
        .service(get_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
