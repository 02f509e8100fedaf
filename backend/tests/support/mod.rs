//! Shared helpers for integration suites: a seeded in-memory deployment of
//! the full route table.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use bigdecimal::BigDecimal;

use backend::domain::ports::{InMemoryBonusStore, InMemoryUserStore};
use backend::domain::{BonusLedger, SpendingAnalytics, SpendingRecord, User, UserId};
use backend::inbound::http::bonus::record_bonus;
use backend::inbound::http::spending::{average_spending_by_age, total_spending};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{get_user, list_users};
use backend::inbound::http::{json_config, path_config, query_config};
use backend::Trace;

pub fn uid(id: i64) -> UserId {
    UserId::new(id).expect("valid fixture id")
}

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal literal")
}

/// Seed the canonical fixture data set.
///
/// - user 35: Tracy Orozco, age 36, spending [1200.455]
/// - user 36: Avery Quinn, age 25, no spending
/// - user 37: Noor Haddad, age 51, spending [2100.00, 399.99]
pub fn seeded_state() -> HttpState {
    let users = Arc::new(InMemoryUserStore::new());
    for (id, name, email, age) in [
        (35, "Tracy Orozco", Some("tracy_orozco@example.com"), 36),
        (36, "Avery Quinn", None, 25),
        (37, "Noor Haddad", Some("noor_haddad@example.com"), 51),
    ] {
        let user = User::try_new(uid(id), name, email.map(str::to_owned), age)
            .expect("valid fixture user");
        users.insert_user(user);
    }
    for (id, amount) in [(35, "1200.455"), (37, "2100.00"), (37, "399.99")] {
        users.insert_spending(
            SpendingRecord::try_new(uid(id), dec(amount), 2023).expect("valid fixture record"),
        );
    }

    HttpState::new(
        SpendingAnalytics::new(users.clone()),
        BonusLedger::new(Arc::new(InMemoryBonusStore::new())),
        users,
    )
}

/// Build the full production route table over the given state, including
/// the trace middleware.
pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(total_spending)
        .service(average_spending_by_age)
        .service(record_bonus)
        .service(list_users)
        .service(get_user)
}
