//! Shared fixtures for handler tests: a seeded in-memory state and an app
//! factory mirroring the production route table.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use bigdecimal::BigDecimal;

use crate::domain::ports::{InMemoryBonusStore, InMemoryUserStore};
use crate::domain::{BonusLedger, SpendingAnalytics, SpendingRecord, User, UserId};
use crate::inbound::http::bonus::record_bonus;
use crate::inbound::http::spending::{average_spending_by_age, total_spending};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{get_user, list_users};
use crate::inbound::http::{json_config, path_config, query_config};

fn uid(id: i64) -> UserId {
    UserId::new(id).expect("valid fixture id")
}

fn user(id: i64, name: &str, email: Option<&str>, age: i32) -> User {
    User::try_new(uid(id), name, email.map(str::to_owned), age).expect("valid fixture user")
}

/// State over in-memory stores seeded with the canonical test users.
///
/// - user 35: Tracy Orozco, age 36, one spending record of 1200.455
/// - user 36: Avery Quinn, age 25, no spending records
/// - user 37: Noor Haddad, age 51, two spending records
pub fn seeded_state() -> HttpState {
    let users = Arc::new(InMemoryUserStore::new());
    users.insert_user(user(
        35,
        "Tracy Orozco",
        Some("tracy_orozco@example.com"),
        36,
    ));
    users.insert_user(user(36, "Avery Quinn", None, 25));
    users.insert_user(user(37, "Noor Haddad", Some("noor_haddad@example.com"), 51));

    for (id, amount) in [
        (35, "1200.455"),
        (37, "2100.00"),
        (37, "399.99"),
    ] {
        let amount = BigDecimal::from_str(amount).expect("valid fixture amount");
        users.insert_spending(
            SpendingRecord::try_new(uid(id), amount, 2023).expect("valid fixture record"),
        );
    }

    let bonus = Arc::new(InMemoryBonusStore::new());
    HttpState::new(
        SpendingAnalytics::new(users.clone()),
        BonusLedger::new(bonus),
        users,
    )
}

/// Build an app exposing the full production route table over the state.
pub fn state_app(
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
        .service(total_spending)
        .service(average_spending_by_age)
        .service(record_bonus)
        .service(list_users)
        .service(get_user)
}
