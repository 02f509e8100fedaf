//! Spending analytics handlers.
//!
//! ```text
//! GET /total_spending?user_id=35
//! GET /average_spending_by_age/35
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters for `GET /total_spending`.
#[derive(Debug, Deserialize)]
pub struct TotalSpendingQuery {
    /// Subject user identifier; absence is a client error with a fixed
    /// message.
    pub user_id: Option<String>,
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Total spending for one user.
#[utoipa::path(
    get,
    path = "/total_spending",
    params(
        ("user_id" = i64, Query, description = "Subject user identifier")
    ),
    responses(
        (status = 200, description = "Total spending with user identity fields"),
        (status = 400, description = "Missing or malformed user_id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    ),
    tags = ["spending"],
    operation_id = "totalSpending"
)]
#[get("/total_spending")]
pub async fn total_spending(
    state: web::Data<HttpState>,
    query: web::Query<TotalSpendingQuery>,
) -> ApiResult<HttpResponse> {
    let raw = query
        .user_id
        .as_deref()
        .ok_or_else(|| Error::invalid_request("Missing user_id parameter"))?;
    let user_id = parse_user_id(raw)?;
    let total = state.analytics.total_spending(user_id).await?;
    Ok(HttpResponse::Ok().json(total))
}

/// Per-user average spending labelled with the user's age bucket.
#[utoipa::path(
    get,
    path = "/average_spending_by_age/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Subject user identifier")
    ),
    responses(
        (status = 200, description = "Average spending with age bucket label"),
        (status = 400, description = "Malformed user_id"),
        (status = 404, description = "User not found or has no spending data"),
        (status = 500, description = "Store failure")
    ),
    tags = ["spending"],
    operation_id = "averageSpendingByAge"
)]
#[get("/average_spending_by_age/{user_id}")]
pub async fn average_spending_by_age(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner())?;
    let average = state.analytics.average_spending_by_age(user_id).await?;
    Ok(HttpResponse::Ok().json(average))
}
