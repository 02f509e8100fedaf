//! Bonus ledger handler.
//!
//! ```text
//! POST /bonus {"user_id": 123, "total_spending": 2500}
//! ```

use actix_web::{post, web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Request body for `POST /bonus`.
///
/// Both fields are optional at the serde level so a missing field surfaces
/// as the documented validation error instead of a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordBonusRequest {
    /// Qualifying user identifier.
    pub user_id: Option<i64>,
    /// Total spending claimed at qualification time.
    #[schema(value_type = Option<String>, example = "2500.00")]
    pub total_spending: Option<BigDecimal>,
}

/// Record a bonus for a qualifying user, exactly once.
#[utoipa::path(
    post,
    path = "/bonus",
    responses(
        (status = 201, description = "Bonus recorded"),
        (status = 400, description = "Missing fields or total below threshold"),
        (status = 409, description = "Bonus already recorded for this user"),
        (status = 500, description = "Store failure")
    ),
    tags = ["bonus"],
    operation_id = "recordBonus"
)]
#[post("/bonus")]
pub async fn record_bonus(
    state: web::Data<HttpState>,
    payload: web::Json<RecordBonusRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let (Some(raw_id), Some(total_spending)) = (payload.user_id, payload.total_spending) else {
        return Err(Error::invalid_request("Missing user_id or total_spending"));
    };
    let user_id =
        UserId::new(raw_id).map_err(|err| Error::invalid_request(err.to_string()))?;

    let record = state.bonus.record_bonus(user_id, total_spending).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": format!("Bonus recorded for user {}", record.user_id),
    })))
}
