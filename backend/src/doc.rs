//! OpenAPI document describing the HTTP surface.

use utoipa::OpenApi;

use crate::domain::{AgeBucket, AverageSpending, TotalSpending, User, UserId};
use crate::inbound::http::bonus::RecordBonusRequest;

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::spending::total_spending,
        crate::inbound::http::spending::average_spending_by_age,
        crate::inbound::http::bonus::record_bonus,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserId,
        AgeBucket,
        TotalSpending,
        AverageSpending,
        RecordBonusRequest
    )),
    tags(
        (name = "spending", description = "Spending aggregation endpoints"),
        (name = "bonus", description = "Bonus ledger endpoints"),
        (name = "users", description = "User listing endpoints"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/total_spending",
            "/average_spending_by_age/{user_id}",
            "/bonus",
            "/users",
            "/users/{user_id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                paths.iter().any(|p| *p == expected),
                "missing path {expected}"
            );
        }
    }

    #[test]
    fn bonus_request_body_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components section present");
        assert!(
            components.schemas.contains_key("RecordBonusRequest"),
            "bonus request body schema missing"
        );
    }
}
