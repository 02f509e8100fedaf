//! User listing handlers.
//!
//! Thin reads over the `UserStore` port; no aggregation logic lives here.
//!
//! ```text
//! GET /users
//! GET /users/35
//! ```

use actix_web::{get, web, HttpResponse};

use crate::domain::{Error, User, UserId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Store failure")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(|err| Error::store(err.to_string()))?;
    Ok(web::Json(users))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Subject user identifier")
    ),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Malformed user_id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner())?;
    let user = state
        .users
        .find_user_by_id(user_id)
        .await
        .map_err(|err| Error::store(err.to_string()))?
        .ok_or_else(|| Error::not_found("User not found"))?;
    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_fixtures::{seeded_state, state_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[actix_rt::test]
    async fn lists_every_seeded_user() {
        let app = actix_test::init_service(state_app(seeded_state())).await;
        let request = actix_test::TestRequest::get().uri("/users").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[rstest]
    #[actix_rt::test]
    async fn fetches_user_by_id_with_identity_fields() {
        let app = actix_test::init_service(state_app(seeded_state())).await;
        let request = actix_test::TestRequest::get().uri("/users/35").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["user_id"], 35);
        assert_eq!(body["name"], "Tracy Orozco");
        assert_eq!(body["email"], "tracy_orozco@example.com");
        assert_eq!(body["age"], 36);
    }

    #[rstest]
    #[actix_rt::test]
    async fn unknown_user_is_404() {
        let app = actix_test::init_service(state_app(seeded_state())).await;
        let request = actix_test::TestRequest::get().uri("/users/9999").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
