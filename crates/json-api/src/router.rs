//! App Router

use std::{path::Path, sync::Arc};

use salvo::{
    affix_state::inject,
    cors::{self, Cors},
    prelude::*,
    serve_static::StaticDir,
    trailing_slash::remove_slash,
};

use crate::{
    auth, bookings, healthcheck,
    observability::{metrics_handler, request_logging},
    properties,
    state::State,
    users,
};

/// The marketplace endpoints, all under `/api/user`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api/user")
        .push(Router::with_path("register").post(users::register::handler))
        .push(Router::with_path("login").post(users::login::handler))
        .push(Router::with_path("forgotpassword").post(users::forgot_password::handler))
        .push(
            Router::with_path("getuserdata")
                .hoop(auth::middleware::handler)
                .post(users::current::handler),
        )
        .push(Router::with_path("getAllProperties").get(properties::index::handler))
        .push(Router::with_path("bookinghandle/{propertyid}").post(bookings::create::handler))
        .push(Router::with_path("getallbookings").post(bookings::index::handler))
}

pub(crate) fn app_router(state: Arc<State>, uploads_dir: &Path) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("uploads/{**path}")
                .get(StaticDir::new(uploads_dir.to_path_buf())),
        )
        .push(api_router())
}

/// Wrap the router with permissive CORS so preflight requests are answered
/// even for paths without an `OPTIONS` route.
pub(crate) fn service(router: Router) -> Service {
    let cors = Cors::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
        .into_handler();

    Service::new(router).hoop(cors)
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use haven_app::{
        auth::MockAuthService,
        domain::{
            bookings::{
                MockBookingsService,
                records::{BookingRecord, BookingUuid},
            },
            properties::MockPropertiesService,
            users::{MockUsersService, records::Role},
        },
    };
    use jiff::Timestamp;
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::test_helpers::{Mocks, TEST_USER_UUID, make_user};

    use super::*;

    fn make_service(mocks: Mocks, uploads_dir: &Path) -> Service {
        service(app_router(mocks.into_state(), uploads_dir))
    }

    #[tokio::test]
    async fn test_register_list_book_and_list_bookings() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register()
            .once()
            .withf(|registration| registration.role == Role::Owner)
            .return_once(|_| Ok(make_user(TEST_USER_UUID, "a@x.com", Role::Owner)));

        let mut properties = MockPropertiesService::new();

        properties
            .expect_list_properties()
            .once()
            .return_once(|| Ok(vec![]));

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_create_booking()
            .once()
            .withf(|booking| booking.property_id == "123" && booking.tenant_id == "u1")
            .return_once(|booking| {
                Ok(BookingRecord {
                    uuid: booking.uuid,
                    property_id: booking.property_id,
                    tenant_id: booking.tenant_id,
                    owner_id: booking.owner_id,
                    tenant_name: booking.tenant_name,
                    tenant_phone: booking.tenant_phone,
                    status: booking.status,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        bookings
            .expect_list_bookings_for_tenant()
            .once()
            .withf(|tenant| tenant == "u1")
            .return_once(|tenant| {
                Ok(vec![BookingRecord {
                    uuid: BookingUuid::new(),
                    property_id: "123".to_string(),
                    tenant_id: tenant.to_string(),
                    owner_id: "o1".to_string(),
                    tenant_name: "A".to_string(),
                    tenant_phone: "555".to_string(),
                    status: "pending".to_string(),
                    created_at: Timestamp::UNIX_EPOCH,
                }])
            });

        let service = make_service(
            Mocks {
                auth,
                properties,
                bookings,
                ..Mocks::default()
            },
            &env::temp_dir(),
        );

        let res = TestClient::post("http://example.com/api/user/register")
            .json(&json!({ "email": "a@x.com", "password": "pw", "type": "Owner" }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let res = TestClient::get("http://example.com/api/user/getAllProperties")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let res = TestClient::post("http://example.com/api/user/bookinghandle/123")
            .json(&json!({
                "userDetails": { "fullName": "A", "phone": "555" },
                "userId": "u1",
                "ownerId": "o1",
                "status": "pending",
            }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let mut res = TestClient::post("http://example.com/api/user/getallbookings")
            .json(&json!({ "userId": "u1" }))
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"][0]["bookingStatus"], "pending");

        Ok(())
    }

    #[tokio::test]
    async fn test_identity_lookup_requires_bearer_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let service = make_service(
            Mocks {
                auth,
                ..Mocks::default()
            },
            &env::temp_dir(),
        );

        let res = TestClient::post("http://example.com/api/user/getuserdata")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_identity_lookup_with_token_reaches_handler() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(TEST_USER_UUID));

        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|uuid| Ok(make_user(uuid, "a@x.com", Role::Tenant)));

        let service = make_service(
            Mocks {
                auth,
                users,
                ..Mocks::default()
            },
            &env::temp_dir(),
        );

        let mut res = TestClient::post("http://example.com/api/user/getuserdata")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"]["email"], "a@x.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_uploads_are_served_from_disk() -> TestResult {
        let uploads_dir = env::temp_dir().join(format!("haven-uploads-{}", Uuid::now_v7()));

        fs::create_dir_all(&uploads_dir)?;
        fs::write(uploads_dir.join("front.txt"), "front door")?;

        let service = make_service(Mocks::default(), &uploads_dir);

        let mut res = TestClient::get("http://example.com/uploads/front.txt")
            .send(&service)
            .await;

        let body = res.take_string().await?;

        fs::remove_dir_all(&uploads_dir)?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, "front door");

        Ok(())
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() -> TestResult {
        let service = make_service(Mocks::default(), &env::temp_dir());

        let res = TestClient::get("http://example.com/healthcheck")
            .add_header("origin", "http://localhost:3000", true)
            .send(&service)
            .await;

        let allow_origin = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(allow_origin, Some("*"));

        Ok(())
    }
}
