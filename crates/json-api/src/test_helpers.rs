//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use haven_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        bookings::MockBookingsService,
        properties::MockPropertiesService,
        users::{
            MockUsersService,
            records::{GrantStatus, Role, UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_user(uuid: UserUuid, email: &str, role: Role) -> UserRecord {
    UserRecord {
        uuid,
        name: "Ada".to_string(),
        email: email.to_string(),
        password_hash: TEST_PASSWORD_HASH.to_string(),
        role,
        grant_status: GrantStatus::for_role(role),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_create_user().never();
    users.expect_find_user_by_email().never();
    users.expect_get_user().never();
    users.expect_update_password().never();
    users.expect_set_grant_status().never();

    users
}

fn strict_properties_mock() -> MockPropertiesService {
    let mut properties = MockPropertiesService::new();

    properties.expect_list_properties().never();
    properties.expect_create_property().never();

    properties
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_create_booking().never();
    bookings.expect_list_bookings_for_tenant().never();

    bookings
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_register().never();
    auth.expect_login().never();
    auth.expect_reset_password().never();
    auth.expect_authenticate_bearer().never();

    auth
}

/// Service mocks for one test. Anything left at its default rejects every call.
pub(crate) struct Mocks {
    pub users: MockUsersService,
    pub properties: MockPropertiesService,
    pub bookings: MockBookingsService,
    pub auth: MockAuthService,
    pub legacy_compat: bool,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            users: strict_users_mock(),
            properties: strict_properties_mock(),
            bookings: strict_bookings_mock(),
            auth: strict_auth_mock(),
            legacy_compat: false,
        }
    }
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext::from_services(
            Arc::new(self.users),
            Arc::new(self.properties),
            Arc::new(self.bookings),
            Arc::new(self.auth),
        );

        State::shared(app, self.legacy_compat)
    }

    /// `route` behind injected state, as the real router mounts it.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Like [`Mocks::service`], with [`TEST_USER_UUID`] already authenticated.
    pub(crate) fn authenticated_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}
