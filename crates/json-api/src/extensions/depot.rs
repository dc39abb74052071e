//! Depot helper extensions.

use std::any::Any;

use haven_app::domain::users::records::UserUuid;
use salvo::prelude::Depot;
use tracing::error;

use crate::envelope::Failure;

const USER_UUID_DEPOT_KEY: &str = "user_uuid";

/// Typed access to values stashed in the depot by middleware.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, Failure>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    fn user_uuid_or_401(&self) -> Result<UserUuid, Failure>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, Failure> {
        self.obtain::<T>().map_err(|_missing| {
            error!("{} missing from depot", std::any::type_name::<T>());

            Failure::internal()
        })
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_DEPOT_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, Failure> {
        self.get::<UserUuid>(USER_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_missing| Failure::unauthorized("Authentication required"))
    }
}
