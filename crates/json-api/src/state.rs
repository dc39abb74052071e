//! State

use std::sync::Arc;

use haven_app::context::AppContext;

/// Shared, read-only handler state.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Unauthenticated password resets and unredacted identity lookups.
    pub(crate) legacy_compat: bool,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, legacy_compat: bool) -> Self {
        Self { app, legacy_compat }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, legacy_compat: bool) -> Arc<Self> {
        Arc::new(Self::new(app, legacy_compat))
    }
}
