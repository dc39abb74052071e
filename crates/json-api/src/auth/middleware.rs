//! Bearer token middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{auth::into_failure, envelope::Failure, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(Failure::unauthorized(
            "Missing or invalid Authorization header",
        ));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(failure) => {
            res.render(failure);
            ctrl.skip_rest();

            return;
        }
    };

    match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => depot.insert_user_uuid(user),
        Err(error) => {
            res.render(into_failure(error, "failed to authenticate bearer token"));
            ctrl.skip_rest();

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}

/// The token from an `Authorization: Bearer <token>` header, if well formed.
pub(crate) fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
