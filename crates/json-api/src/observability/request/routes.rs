//! Route labels for metrics and spans.
//!
//! Paths carrying client-chosen identifiers are collapsed onto their route
//! pattern, and anything that matches no route shares one label, so metric
//! label cardinality stays bounded.

const BOOKING_PREFIX: &str = "/api/user/bookinghandle/";
const UPLOADS_PREFIX: &str = "/uploads/";

/// Label for paths no route serves.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

const FIXED_ROUTES: [&str; 8] = [
    "/healthcheck",
    "/metrics",
    "/api/user/register",
    "/api/user/login",
    "/api/user/forgotpassword",
    "/api/user/getuserdata",
    "/api/user/getAllProperties",
    "/api/user/getallbookings",
];

pub(super) fn route_label(path: &str) -> String {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if let Some(id) = path.strip_prefix(BOOKING_PREFIX)
        && !id.is_empty()
        && !id.contains('/')
    {
        return format!("{BOOKING_PREFIX}{{propertyid}}");
    }

    if path.starts_with(UPLOADS_PREFIX) {
        return format!("{UPLOADS_PREFIX}{{path}}");
    }

    if FIXED_ROUTES.contains(&path) {
        path.to_owned()
    } else {
        UNMATCHED_ROUTE.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_paths_collapse_to_pattern() {
        assert_eq!(
            route_label("/api/user/bookinghandle/123"),
            "/api/user/bookinghandle/{propertyid}"
        );
    }

    #[test]
    fn upload_paths_collapse_to_pattern() {
        assert_eq!(route_label("/uploads/a/b.jpg"), "/uploads/{path}");
    }

    #[test]
    fn fixed_paths_are_unchanged() {
        assert_eq!(route_label("/api/user/login"), "/api/user/login");
        assert_eq!(route_label("/api/user/login/"), "/api/user/login");
    }

    #[test]
    fn unknown_paths_share_one_label() {
        for path in ["/wp-login.php", "/api/user/nope", "/", "/api/user/bookinghandle/1/x"] {
            assert_eq!(route_label(path), UNMATCHED_ROUTE, "{path}");
        }
    }
}
