//! Navigable routes and the pre-navigation guard
//!
//! The route table mirrors the web application's pages; the guard is a
//! pure decision function over route metadata and a session snapshot,
//! evaluated in a fixed order where the first matching rule wins.

use crate::api::models::Role;
use crate::session::SessionSnapshot;

/// Route paths
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ADMIN_HOME: &str = "/admin";
    pub const VIDEOS: &str = "/videos";
    pub const VIDEO_UPLOAD: &str = "/videos/upload";
    pub const VIDEO_DETAILS: &str = "/videos/:id";
    pub const STUDENTS: &str = "/students";
    pub const ADMIN_REQUESTS: &str = "/admin/requests";
    pub const ADMIN_REPORTS: &str = "/admin/reports";
    pub const PROFILE: &str = "/profile";
}

/// Static metadata attached to a route definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub admin_only: bool,
    pub title: Option<&'static str>,
}

pub const ROUTES: &[RouteMeta] = &[
    RouteMeta {
        path: paths::HOME,
        name: "Landing",
        requires_auth: false,
        admin_only: false,
        title: Some("Home"),
    },
    RouteMeta {
        path: paths::LOGIN,
        name: "Login",
        requires_auth: false,
        admin_only: false,
        title: None,
    },
    RouteMeta {
        path: paths::REGISTER,
        name: "Register",
        requires_auth: false,
        admin_only: false,
        title: None,
    },
    RouteMeta {
        path: paths::DASHBOARD,
        name: "Dashboard",
        requires_auth: true,
        admin_only: false,
        title: Some("Dashboard"),
    },
    RouteMeta {
        path: paths::VIDEOS,
        name: "Videos",
        requires_auth: true,
        admin_only: false,
        title: Some("Videos"),
    },
    RouteMeta {
        path: paths::VIDEO_UPLOAD,
        name: "UploadVideo",
        requires_auth: true,
        admin_only: true,
        title: Some("Upload Video"),
    },
    RouteMeta {
        path: paths::VIDEO_DETAILS,
        name: "VideoDetails",
        requires_auth: true,
        admin_only: false,
        title: Some("Video Details"),
    },
    RouteMeta {
        path: paths::STUDENTS,
        name: "Students",
        requires_auth: true,
        admin_only: true,
        title: Some("Students"),
    },
    RouteMeta {
        path: paths::ADMIN_REQUESTS,
        name: "AdminRequests",
        requires_auth: true,
        admin_only: true,
        title: Some("Access Requests"),
    },
    RouteMeta {
        path: paths::ADMIN_REPORTS,
        name: "AdminReports",
        requires_auth: true,
        admin_only: true,
        title: Some("Reports"),
    },
    RouteMeta {
        path: paths::PROFILE,
        name: "Profile",
        requires_auth: true,
        admin_only: false,
        title: Some("My Profile"),
    },
];

/// Catch-all for unknown paths
pub const NOT_FOUND: RouteMeta = RouteMeta {
    path: "*",
    name: "NotFound",
    requires_auth: false,
    admin_only: false,
    title: Some("Not Found"),
};

/// Resolve a concrete path against the route table.
///
/// Fixed routes win over parameterized ones, so `/videos/upload` resolves
/// to the upload route and not `/videos/:id`.
pub fn resolve(path: &str) -> &'static RouteMeta {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .or_else(|| {
            ROUTES
                .iter()
                .filter(|route| route.path.contains(':'))
                .find(|route| pattern_matches(route.path, path))
        })
        .unwrap_or(&NOT_FOUND)
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    if actual.is_empty() {
                        return false;
                    }
                } else if expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Outcome of the pre-navigation guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed, applying the route's display title as a side effect
    Allow { title: Option<&'static str> },
    /// Abort the navigation and go here instead
    Redirect(&'static str),
}

/// Decide whether a navigation may proceed.
///
/// Rules, first match wins:
/// 1. route requires auth and the session is unauthenticated -> login
/// 2. route is admin-only and the session is not admin -> dashboard
/// 3. login/register while authenticated -> role landing page
/// 4. allow
pub fn guard(route: &RouteMeta, session: &SessionSnapshot) -> GuardDecision {
    if route.requires_auth && !session.authenticated {
        return GuardDecision::Redirect(paths::LOGIN);
    }

    if route.admin_only && !session.is_admin {
        return GuardDecision::Redirect(paths::DASHBOARD);
    }

    if (route.path == paths::LOGIN || route.path == paths::REGISTER) && session.authenticated {
        return GuardDecision::Redirect(if session.is_admin {
            paths::ADMIN_HOME
        } else {
            paths::DASHBOARD
        });
    }

    GuardDecision::Allow { title: route.title }
}

/// Landing route after a successful login or registration
pub fn landing(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN_HOME,
        Role::Student => paths::DASHBOARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_path() {
        assert_eq!(resolve("/dashboard").name, "Dashboard");
        assert_eq!(resolve("/admin/requests").name, "AdminRequests");
    }

    #[test]
    fn test_resolve_prefers_fixed_over_param() {
        assert_eq!(resolve("/videos/upload").name, "UploadVideo");
        assert_eq!(resolve("/videos/abc123").name, "VideoDetails");
    }

    #[test]
    fn test_resolve_unknown_is_not_found() {
        assert_eq!(resolve("/nope").name, "NotFound");
        assert_eq!(resolve("/videos/a/b").name, "NotFound");
    }

    #[test]
    fn test_guard_unauthenticated_goes_to_login() {
        let session = SessionSnapshot {
            authenticated: false,
            is_admin: false,
        };
        assert_eq!(
            guard(resolve("/videos"), &session),
            GuardDecision::Redirect(paths::LOGIN)
        );
    }

    #[test]
    fn test_guard_allows_public_route() {
        let session = SessionSnapshot {
            authenticated: false,
            is_admin: false,
        };
        assert_eq!(
            guard(resolve("/"), &session),
            GuardDecision::Allow { title: Some("Home") }
        );
    }

    #[test]
    fn test_landing_by_role() {
        assert_eq!(landing(Role::Admin), paths::ADMIN_HOME);
        assert_eq!(landing(Role::Student), paths::DASHBOARD);
    }
}
