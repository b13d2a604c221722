//! Route guard decision table tests

use course2ceo::api::models::Role;
use course2ceo::router::{guard, landing, paths, resolve, GuardDecision, RouteMeta, ROUTES};
use course2ceo::session::SessionSnapshot;

const ANONYMOUS: SessionSnapshot = SessionSnapshot {
    authenticated: false,
    is_admin: false,
};
const STUDENT: SessionSnapshot = SessionSnapshot {
    authenticated: true,
    is_admin: false,
};
const ADMIN: SessionSnapshot = SessionSnapshot {
    authenticated: true,
    is_admin: true,
};

#[test]
fn test_unauthenticated_always_redirects_to_login_when_auth_required() {
    for route in ROUTES.iter().filter(|route| route.requires_auth) {
        assert_eq!(
            guard(route, &ANONYMOUS),
            GuardDecision::Redirect(paths::LOGIN),
            "route {} should send anonymous users to login",
            route.path
        );
    }
}

#[test]
fn test_admin_only_never_shows_login_to_authenticated_student() {
    // Rule ordering: the student is authenticated, so the admin check
    // fires and the decision is the dashboard, never the login page.
    for route in ROUTES.iter().filter(|route| route.admin_only) {
        assert_eq!(
            guard(route, &STUDENT),
            GuardDecision::Redirect(paths::DASHBOARD),
            "route {} should send students to the dashboard",
            route.path
        );
    }
}

#[test]
fn test_unauthenticated_on_admin_route_hits_auth_rule_first() {
    let upload = resolve("/videos/upload");
    assert!(upload.admin_only);
    assert_eq!(guard(upload, &ANONYMOUS), GuardDecision::Redirect(paths::LOGIN));
}

#[test]
fn test_admin_passes_admin_only_routes() {
    for route in ROUTES.iter().filter(|route| route.admin_only) {
        assert_eq!(guard(route, &ADMIN), GuardDecision::Allow { title: route.title });
    }
}

#[test]
fn test_login_redirects_away_by_role() {
    let login = resolve("/login");
    assert_eq!(guard(login, &ADMIN), GuardDecision::Redirect(paths::ADMIN_HOME));
    assert_eq!(guard(login, &STUDENT), GuardDecision::Redirect(paths::DASHBOARD));
    assert_eq!(guard(login, &ANONYMOUS), GuardDecision::Allow { title: None });
}

#[test]
fn test_register_redirects_away_by_role() {
    let register = resolve("/register");
    assert_eq!(
        guard(register, &ADMIN),
        GuardDecision::Redirect(paths::ADMIN_HOME)
    );
    assert_eq!(
        guard(register, &STUDENT),
        GuardDecision::Redirect(paths::DASHBOARD)
    );
}

#[test]
fn test_allow_carries_display_title() {
    let dashboard = resolve("/dashboard");
    assert_eq!(
        guard(dashboard, &STUDENT),
        GuardDecision::Allow {
            title: Some("Dashboard")
        }
    );
}

#[test]
fn test_public_routes_open_to_everyone() {
    let home = resolve("/");
    assert_eq!(guard(home, &ANONYMOUS), GuardDecision::Allow { title: Some("Home") });
    assert_eq!(guard(home, &ADMIN), GuardDecision::Allow { title: Some("Home") });
}

#[test]
fn test_admin_only_implies_requires_auth_in_table() {
    for route in ROUTES.iter().filter(|route| route.admin_only) {
        assert!(route.requires_auth, "{} is admin-only but public", route.path);
    }
}

#[test]
fn test_resolve_video_details_param() {
    let route: &RouteMeta = resolve("/videos/64f1c2");
    assert_eq!(route.name, "VideoDetails");
    assert!(route.requires_auth);
    assert!(!route.admin_only);
}

#[test]
fn test_resolve_catch_all() {
    let route = resolve("/definitely/not/a/route");
    assert_eq!(route.name, "NotFound");
    assert_eq!(guard(route, &ANONYMOUS), GuardDecision::Allow { title: Some("Not Found") });
}

#[test]
fn test_landing_routes() {
    assert_eq!(landing(Role::Admin), paths::ADMIN_HOME);
    assert_eq!(landing(Role::Student), paths::DASHBOARD);
}
