use super::*;
use crate::routes::{AccessLevel, ROUTES};
use crate::state::session::Session;
use crate::util::session_store::MemorySessionStore;

const LOGIN: NavigationDecision = NavigationDecision::RedirectTo(RedirectTarget::Login);
const DENIED: NavigationDecision = NavigationDecision::RedirectTo(RedirectTarget::PermissionDenied);

fn customer() -> SessionState {
    SessionState::Authenticated(Session::with_role("customer"))
}

fn admin() -> SessionState {
    SessionState::Authenticated(Session::with_role("admin"))
}

fn all_states() -> Vec<SessionState> {
    vec![SessionState::Anonymous, SessionState::Malformed, customer(), admin()]
}

fn meta(requires_auth: bool, is_admin: bool) -> RouteMeta {
    RouteMeta { requires_auth, is_admin }
}

// =============================================================
// decide: rule properties
// =============================================================

#[test]
fn public_routes_always_proceed() {
    for state in all_states() {
        assert_eq!(decide(meta(false, false), &state), NavigationDecision::Proceed, "{state:?}");
    }
}

#[test]
fn requires_auth_without_session_goes_to_login_regardless_of_admin_flag() {
    for is_admin in [false, true] {
        assert_eq!(decide(meta(true, is_admin), &SessionState::Anonymous), LOGIN);
    }
}

#[test]
fn admin_route_with_non_admin_session_is_denied() {
    for requires_auth in [false, true] {
        assert_eq!(decide(meta(requires_auth, true), &customer()), DENIED);
    }
    let odd_role = SessionState::Authenticated(Session::with_role("ADMIN"));
    assert_eq!(decide(meta(true, true), &odd_role), DENIED);
}

#[test]
fn admin_route_with_admin_session_proceeds() {
    for requires_auth in [false, true] {
        assert_eq!(decide(meta(requires_auth, true), &admin()), NavigationDecision::Proceed);
    }
}

#[test]
fn authenticated_route_with_any_session_proceeds() {
    assert_eq!(decide(meta(true, false), &customer()), NavigationDecision::Proceed);
    assert_eq!(decide(meta(true, false), &admin()), NavigationDecision::Proceed);
}

#[test]
fn admin_flag_alone_without_session_is_denied() {
    assert_eq!(decide(meta(false, true), &SessionState::Anonymous), DENIED);
    assert_eq!(decide(meta(false, true), &SessionState::Malformed), DENIED);
}

#[test]
fn malformed_session_counts_as_absent() {
    assert_eq!(decide(meta(true, false), &SessionState::Malformed), LOGIN);
    assert_eq!(decide(meta(true, true), &SessionState::Malformed), LOGIN);
}

#[test]
fn decide_is_idempotent() {
    for route in ROUTES {
        for state in all_states() {
            assert_eq!(decide(route.meta(), &state), decide(route.meta(), &state));
        }
    }
}

#[test]
fn no_guarded_route_proceeds_without_valid_session() {
    for route in ROUTES.iter().filter(|r| r.access != AccessLevel::Public) {
        for state in [SessionState::Anonymous, SessionState::Malformed] {
            assert!(!decide(route.meta(), &state).is_proceed(), "{} {state:?}", route.name);
        }
    }
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn redirect_targets_point_at_table_routes() {
    assert_eq!(RedirectTarget::Login.path(), "/login");
    assert_eq!(RedirectTarget::PermissionDenied.path(), "/503");
    assert_eq!(RedirectTarget::PermissionDenied.route().name, "permissionDenied");
    assert_eq!(LOGIN.redirect_target(), Some(RedirectTarget::Login));
    assert_eq!(NavigationDecision::Proceed.redirect_target(), None);
}

// =============================================================
// Scenarios through a session provider
// =============================================================

#[test]
fn cart_without_session_redirects_to_login() {
    let store = MemorySessionStore::new();
    assert_eq!(guard_path("/cart", &store), LOGIN);
}

#[test]
fn product_admin_as_customer_is_denied() {
    let store = MemorySessionStore::with_raw(r#"{"role":"customer"}"#);
    assert_eq!(guard_path("/productAdmin", &store), DENIED);
}

#[test]
fn product_admin_as_admin_proceeds() {
    let store = MemorySessionStore::with_raw(r#"{"role":"admin"}"#);
    assert_eq!(guard_path("/productAdmin", &store), NavigationDecision::Proceed);
}

#[test]
fn optional_field_types_do_not_affect_decision() {
    let store = MemorySessionStore::with_raw(r#"{"role":"admin","email":false,"username":42}"#);
    assert_eq!(guard_path("/productAdmin", &store), NavigationDecision::Proceed);

    let store = MemorySessionStore::with_raw(r#"{"role":"customer","token":{"jwt":"x"}}"#);
    assert_eq!(guard_path("/cart", &store), NavigationDecision::Proceed);
    assert_eq!(guard_path("/productAdmin", &store), DENIED);
}

#[test]
fn index_without_session_proceeds() {
    let store = MemorySessionStore::new();
    assert_eq!(guard_path("/", &store), NavigationDecision::Proceed);
}

#[test]
fn profile_with_malformed_session_redirects_to_login() {
    let store = MemorySessionStore::with_raw("{\"role\": admin");
    assert_eq!(guard_path("/profile", &store), LOGIN);
}

#[test]
fn unknown_path_proceeds_to_fallback() {
    let store = MemorySessionStore::new();
    assert_eq!(guard_path("/does-not-exist", &store), NavigationDecision::Proceed);
}

#[test]
fn login_then_logout_flips_decision() {
    let store = MemorySessionStore::new();
    assert_eq!(guard_route(&routes::CHECKOUT, &store), LOGIN);

    store.store(&Session::with_role("customer")).unwrap();
    assert_eq!(guard_route(&routes::CHECKOUT, &store), NavigationDecision::Proceed);
    assert_eq!(guard_route(&routes::DASHBOARD_STATS, &store), DENIED);

    store.clear().unwrap();
    assert_eq!(guard_route(&routes::CHECKOUT, &store), LOGIN);
}

#[test]
fn guard_does_not_mutate_session() {
    let store = MemorySessionStore::with_raw("garbage");
    let _ = guard_path("/profile", &store);
    let _ = guard_path("/productAdmin", &store);
    assert_eq!(store.read_raw().as_deref(), Some("garbage"));
}
