//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every guarded route renders. The decision is a pure function
//! of the route's access flags and the session state; reading storage and
//! performing the redirect live in `util::guard`.
//!
//! RULES (first match wins)
//! ========================
//! 1. `requires_auth` and no valid session: redirect to `login`.
//! 2. `is_admin` and the session is not an admin one: redirect to
//!    `permissionDenied`.
//! 3. Otherwise proceed.
//!
//! A stored value that fails to parse counts as "no session" for both rules.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, RouteDef, RouteMeta};
use crate::state::session::SessionState;
use crate::util::session_store::SessionProvider;

/// Where a refused navigation is sent instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    PermissionDenied,
}

impl RedirectTarget {
    pub fn route(self) -> &'static RouteDef {
        match self {
            Self::Login => &routes::LOGIN,
            Self::PermissionDenied => &routes::PERMISSION_DENIED,
        }
    }

    pub fn path(self) -> &'static str {
        self.route().path
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    RedirectTo(RedirectTarget),
}

impl NavigationDecision {
    pub fn is_proceed(self) -> bool {
        self == Self::Proceed
    }

    pub fn redirect_target(self) -> Option<RedirectTarget> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo(target) => Some(target),
        }
    }
}

/// Decide whether a transition to a route with `meta` may proceed.
pub fn decide(meta: RouteMeta, session: &SessionState) -> NavigationDecision {
    if meta.requires_auth && !session.is_present() {
        return NavigationDecision::RedirectTo(RedirectTarget::Login);
    }
    if meta.is_admin && !session.is_admin() {
        return NavigationDecision::RedirectTo(RedirectTarget::PermissionDenied);
    }
    NavigationDecision::Proceed
}

/// Read the current session from `sessions` and decide for `route`.
pub fn guard_route(route: &RouteDef, sessions: &dyn SessionProvider) -> NavigationDecision {
    let session = sessions.current();
    if session == SessionState::Malformed {
        log::warn!("stored session is malformed; treating as signed out");
    }
    let decision = decide(route.meta(), &session);
    if let Some(target) = decision.redirect_target() {
        log::debug!("navigation to {} redirected to {}", route.name, target.route().name);
    }
    decision
}

/// Decide for a raw location. Paths outside the route table proceed so the
/// router fallback can render them.
pub fn guard_path(location: &str, sessions: &dyn SessionProvider) -> NavigationDecision {
    routes::resolve(location).map_or(NavigationDecision::Proceed, |route| guard_route(route, sessions))
}
