//! Reactive wiring for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages call `install_route_guard` once when they mount. The check
//! runs in an `Effect`, so it only happens in the browser: during SSR no
//! decision is made and guarded content stays unrendered until hydration.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::guard::{NavigationDecision, guard_route};
use crate::routes::RouteDef;
use crate::util::session_store::SessionHandle;

/// Whether guarded content may render for the current decision.
///
/// `None` means the check has not run yet.
pub fn should_render(decision: Option<NavigationDecision>) -> bool {
    decision.is_some_and(NavigationDecision::is_proceed)
}

/// Redirects replace the refused entry so "back" does not bounce into the
/// guard again.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Evaluate the guard for `route` and redirect if it refuses.
pub fn install_route_guard<F>(
    route: RouteDef,
    sessions: SessionHandle,
    decision: RwSignal<Option<NavigationDecision>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let outcome = guard_route(&route, &*sessions);
        decision.set(Some(outcome));
        if let Some(target) = outcome.redirect_target() {
            navigate(target.path(), redirect_options());
        }
    });
}
