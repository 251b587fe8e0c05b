//! Route wrapper that runs the navigation guard before rendering a page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::guard::NavigationDecision;
use crate::routes::{AccessLevel, RouteDef};
use crate::util::guard::{install_route_guard, should_render};
use crate::util::session_store::SessionHandle;

/// Render `children` only after the guard lets `route` proceed.
///
/// Public routes render immediately, including during SSR. Refused
/// navigations are redirected by the guard; nothing is rendered in the
/// meantime.
#[component]
pub fn Guarded(route: RouteDef, children: ChildrenFn) -> impl IntoView {
    if route.access == AccessLevel::Public {
        return children().into_any();
    }

    let sessions = expect_context::<SessionHandle>();
    let decision = RwSignal::new(None::<NavigationDecision>);
    install_route_guard(route, sessions, decision, use_navigate());

    (move || should_render(decision.get()).then(|| children())).into_any()
}
