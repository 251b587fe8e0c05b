//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are filtered by the same session state the guard reads, so users are
//! not offered pages they would be redirected away from. The session is
//! re-read after every location change and starts out anonymous so SSR and
//! hydration render the same markup.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{self, RouteDef};
use crate::state::session::SessionState;
use crate::util::session_store::SessionHandle;

const SHOP_LINKS: &[RouteDef] = &[routes::INDEX, routes::PRODUCT];
const CUSTOMER_LINKS: &[RouteDef] =
    &[routes::CART, routes::FAVORITES, routes::ORDER_HISTORY, routes::PROFILE];
const ADMIN_LINKS: &[RouteDef] = &[
    routes::PRODUCT_ADMIN,
    routes::CATEGORY,
    routes::USERS,
    routes::ADMIN_ORDER,
    routes::REVIEW_MANAGER,
    routes::DASHBOARD_STATS,
];
const ANONYMOUS_LINKS: &[RouteDef] = &[routes::LOGIN, routes::REGISTER];

/// Links visible for `state`, in display order.
pub fn nav_links(state: &SessionState) -> Vec<RouteDef> {
    let mut links = SHOP_LINKS.to_vec();
    if state.is_present() {
        links.extend_from_slice(CUSTOMER_LINKS);
    } else {
        links.extend_from_slice(ANONYMOUS_LINKS);
    }
    if state.is_admin() {
        links.extend_from_slice(ADMIN_LINKS);
    }
    links
}

/// Display label for a route link.
pub fn nav_label(route: &RouteDef) -> &'static str {
    match route.name {
        "index" => "Home",
        "product" => "Products",
        "cart" => "Cart",
        "checkout" => "Checkout",
        "favorites-page" => "Favorites",
        "order-history" => "Orders",
        "profile" => "Profile",
        "productAdmin" => "Manage products",
        "category" => "Categories",
        "user" => "Users",
        "admin-order" => "All orders",
        "review-manager" => "Reviews",
        "dashboard-stats" => "Dashboard",
        "login" => "Sign in",
        "register" => "Register",
        other => other,
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let sessions = expect_context::<SessionHandle>();
    let location = use_location();
    let navigate = use_navigate();
    let session = RwSignal::new(SessionState::Anonymous);

    {
        let sessions = sessions.clone();
        Effect::new(move || {
            location.pathname.track();
            session.set(sessions.current());
        });
    }

    let on_sign_out = move |_| {
        if let Err(e) = sessions.clear() {
            log::warn!("sign out: {e}");
        }
        session.set(SessionState::Anonymous);
        navigate(routes::LOGIN.path, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href=routes::INDEX.path attr:class="navbar__brand">"Storefront"</A>
            <ul class="navbar__links">
                {move || {
                    nav_links(&session.get())
                        .into_iter()
                        .map(|route| view! { <li><A href=route.path>{nav_label(&route)}</A></li> })
                        .collect_view()
                }}
            </ul>
            <button
                class="navbar__sign-out"
                type="button"
                hidden=move || !session.get().is_present()
                on:click=on_sign_out
            >
                "Sign out"
            </button>
        </nav>
    }
}
