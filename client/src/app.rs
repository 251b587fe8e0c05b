//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{guarded::Guarded, nav_bar::NavBar};
use crate::pages::{
    account::{CartPage, CheckoutPage, FavoritesPage, OrderHistoryPage, ProfilePage},
    admin::{
        AdminOrdersPage, CategoryPage, DashboardStatsPage, ProductAdminPage, ReviewManagerPage, UsersPage,
    },
    auth::{ForgotPasswordPage, LoginPage, RegisterPage},
    permission_denied::PermissionDeniedPage,
    shop::{DetailPage, IndexPage, ProductPage},
};
use crate::routes::{self, RouteDef};
use crate::util::session_store::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and declares every route in
/// [`routes::ROUTES`]. Each view goes through [`guarded`], so access follows
/// the route table entry.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionHandle::browser());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=guarded(routes::INDEX, IndexPage)/>
                    <Route path=StaticSegment("product") view=guarded(routes::PRODUCT, ProductPage)/>
                    <Route
                        path=(StaticSegment("product"), ParamSegment("id"))
                        view=guarded(routes::DETAIL, DetailPage)
                    />

                    <Route path=StaticSegment("productAdmin") view=guarded(routes::PRODUCT_ADMIN, ProductAdminPage)/>
                    <Route path=StaticSegment("category") view=guarded(routes::CATEGORY, CategoryPage)/>
                    <Route path=StaticSegment("user") view=guarded(routes::USERS, UsersPage)/>
                    <Route path=StaticSegment("admin-order") view=guarded(routes::ADMIN_ORDER, AdminOrdersPage)/>
                    <Route
                        path=StaticSegment("dashboard-stats")
                        view=guarded(routes::DASHBOARD_STATS, DashboardStatsPage)
                    />
                    <Route
                        path=StaticSegment("review-manager")
                        view=guarded(routes::REVIEW_MANAGER, ReviewManagerPage)
                    />

                    <Route path=StaticSegment("profile") view=guarded(routes::PROFILE, ProfilePage)/>
                    <Route path=StaticSegment("cart") view=guarded(routes::CART, CartPage)/>
                    <Route path=StaticSegment("checkout") view=guarded(routes::CHECKOUT, CheckoutPage)/>
                    <Route path=StaticSegment("order-history") view=guarded(routes::ORDER_HISTORY, OrderHistoryPage)/>
                    <Route path=StaticSegment("favorites-page") view=guarded(routes::FAVORITES, FavoritesPage)/>

                    <Route path=StaticSegment("login") view=guarded(routes::LOGIN, LoginPage)/>
                    <Route path=StaticSegment("register") view=guarded(routes::REGISTER, RegisterPage)/>
                    <Route
                        path=StaticSegment("forgot-password")
                        view=guarded(routes::FORGOT_PASSWORD, ForgotPasswordPage)
                    />
                    <Route path=StaticSegment("503") view=guarded(routes::PERMISSION_DENIED, PermissionDeniedPage)/>
                </Routes>
            </main>
        </Router>
    }
}

/// Route view for `page`, gated by `route.access`.
fn guarded<F, V>(route: RouteDef, page: F) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    F: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + Send + 'static,
{
    move || {
        let page = page.clone();
        view! { <Guarded route=route>{page()}</Guarded> }.into_any()
    }
}
