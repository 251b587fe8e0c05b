//! Signed-in customer pages. Every route here is `Authenticated`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_shell::PageShell;
use crate::routes;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <PageShell title="Profile">
            <A href=routes::ORDER_HISTORY.path>"Order history"</A>
        </PageShell>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <PageShell title="Cart">
            <A href=routes::CHECKOUT.path attr:class="page__action">"Proceed to checkout"</A>
        </PageShell>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <PageShell title="Checkout">
            <A href=routes::CART.path>"Back to cart"</A>
        </PageShell>
    }
}

#[component]
pub fn OrderHistoryPage() -> impl IntoView {
    view! { <PageShell title="Order history"/> }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! { <PageShell title="Favorites"/> }
}
