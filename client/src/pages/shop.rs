//! Public catalog pages.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::page_shell::PageShell;
use crate::routes;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <PageShell title="Storefront">
            <p>"Browse the catalog or sign in to see your cart and orders."</p>
            <A href=routes::PRODUCT.path>"Shop all products"</A>
        </PageShell>
    }
}

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <PageShell title="Products">
            <p class="page__hint">"The product list loads from the catalog service."</p>
        </PageShell>
    }
}

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <PageShell title="Product details">
            <p class="page__hint">"Product #" {product_id}</p>
            <A href=routes::PRODUCT.path>"Back to products"</A>
        </PageShell>
    }
}
