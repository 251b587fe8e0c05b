//! Back-office pages. Every route here is `AdminOnly`.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;

#[component]
pub fn ProductAdminPage() -> impl IntoView {
    view! { <PageShell title="Manage products"/> }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    view! { <PageShell title="Categories"/> }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! { <PageShell title="Users"/> }
}

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    view! { <PageShell title="All orders"/> }
}

#[component]
pub fn DashboardStatsPage() -> impl IntoView {
    view! { <PageShell title="Dashboard"/> }
}

#[component]
pub fn ReviewManagerPage() -> impl IntoView {
    view! { <PageShell title="Reviews"/> }
}
