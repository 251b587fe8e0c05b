//! Target of refused admin-only navigations.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_shell::PageShell;
use crate::routes;

#[component]
pub fn PermissionDeniedPage() -> impl IntoView {
    view! {
        <PageShell title="Access denied">
            <p>"Your account does not have permission to open this page."</p>
            <A href=routes::INDEX.path>"Return to the storefront"</A>
        </PageShell>
    }
}
