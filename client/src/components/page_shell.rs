//! Common page frame: document title plus a heading above the page body.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn PageShell(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <Title text=title.clone()/>
        <section class="page">
            <h1 class="page__title">{title}</h1>
            <div class="page__body">{children.map(|children| children())}</div>
        </section>
    }
}
