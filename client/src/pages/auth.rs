//! Sign-in, registration and password reset screens.
//!
//! The credential exchange itself belongs to the auth backend; on success it
//! writes the user record through `SessionProvider::store`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_shell::PageShell;
use crate::routes;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageShell title="Sign in">
            <div class="login-card">
                <A href=routes::REGISTER.path>"Create an account"</A>
                <A href=routes::FORGOT_PASSWORD.path>"Forgot your password?"</A>
            </div>
        </PageShell>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PageShell title="Register">
            <A href=routes::LOGIN.path>"Already have an account? Sign in"</A>
        </PageShell>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <PageShell title="Reset password">
            <A href=routes::LOGIN.path>"Back to sign in"</A>
        </PageShell>
    }
}
