//! Route guard for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, should_redirect};

/// Wraps protected routes: bounces to `/login` once the session restore has
/// settled without a user, renders children while a user is present.
#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect whenever auth settles without a session. The effect is owned
    // by this component's scope and stops on unmount.
    Effect::new(move || {
        if should_redirect(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || auth.get().user.map(|_| children())
}
