//! Header logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::state::auth::AuthState;

/// Signs the user out at the provider, clears shared auth state, and
/// navigates back to the login page. Local state is dropped even when the
/// provider call fails.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let is_loading = RwSignal::new(false);
    let navigate = use_navigate();

    let on_logout = move |_| {
        if is_loading.get() {
            return;
        }
        is_loading.set(true);
        let token = auth_state
            .get_untracked()
            .session
            .map(|s| s.access_token)
            .unwrap_or_default();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = auth::sign_out(&token).await {
                log::error!("logout failed: {err}");
            }
            auth_state.set(AuthState::signed_out());
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <button
            class="btn btn--danger"
            disabled=move || is_loading.get()
            on:click=on_logout
        >
            {move || if is_loading.get() { "Logging out..." } else { "Logout" }}
        </button>
    }
}
