//! Login page with email/password sign-in against the identity provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::sign_in;
use crate::state::auth::AuthState;

/// Email/password sign-in form.
///
/// Provider failures surface as inline text and keep the user on this page;
/// success updates the shared auth state and navigates to the dashboard root.
/// Already-authenticated visitors are bounced straight to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    // Redirect if already logged in.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = auth.get();
            if !state.loading && state.user.is_some() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let form_valid = move || {
        !email.get().is_empty() && !password.get().is_empty() && !is_loading.get()
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid() {
            return;
        }
        error.set(None);
        is_loading.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&email.get_untracked(), &password.get_untracked()).await {
                Ok(session) => {
                    auth.set(AuthState::signed_in(session));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">
                    "Enter your email and password below to sign in to your account"
                </p>
                <form class="login-form" on:submit=submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-form__input"
                            type="email"
                            placeholder="name@example.com"
                            prop:value=move || email.get()
                            prop:disabled=move || is_loading.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-form__input"
                            type="password"
                            placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                            prop:value=move || password.get()
                            prop:disabled=move || is_loading.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! { <div class="login-form__error" role="alert">{message}</div> }
                            })
                    }}
                    <button
                        class="btn btn--primary login-form__submit"
                        type="submit"
                        prop:disabled=move || !form_valid()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Don't have an account? Contact your administrator"
                </p>
            </div>
        </div>
    }
}
