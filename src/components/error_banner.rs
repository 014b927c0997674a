//! Dismissible error banner for fetch/sync failures.

use leptos::prelude::*;

use crate::state::metrics::MetricsState;

/// Shows the current metrics error, if any, with a dismiss control.
///
/// Fetch and sync failures land here instead of disappearing into the
/// console; prior data stays on screen underneath.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let metrics = expect_context::<RwSignal<MetricsState>>();

    let dismiss = move |_| {
        metrics.update(|state| state.error = None);
    };

    move || {
        metrics.get().error.map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__message">{message}</span>
                    <button class="error-banner__dismiss" on:click=dismiss>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
