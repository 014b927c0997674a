//! Metrics payload presentation.

use leptos::prelude::*;

use crate::state::metrics::MetricsState;

/// Renders the aggregated metrics payload for the selected team, with the
/// platform baseline team's payload alongside when one was fetched.
///
/// The payload shape is owned by the backend and passed through unmodified,
/// so this renders it opaquely: a row count for array payloads and the
/// pretty-printed body.
#[component]
pub fn MetricsSection() -> impl IntoView {
    let metrics = expect_context::<RwSignal<MetricsState>>();

    let summary = move || {
        metrics
            .get()
            .data
            .as_ref()
            .and_then(|data| data.as_array().map(Vec::len))
            .map(|count| format!("{count} developers"))
    };

    let baseline_summary = move || {
        metrics
            .get()
            .baseline
            .as_ref()
            .and_then(|data| data.as_array().map(Vec::len))
            .map(|count| format!("Platform baseline: {count} developers"))
    };

    let body = move || {
        metrics
            .get()
            .data
            .as_ref()
            .map(|data| serde_json::to_string_pretty(data).unwrap_or_default())
    };

    view! {
        <section class="metrics-section">
            <header class="metrics-section__header">
                <h2>"Team metrics"</h2>
                <span class="metrics-section__summary">{summary}</span>
                <span class="metrics-section__baseline">{baseline_summary}</span>
            </header>
            <Show
                when=move || !metrics.get().loading
                fallback=|| view! { <p class="metrics-section__loading">"Loading metrics..."</p> }
            >
                {move || {
                    body()
                        .map(|text| view! { <pre class="metrics-section__payload">{text}</pre> })
                }}
            </Show>
        </section>
    }
}
