//! Dashboard page: team picker, date-range controls, sync trigger, metrics.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::logout_button::LogoutButton;
use crate::components::metrics_section::MetricsSection;
use crate::config;
use crate::net::api;
use crate::state::date_range::{
    DateRangeMode, DateRangeState, RangeParams, current_year, resolve_params,
};
use crate::state::metrics::{MetricsState, fetch_plan};
use crate::state::teams::TeamsState;
use crate::util::storage;

/// Main dashboard behind the session guard.
///
/// DATA FLOW
/// =========
/// One effect owns all metrics fetches: it re-runs whenever the selected
/// team, mode, quarter, year, or either custom date changes, resolves the
/// range through [`resolve_params`], and dispatches at most one fetch per
/// change. Validation errors land in `date_error` and suppress the fetch;
/// network failures land in the shared error banner.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let teams = expect_context::<RwSignal<TeamsState>>();
    let metrics = expect_context::<RwSignal<MetricsState>>();

    let selected_team = RwSignal::new(None::<String>);
    let range = RwSignal::new(DateRangeState::default());
    let date_error = RwSignal::new(None::<String>);

    // On mount: restore the persisted team selection and load the team list.
    Effect::new(move || {
        if let Some(saved) = storage::read_selected_team() {
            selected_team.set(Some(saved));
        }
        load_teams(teams, metrics);
    });

    // Reactive resolver: re-runs after any range input or the team changes.
    Effect::new(move || {
        let resolved = resolve_params(&range.get());
        date_error.set(resolved.as_ref().err().map(ToString::to_string));
        if let Some((team_id, params)) = fetch_plan(selected_team.get().as_deref(), &resolved) {
            dispatch_fetch(metrics, team_id, params);
        }
    });

    let on_team_change = move |ev| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            selected_team.set(None);
        } else {
            storage::write_selected_team(&value);
            selected_team.set(Some(value));
        }
    };

    let on_mode_change = move |ev| {
        let selected = match event_target_value(&ev).as_str() {
            "custom" => DateRangeMode::Custom,
            _ => DateRangeMode::Quarter,
        };
        range.update(|r| r.mode = selected);
    };

    let on_sync = move |_| {
        let Some(team_id) = selected_team.get_untracked() else {
            return;
        };
        let mut armed = false;
        metrics.update(|state| armed = state.begin_sync());
        if !armed {
            return;
        }
        let state = range.get_untracked();
        leptos::task::spawn_local(async move {
            match api::refresh_team_prs(&team_id).await {
                Ok(()) => {
                    load_teams(teams, metrics);
                    if let Some((team, params)) =
                        fetch_plan(Some(&team_id), &resolve_params(&state))
                    {
                        dispatch_fetch(metrics, team, params);
                    }
                }
                Err(err) => {
                    log::error!("sync failed for team {team_id}: {err}");
                    metrics.update(|m| m.error = Some(err.to_string()));
                }
            }
            metrics.update(MetricsState::finish_sync);
        });
    };

    let last_synced = move || {
        selected_team.get().map_or_else(
            || "Never synced".to_owned(),
            |id| {
                teams
                    .get()
                    .last_sync_for(&id)
                    .map_or_else(|| "Never synced".to_owned(), ToOwned::to_owned)
            },
        )
    };

    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"PR activity tracker"</h1>
                <LogoutButton/>
            </header>

            <ErrorBanner/>

            <section class="selection-card">
                <h2>"Select Team"</h2>
                <p class="selection-card__subtitle">
                    "Choose your team and select a date range for analysis"
                </p>

                <div class="selection-card__row">
                    <label class="selection-card__field">
                        "Your Team"
                        <select
                            prop:value=move || selected_team.get().unwrap_or_default()
                            on:change=on_team_change
                        >
                            <option value="">"Select team"</option>
                            <For
                                each=move || teams.get().items
                                key=|team| team.id.clone()
                                children=|team| {
                                    view! { <option value=team.id>{team.name}</option> }
                                }
                            />
                        </select>
                    </label>

                    <label class="selection-card__field">
                        "Date Range Mode"
                        <select
                            prop:value=move || match range.get().mode {
                                DateRangeMode::Quarter => "quarter",
                                DateRangeMode::Custom => "custom",
                            }
                            on:change=on_mode_change
                        >
                            <option value="quarter">"Quarter"</option>
                            <option value="custom">"Custom"</option>
                        </select>
                    </label>

                    <Show when=move || range.get().mode == DateRangeMode::Quarter>
                        <label class="selection-card__field">
                            "Quarter"
                            <select
                                prop:value=move || range.get().quarter.to_string()
                                on:change=move |ev| {
                                    if let Ok(q) = event_target_value(&ev).parse::<u8>() {
                                        range.update(|r| r.quarter = q);
                                    }
                                }
                            >
                                <option value="1">"Q1"</option>
                                <option value="2">"Q2"</option>
                                <option value="3">"Q3"</option>
                                <option value="4">"Q4"</option>
                            </select>
                        </label>
                        <label class="selection-card__field">
                            "Year"
                            <input
                                type="number"
                                min="2000"
                                max=current_year().to_string()
                                prop:value=move || range.get().year.to_string()
                                on:input=move |ev| {
                                    if let Ok(y) = event_target_value(&ev).parse::<i32>() {
                                        range.update(|r| r.year = y);
                                    }
                                }
                            />
                        </label>
                    </Show>

                    <Show when=move || range.get().mode == DateRangeMode::Custom>
                        <label class="selection-card__field">
                            "Start Date"
                            <input
                                type="date"
                                prop:value=move || range.get().start_date
                                on:input=move |ev| {
                                    range.update(|r| r.start_date = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="selection-card__field">
                            "End Date"
                            <input
                                type="date"
                                prop:value=move || range.get().end_date
                                on:input=move |ev| {
                                    range.update(|r| r.end_date = event_target_value(&ev));
                                }
                            />
                        </label>
                        {move || {
                            date_error
                                .get()
                                .map(|message| {
                                    view! { <div class="selection-card__error">{message}</div> }
                                })
                        }}
                    </Show>

                    <div class="selection-card__field">
                        "Last synced"
                        <p class="selection-card__stamp">{last_synced}</p>
                    </div>

                    <button
                        class="btn btn--primary"
                        prop:disabled=move || {
                            metrics.get().syncing || selected_team.get().is_none()
                        }
                        on:click=on_sync
                    >
                        {move || {
                            if metrics.get().syncing { "Syncing..." } else { "Sync PR Comments" }
                        }}
                    </button>
                </div>
            </section>

            <Show when=move || selected_team.get().is_some()>
                <MetricsSection/>
            </Show>
        </main>
    }
}

/// Load (or reload) the team list into shared state.
///
/// Failures surface in the dashboard banner; a stale list stays on screen.
fn load_teams(teams: RwSignal<TeamsState>, metrics: RwSignal<MetricsState>) {
    teams.update(|state| state.loading = true);
    leptos::task::spawn_local(async move {
        match api::fetch_teams().await {
            Ok(items) => teams.update(|state| {
                state.items = items;
                state.loading = false;
            }),
            Err(err) => {
                log::error!("fetch teams failed: {err}");
                teams.update(|state| state.loading = false);
                metrics.update(|state| state.error = Some(err.to_string()));
            }
        }
    });
}

/// Dispatch a metrics fetch round, superseding any in-flight one.
///
/// Unless the selected team is the platform team itself, the platform
/// baseline is fetched alongside over the same range so the metrics section
/// can compare the two. A baseline failure only loses the comparison; the
/// selected team's data and the error banner are untouched.
fn dispatch_fetch(metrics: RwSignal<MetricsState>, team_id: String, params: RangeParams) {
    let mut generation = 0;
    metrics.update(|state| generation = state.begin_fetch());

    let baseline_team = config::platform_team_id();
    if team_id != baseline_team {
        let params = params.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_team_metrics(baseline_team, &params).await {
                Ok(data) => {
                    metrics.update(|state| {
                        state.apply_baseline(generation, data);
                    });
                }
                Err(err) => {
                    log::error!("fetch baseline metrics failed: {err}");
                }
            }
        });
    }

    leptos::task::spawn_local(async move {
        match api::fetch_team_metrics(&team_id, &params).await {
            Ok(data) => {
                metrics.update(|state| {
                    state.apply_success(generation, data);
                });
            }
            Err(err) => {
                log::error!("fetch team metrics failed for {team_id}: {err}");
                metrics.update(|state| {
                    state.apply_failure(generation, err.to_string());
                });
            }
        }
    });
}
