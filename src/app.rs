//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_guard::SessionGuard;
use crate::net::auth::stored_session;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::metrics::MetricsState;
use crate::state::teams::TeamsState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Nothing in this crate calls it: it is the entry point a cargo-leptos SSR
/// host consumes (together with the `ssr` feature) when the app is deployed
/// behind one. Client-only builds go straight through [`crate::hydrate`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts at the composition root and sets up
/// client-side routing. The dashboard route sits behind [`SessionGuard`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared state contexts, each written by exactly one flow.
    let auth = RwSignal::new(AuthState::default());
    let teams = RwSignal::new(TeamsState::default());
    let metrics = RwSignal::new(MetricsState::default());

    provide_context(auth);
    provide_context(teams);
    provide_context(metrics);

    // Restore the persisted session once in the browser. An absent or
    // expired session settles to signed-out (fail closed).
    Effect::new(move || {
        match stored_session() {
            Some(session) => auth.set(AuthState::signed_in(session)),
            None => auth.set(AuthState::signed_out()),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/metrictracker-ui.css"/>
        <Title text="PR activity tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <SessionGuard>
                                <DashboardPage/>
                            </SessionGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
