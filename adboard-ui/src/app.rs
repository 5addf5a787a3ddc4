//! App Root Component
//!
//! Builds the dashboard session, wires window resizes into its debouncer and
//! lays out the page.

use leptos::*;

use crate::components::{
    ActionBar, CostFilterChip, DateNavigation, PerformanceChart, ResultsTable, ThemeToggle, Toast,
};
use crate::platform::viewport_width;
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = match provide_dashboard_state() {
        Ok(state) => state,
        Err(e) => {
            return view! {
                <div class="p-8 text-red-600">
                    {format!("Failed to start dashboard: {}", e)}
                </div>
            }
            .into_view();
        }
    };

    // Resize bursts collapse into one chart update
    let _resize = window_event_listener(ev::resize, move |_| {
        state.peek(|s| s.viewport_resized(viewport_width()));
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-6">
                <PerformanceChart />
                <ActionBar />
                <ResultsTable />
            </main>

            <Toast />
        </div>
    }
    .into_view()
}

/// Page header with the toolbar
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="border-b px-4 py-3">
            <div class="container mx-auto flex flex-wrap items-center justify-between gap-3">
                <h1 class="text-xl font-bold">"Search terms"</h1>
                <div class="flex flex-wrap items-center gap-3">
                    <CostFilterChip />
                    <DateNavigation />
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}
