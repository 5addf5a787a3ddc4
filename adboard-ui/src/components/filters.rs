//! Toolbar placeholders: the cost filter chip and date range navigation

use leptos::*;

use crate::state::DashboardState;

/// Removable "Cost > $1.00" chip. Removing it only hides it.
#[component]
pub fn CostFilterChip() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let chip = move || {
        let filter = state.read(|s| {
            let filter = s.cost_filter();
            filter.is_visible().then(|| filter.label().to_string())
        });
        let state = state.clone();
        filter.map(|label| {
            view! {
                <span id="costFilter" class="inline-flex items-center px-3 py-1 rounded-full text-sm bg-blue-100 text-blue-800">
                    {label}
                    <button
                        class="remove-filter ml-2 hover:text-blue-600"
                        title="Remove filter"
                        on:click=move |_| state.update(|s| s.remove_cost_filter())
                    >
                        "✕"
                    </button>
                </span>
            }
        })
    };

    view! { <div class="flex items-center">{chip}</div> }
}

/// Previous / next range buttons around the current range label
#[component]
pub fn DateNavigation() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let label = state.peek(|s| s.dates().range_label().to_string());

    let prev_state = state.clone();
    let next_state = state;

    view! {
        <div class="flex items-center space-x-2">
            <button
                id="prevDate"
                class="date-nav px-2 py-1 rounded hover:bg-gray-200"
                on:click=move |_| prev_state.peek(|s| s.previous_date_range())
            >
                "‹"
            </button>
            <span id="dateRange" class="text-sm font-medium">{label}</span>
            <button
                id="nextDate"
                class="date-nav px-2 py-1 rounded hover:bg-gray-200"
                on:click=move |_| next_state.peek(|s| s.next_date_range())
            >
                "›"
            </button>
        </div>
    }
}
