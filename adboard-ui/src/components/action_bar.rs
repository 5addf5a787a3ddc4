//! Contextual action bar shown while rows are selected

use leptos::*;

use crate::state::DashboardState;

#[component]
pub fn ActionBar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let bar_state = state.clone();
    let bar = create_memo(move |_| bar_state.read(|s| s.selection().action_bar().clone()));

    let keyword_state = state.clone();
    let add_keyword = move |_| {
        let message = keyword_state.peek(|s| s.add_as_keyword());
        keyword_state.notify(message);
    };

    let negative_state = state.clone();
    let add_negative = move |_| {
        let message = negative_state.peek(|s| s.add_as_negative_keyword());
        negative_state.notify(message);
    };

    let close = move |_| state.update(|s| s.close_action_bar());

    view! {
        <div
            id="actionBar"
            class="action-bar flex items-center justify-between px-4 py-3 mb-4 rounded-lg bg-blue-600 text-white"
            style:display=move || if bar.get().visible { "flex" } else { "none" }
        >
            <span id="selectedCount" class="font-medium">{move || bar.get().label}</span>
            <div class="flex items-center space-x-2">
                <button
                    id="addKeywordBtn"
                    class="px-3 py-1 rounded bg-white text-blue-700 text-sm font-medium"
                    on:click=add_keyword
                >
                    "Add as keyword"
                </button>
                <button
                    id="addNegativeKeywordBtn"
                    class="px-3 py-1 rounded bg-white text-blue-700 text-sm font-medium"
                    on:click=add_negative
                >
                    "Add as negative keyword"
                </button>
                <button
                    id="closeActionBar"
                    class="px-2 py-1 rounded hover:bg-blue-500"
                    title="Close"
                    on:click=close
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
