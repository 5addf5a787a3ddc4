//! Theme toggle button

use leptos::*;

use crate::state::DashboardState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let dark = state.dark;

    let on_click = move |_| {
        state.update(|s| {
            s.toggle_theme();
        });
    };

    view! {
        <button
            id="themeToggle"
            on:click=on_click
            title="Toggle theme"
            class="px-3 py-2 rounded-lg text-sm font-medium border border-gray-300 hover:bg-gray-100 transition-colors"
        >
            {move || if dark.get() { "☀️ Light mode" } else { "🌙 Dark mode" }}
        </button>
    }
}
