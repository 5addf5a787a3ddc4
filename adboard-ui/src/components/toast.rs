//! Toast Notification Component
//!
//! Confirms keyword actions taken from the action bar.

use leptos::*;

use crate::state::DashboardState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let message = state.message;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                message.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
