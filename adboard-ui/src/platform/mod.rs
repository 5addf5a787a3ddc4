//! Browser implementations of the dashboard's seams

pub mod storage;
pub mod timer;

pub use storage::LocalStorage;
pub use timer::GlooScheduler;

/// Current `window.innerWidth`, in CSS pixels
pub fn viewport_width() -> f64 {
    leptos::window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0)
}
