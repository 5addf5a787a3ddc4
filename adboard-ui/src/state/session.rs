//! Dashboard Session State
//!
//! The page logic lives in one [`Dashboard`], owned here behind a `RefCell`.
//! Views read it through [`DashboardState::read`], which tracks a revision
//! signal; handlers mutate it through [`DashboardState::update`], which bumps
//! that revision once the borrow is released.

use std::cell::RefCell;
use std::rc::Rc;

use adboard::dashboard::{Dashboard, DashboardOptions, DashboardParts};
use adboard::error::DashboardResult;
use adboard::series::SeriesGenerator;
use adboard::table::sample::search_terms_table;
use leptos::*;

use crate::components::chart::CanvasBackend;
use crate::platform::{viewport_width, GlooScheduler, LocalStorage};

pub type Session = Dashboard<LocalStorage, CanvasBackend, GlooScheduler>;

/// State provided to all components
#[derive(Clone)]
pub struct DashboardState {
    session: Rc<RefCell<Session>>,
    /// Bumped after every mutation of the session
    pub revision: RwSignal<u64>,
    /// Mirrors the theme controller, fed by a theme subscription
    pub dark: RwSignal<bool>,
    /// Message for the toast
    pub message: RwSignal<Option<String>>,
    /// The performance chart canvas
    pub canvas: NodeRef<html::Canvas>,
}

/// Build the session and provide it to the component tree
pub fn provide_dashboard_state() -> DashboardResult<DashboardState> {
    let canvas = create_node_ref::<html::Canvas>();

    let parts = DashboardParts {
        store: LocalStorage::open(),
        backend: CanvasBackend::new(canvas),
        scheduler: GlooScheduler::new(),
        table: search_terms_table(),
        series: SeriesGenerator::default().generate_with(js_sys::Math::random),
    };
    let mut session = Dashboard::new(parts, viewport_width(), DashboardOptions::default())?;

    let dark = create_rw_signal(session.theme().is_dark());
    session.subscribe_theme(move |theme| dark.set(theme.is_dark()));

    // Body class follows the theme
    create_effect(move |_| {
        let is_dark = dark.get();
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force("dark-mode", is_dark);
        }
    });

    let state = DashboardState {
        session: Rc::new(RefCell::new(session)),
        revision: create_rw_signal(0),
        dark,
        message: create_rw_signal(None),
        canvas,
    };

    provide_context(state.clone());
    Ok(state)
}

impl DashboardState {
    /// Read the session, re-running the caller when it changes
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.revision.get();
        f(&self.session.borrow())
    }

    /// Read the session without subscribing
    pub fn peek<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.session.borrow())
    }

    /// Mutate the session and notify readers
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let out = {
            let mut session = self.session.borrow_mut();
            f(&mut session)
        };
        self.revision.update(|r| *r += 1);
        out
    }

    /// Show a toast message (auto-clears after timeout)
    pub fn notify(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));

        let message_signal = self.message;
        gloo_timers::callback::Timeout::new(3000, move || {
            message_signal.set(None);
        })
        .forget();
    }
}
