//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the single [`SessionState`] instance per desktop view.
//! Collaborators hold read-only signal views between transitions and
//! communicate intent exclusively through the dispatch callback; nothing
//! mutates session state directly.

use std::rc::Rc;

use desk_app_contract::ApplicationId;
use desk_host::{ContentSource, WebContentSource};
use leptos::*;

use crate::interaction::PointerController;
use crate::model::SessionState;
use crate::reducer::{reduce_session, SessionAction};

#[derive(Clone, Copy)]
/// Leptos context for reading session state and dispatching [`SessionAction`]
/// values.
pub struct DesktopRuntimeContext {
    /// Reactive session state signal.
    pub state: RwSignal<SessionState>,
    /// Reactive pointer-gesture state machine.
    pub interaction: RwSignal<PointerController>,
    /// Read-only JSON content endpoints handed to hosted apps.
    pub content: StoredValue<Rc<dyn ContentSource>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches one transition through the reducer.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }

    /// Dispatches a sequence of transitions in order.
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = SessionAction>) {
        for action in actions {
            self.dispatch.call(action);
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Apps pinned to the taskbar for this session.
    pinned_apps: Vec<ApplicationId>,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(SessionState::new(pinned_apps));
    let interaction = create_rw_signal(PointerController::default());
    let content: StoredValue<Rc<dyn ContentSource>> =
        store_value(Rc::new(WebContentSource) as Rc<dyn ContentSource>);

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut session = state.get_untracked();
        if reduce_session(&mut session, action) {
            state.set(session);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        content,
        dispatch,
    };
    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
