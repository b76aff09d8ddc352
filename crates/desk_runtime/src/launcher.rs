//! Launcher-surface policy.
//!
//! Pure decision functions shared by the taskbar and its context menus. A
//! taskbar slot aggregates every window of one app; these helpers turn a
//! click or menu choice into the actions to dispatch.

use desk_app_contract::ApplicationId;

use crate::apps;
use crate::model::{SessionState, WindowId};
use crate::reducer::SessionAction;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Windows of one app, split by visibility, front-most first.
pub struct AppWindows {
    pub visible: Vec<WindowId>,
    pub minimized: Vec<WindowId>,
}

/// Groups the app's windows by visibility, each list sorted by descending
/// stack order (front-most first).
pub fn windows_for_app(state: &SessionState, app_id: &ApplicationId) -> AppWindows {
    let mut all = state.windows_of_app(app_id);
    all.sort_by(|a, b| b.stack_order.cmp(&a.stack_order));

    let mut grouped = AppWindows::default();
    for window in all {
        if window.minimized {
            grouped.minimized.push(window.id);
        } else {
            grouped.visible.push(window.id);
        }
    }
    grouped
}

/// Whether any window of the app is open and not minimized.
pub fn any_visible(state: &SessionState, app_id: &ApplicationId) -> bool {
    !windows_for_app(state, app_id).visible.is_empty()
}

/// Primary taskbar click on a pinned app slot:
///
/// 1. a visible instance exists: collapse the front-most one;
/// 2. otherwise a minimized instance exists: restore and focus the
///    front-most one;
/// 3. otherwise: open a fresh window from registry defaults.
pub fn taskbar_click_actions(state: &SessionState, app_id: &ApplicationId) -> Vec<SessionAction> {
    let grouped = windows_for_app(state, app_id);

    if let Some(top) = grouped.visible.first() {
        return vec![SessionAction::ToggleMinimize { window_id: *top }];
    }
    if let Some(top) = grouped.minimized.first() {
        return vec![
            SessionAction::ToggleMinimize { window_id: *top },
            SessionAction::Focus { window_id: *top },
        ];
    }
    match apps::default_open_request(app_id) {
        Some(request) => vec![SessionAction::Open(request)],
        None => Vec::new(),
    }
}

/// Opens a brand-new instance regardless of existing windows.
pub fn open_new_instance_action(app_id: &ApplicationId) -> Option<SessionAction> {
    apps::default_open_request(app_id).map(SessionAction::Open)
}

/// Un-minimizes every minimized window of the app. Empty when nothing is
/// minimized, which is also the menu-item disable condition.
pub fn restore_all_actions(state: &SessionState, app_id: &ApplicationId) -> Vec<SessionAction> {
    windows_for_app(state, app_id)
        .minimized
        .into_iter()
        .map(|window_id| SessionAction::ToggleMinimize { window_id })
        .collect()
}

/// Minimizes every visible window of the app. Empty when nothing is visible,
/// which is also the menu-item disable condition.
pub fn minimize_all_actions(state: &SessionState, app_id: &ApplicationId) -> Vec<SessionAction> {
    windows_for_app(state, app_id)
        .visible
        .into_iter()
        .map(|window_id| SessionAction::ToggleMinimize { window_id })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpenWindowRequest;
    use crate::reducer::reduce_session;
    use pretty_assertions::assert_eq;

    fn open(state: &mut SessionState, app: &str) -> WindowId {
        reduce_session(
            state,
            SessionAction::Open(OpenWindowRequest::new(ApplicationId::new(app))),
        );
        *state.open_order().last().expect("window opened")
    }

    fn minimize(state: &mut SessionState, window_id: WindowId) {
        reduce_session(state, SessionAction::ToggleMinimize { window_id });
    }

    #[test]
    fn click_collapses_the_front_most_visible_instance() {
        let mut state = SessionState::default();
        let first = open(&mut state, "notes");
        let second = open(&mut state, "notes");
        open(&mut state, "gallery");

        let actions = taskbar_click_actions(&state, &ApplicationId::new("notes"));
        // The second window is in front; a single click collapses only it.
        assert_eq!(
            actions,
            vec![SessionAction::ToggleMinimize { window_id: second }]
        );

        for action in actions {
            reduce_session(&mut state, action);
        }
        assert!(state.window(second).unwrap().minimized);
        assert!(!state.window(first).unwrap().minimized);
    }

    #[test]
    fn click_restores_and_focuses_when_only_minimized_instances_remain() {
        let mut state = SessionState::default();
        let notes = open(&mut state, "notes");
        minimize(&mut state, notes);

        let actions = taskbar_click_actions(&state, &ApplicationId::new("notes"));
        assert_eq!(
            actions,
            vec![
                SessionAction::ToggleMinimize { window_id: notes },
                SessionAction::Focus { window_id: notes },
            ]
        );

        // Applying the decision flips the window visible and focused, with
        // no new window created.
        for action in actions {
            reduce_session(&mut state, action);
        }
        assert_eq!(state.window_count(), 1);
        assert!(!state.window(notes).unwrap().minimized);
        assert_eq!(state.focused, Some(notes));
    }

    #[test]
    fn click_opens_from_registry_defaults_when_no_instance_exists() {
        let state = SessionState::default();
        let actions = taskbar_click_actions(&state, &ApplicationId::new("gallery"));
        let [SessionAction::Open(request)] = actions.as_slice() else {
            panic!("expected a single open action");
        };
        assert_eq!(request.title.as_deref(), Some("Gallery"));
        assert_eq!((request.w, request.h), (Some(820), Some(540)));
    }

    #[test]
    fn click_on_an_unregistered_app_does_nothing() {
        let state = SessionState::default();
        assert!(taskbar_click_actions(&state, &ApplicationId::new("paint")).is_empty());
    }

    #[test]
    fn grouping_ignores_other_apps_and_orders_front_most_first() {
        let mut state = SessionState::default();
        let older = open(&mut state, "notes");
        open(&mut state, "gallery");
        let newer = open(&mut state, "notes");

        let grouped = windows_for_app(&state, &ApplicationId::new("notes"));
        assert_eq!(grouped.visible, vec![newer, older]);
        assert!(grouped.minimized.is_empty());
    }

    #[test]
    fn restore_all_and_minimize_all_cover_exactly_their_halves() {
        let mut state = SessionState::default();
        let shown = open(&mut state, "notes");
        let hidden = open(&mut state, "notes");
        minimize(&mut state, hidden);
        let notes = ApplicationId::new("notes");

        assert_eq!(
            restore_all_actions(&state, &notes),
            vec![SessionAction::ToggleMinimize { window_id: hidden }]
        );
        assert_eq!(
            minimize_all_actions(&state, &notes),
            vec![SessionAction::ToggleMinimize { window_id: shown }]
        );

        // With every window visible there is nothing left to restore.
        reduce_session(&mut state, SessionAction::ToggleMinimize { window_id: hidden });
        assert!(restore_all_actions(&state, &notes).is_empty());
    }

    #[test]
    fn any_visible_tracks_open_and_not_minimized() {
        let mut state = SessionState::default();
        let notes = ApplicationId::new("notes");
        assert!(!any_visible(&state, &notes));

        let id = open(&mut state, "notes");
        assert!(any_visible(&state, &notes));

        minimize(&mut state, id);
        assert!(!any_visible(&state, &notes));
    }
}
