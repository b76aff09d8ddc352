//! The window-session state machine.
//!
//! [`reduce_session`] is the only code path that mutates [`SessionState`].
//! It is a pure synchronous transition function: one call per discrete user
//! action or pointer-move sample, never async, never failing. Actions that
//! name a window id with no live record are guarded no-ops.

use serde::{Deserialize, Serialize};

use crate::apps;
use crate::model::{
    OpenWindowRequest, SessionState, WindowId, WindowRecord, WindowRect, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y,
};

/// Minimum width an interactive resize can store.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum height an interactive resize can store.
pub const MIN_WINDOW_HEIGHT: i32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Closed set of transitions accepted by [`reduce_session`].
pub enum SessionAction {
    /// Open a new window for a registered app.
    Open(OpenWindowRequest),
    /// Raise a window to the front and mark it active.
    Focus { window_id: WindowId },
    /// Remove a window entirely.
    Close { window_id: WindowId },
    /// Flip the minimized flag; stacking and focus are untouched.
    ToggleMinimize { window_id: WindowId },
    /// Flip the maximized flag; the stored rectangle is untouched so
    /// un-maximizing restores it exactly.
    ToggleMaximize { window_id: WindowId },
    /// Overwrite the window origin. The reducer applies no bounds here;
    /// any bounding is the interaction layer's concern.
    Move { window_id: WindowId, x: i32, y: i32 },
    /// Store a new size (clamped to the minimum floor) and optionally a new
    /// origin for north/west resizes.
    Resize {
        window_id: WindowId,
        w: i32,
        h: i32,
        x: Option<i32>,
        y: Option<i32>,
    },
}

/// Applies one action to the session. Returns `true` when the state changed.
pub fn reduce_session(state: &mut SessionState, action: SessionAction) -> bool {
    apply(state, action).unwrap_or(false)
}

fn apply(state: &mut SessionState, action: SessionAction) -> Option<bool> {
    match action {
        SessionAction::Open(request) => open_window(state, request),
        SessionAction::Focus { window_id } => focus_window(state, window_id),
        SessionAction::Close { window_id } => close_window(state, window_id),
        SessionAction::ToggleMinimize { window_id } => {
            let window = state.window_mut(window_id)?;
            window.minimized = !window.minimized;
            Some(true)
        }
        SessionAction::ToggleMaximize { window_id } => {
            let window = state.window_mut(window_id)?;
            window.maximized = !window.maximized;
            Some(true)
        }
        SessionAction::Move { window_id, x, y } => {
            let window = state.window_mut(window_id)?;
            window.rect.x = x;
            window.rect.y = y;
            Some(true)
        }
        SessionAction::Resize {
            window_id,
            w,
            h,
            x,
            y,
        } => {
            let window = state.window_mut(window_id)?;
            window.rect.w = w.max(MIN_WINDOW_WIDTH);
            window.rect.h = h.max(MIN_WINDOW_HEIGHT);
            if let Some(x) = x {
                window.rect.x = x;
            }
            if let Some(y) = y {
                window.rect.y = y;
            }
            Some(true)
        }
    }
}

fn open_window(state: &mut SessionState, request: OpenWindowRequest) -> Option<bool> {
    // Unregistered app ids never produce a window.
    let descriptor = apps::descriptor_by_id(request.app_id.as_str())?;
    if let Some(id) = request.id {
        if state.window(id).is_some() {
            return None;
        }
    }

    let id = match request.id {
        Some(id) => id,
        None => state.alloc_window_id(),
    };
    let record = WindowRecord {
        id,
        app_id: request.app_id,
        title: request
            .title
            .unwrap_or_else(|| descriptor.title.to_string()),
        rect: WindowRect {
            x: request.x.unwrap_or(DEFAULT_WINDOW_X),
            y: request.y.unwrap_or(DEFAULT_WINDOW_Y),
            w: request.w.unwrap_or(DEFAULT_WINDOW_WIDTH),
            h: request.h.unwrap_or(DEFAULT_WINDOW_HEIGHT),
        },
        minimized: false,
        maximized: request.maximized.unwrap_or(false),
        stack_order: state.next_stack_order(),
        payload: request.payload,
    };
    state.insert_window(record);
    state.focused = Some(id);
    Some(true)
}

fn focus_window(state: &mut SessionState, window_id: WindowId) -> Option<bool> {
    let top = state.next_stack_order();
    let window = state.window_mut(window_id)?;
    window.stack_order = top;
    state.focused = Some(window_id);
    Some(true)
}

fn close_window(state: &mut SessionState, window_id: WindowId) -> Option<bool> {
    state.remove_window(window_id)?;
    // Deliberately no promotion of the next-highest window.
    if state.focused == Some(window_id) {
        state.focused = None;
    }
    Some(true)
}
