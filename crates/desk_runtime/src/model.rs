//! Window-session data model.
//!
//! One [`SessionState`] instance is the authoritative record of every open
//! window. It is owned by the provider component and only ever mutated by
//! the reducer; everything else reads it through signals.

use std::collections::HashMap;

use desk_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default x position for a window opened without overrides.
pub const DEFAULT_WINDOW_X: i32 = 80;
/// Default y position for a window opened without overrides.
pub const DEFAULT_WINDOW_Y: i32 = 60;
/// Default width for a window opened without overrides.
pub const DEFAULT_WINDOW_WIDTH: i32 = 520;
/// Default height for a window opened without overrides.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 340;

/// Stack order assigned when the first window opens is `STACK_ORDER_BASE + 1`.
pub const STACK_ORDER_BASE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identifier for one open window, unique for the window's lifetime.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in desktop-surface coordinates, x/y from the top-left.
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A pointer sample in desktop-surface client coordinates.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner a resize gesture grabs.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// Whether dragging this edge moves the window's right border.
    pub const fn grows_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// Whether dragging this edge moves the window's left border (and so the
    /// origin).
    pub const fn grows_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether dragging this edge moves the window's bottom border.
    pub const fn grows_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// Whether dragging this edge moves the window's top border (and so the
    /// origin).
    pub const fn grows_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One open window instance.
pub struct WindowRecord {
    pub id: WindowId,
    /// Registry key of the hosted app; immutable after creation.
    pub app_id: ApplicationId,
    pub title: String,
    /// Meaningful only while not maximized; maximized rendering is a pure
    /// presentation override on top of this rectangle.
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
    /// Monotonic paint/interaction priority, higher is more in front.
    pub stack_order: u32,
    /// Opaque payload forwarded to the hosted app unit.
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Per-field overrides applied on top of open defaults.
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    /// Explicit window id; allocated when absent.
    pub id: Option<WindowId>,
    /// Title override; falls back to the registry title.
    pub title: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    /// Open already maximized (registry `maximized_by_default` flows in here).
    pub maximized: Option<bool>,
    pub payload: Value,
}

impl OpenWindowRequest {
    /// Creates a request with no overrides and an empty payload.
    pub fn new(app_id: ApplicationId) -> Self {
        Self {
            app_id,
            id: None,
            title: None,
            x: None,
            y: None,
            w: None,
            h: None,
            maximized: None,
            payload: Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative desktop session state, one instance per desktop view.
pub struct SessionState {
    windows: HashMap<WindowId, WindowRecord>,
    open_order: Vec<WindowId>,
    /// Window considered active; `None` when no window holds focus.
    pub focused: Option<WindowId>,
    /// Apps shown permanently on the taskbar regardless of open state.
    pub pinned_apps: Vec<ApplicationId>,
    next_window_id: u64,
}

impl SessionState {
    /// Creates an empty session with the given pinned taskbar apps.
    pub fn new(pinned_apps: Vec<ApplicationId>) -> Self {
        Self {
            windows: HashMap::new(),
            open_order: Vec::new(),
            focused: None,
            pinned_apps,
            next_window_id: 1,
        }
    }

    /// Returns the record for `id` when it exists.
    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub(crate) fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.get_mut(&id)
    }

    /// Window ids in creation order.
    pub fn open_order(&self) -> &[WindowId] {
        &self.open_order
    }

    /// Number of open windows.
    pub fn window_count(&self) -> usize {
        self.open_order.len()
    }

    /// Open windows in ascending stack order (paint order, lowest first).
    pub fn windows_by_stack(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.open_order
            .iter()
            .filter_map(|id| self.windows.get(id))
            .collect();
        ordered.sort_by_key(|w| w.stack_order);
        ordered
    }

    /// Records for every open window of `app_id`, in creation order.
    pub fn windows_of_app(&self, app_id: &ApplicationId) -> Vec<&WindowRecord> {
        self.open_order
            .iter()
            .filter_map(|id| self.windows.get(id))
            .filter(|w| &w.app_id == app_id)
            .collect()
    }

    /// Next stack order to hand out: `max(existing) + 1`, starting from the
    /// base constant on an empty session.
    pub fn next_stack_order(&self) -> u32 {
        self.windows
            .values()
            .map(|w| w.stack_order)
            .max()
            .unwrap_or(STACK_ORDER_BASE)
            + 1
    }

    pub(crate) fn alloc_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        id
    }

    // The window map and the open-order list are only ever touched through
    // this pair so each id always has exactly one record and one order slot.
    pub(crate) fn insert_window(&mut self, record: WindowRecord) {
        let id = record.id;
        self.next_window_id = self.next_window_id.max(id.0.saturating_add(1));
        self.windows.insert(id, record);
        self.open_order.push(id);
    }

    pub(crate) fn remove_window(&mut self, id: WindowId) -> Option<WindowRecord> {
        let removed = self.windows.remove(&id)?;
        self.open_order.retain(|entry| *entry != id);
        Some(removed)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: u64, stack_order: u32) -> WindowRecord {
        WindowRecord {
            id: WindowId(id),
            app_id: ApplicationId::new("notes"),
            title: "Notes".to_string(),
            rect: WindowRect::default(),
            minimized: false,
            maximized: false,
            stack_order,
            payload: Value::Null,
        }
    }

    #[test]
    fn insert_and_remove_keep_map_and_order_in_lockstep() {
        let mut state = SessionState::default();
        state.insert_window(record(1, 1001));
        state.insert_window(record(2, 1002));

        assert_eq!(state.open_order(), &[WindowId(1), WindowId(2)]);
        assert!(state.window(WindowId(1)).is_some());

        let removed = state.remove_window(WindowId(1)).expect("window removed");
        assert_eq!(removed.id, WindowId(1));
        assert_eq!(state.open_order(), &[WindowId(2)]);
        assert!(state.window(WindowId(1)).is_none());
    }

    #[test]
    fn windows_by_stack_sorts_ascending() {
        let mut state = SessionState::default();
        state.insert_window(record(1, 1007));
        state.insert_window(record(2, 1003));
        state.insert_window(record(3, 1005));

        let ordered: Vec<WindowId> = state.windows_by_stack().iter().map(|w| w.id).collect();
        assert_eq!(ordered, vec![WindowId(2), WindowId(3), WindowId(1)]);
    }

    #[test]
    fn next_stack_order_starts_above_the_base_constant() {
        let state = SessionState::default();
        assert_eq!(state.next_stack_order(), STACK_ORDER_BASE + 1);
    }

    #[test]
    fn allocated_ids_skip_past_explicitly_inserted_ones() {
        let mut state = SessionState::default();
        state.insert_window(record(7, 1001));
        assert_eq!(state.alloc_window_id(), WindowId(8));
    }
}
