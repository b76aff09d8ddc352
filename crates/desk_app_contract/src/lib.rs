//! Shared contract types between the window-session runtime and hosted apps.
//!
//! The runtime treats every app as an opaque renderable unit: it resolves an
//! [`ApplicationId`] through its registry, then calls [`AppModule::mount`]
//! with the window id and whatever payload the window was opened with.

use std::rc::Rc;

use desk_host::ContentSource;
use leptos::View;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a class of hosted mini-application (for example
/// `notes`), distinct from any specific open window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Wraps a raw identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Clone)]
/// Per-window mount context injected by the runtime.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: u64,
    /// Opaque payload supplied when the window was opened (deep links pass
    /// app-specific routing hints through here).
    pub payload: Value,
    /// Read-only JSON content endpoints.
    pub content: Rc<dyn ContentSource>,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
