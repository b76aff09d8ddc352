pub mod apps;
pub mod components;
pub mod deep_link;
pub mod interaction;
pub mod launcher;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use interaction::{Gesture, PointerController};
pub use model::*;
pub use reducer::{reduce_session, SessionAction, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
pub use runtime_context::use_desktop_runtime;
