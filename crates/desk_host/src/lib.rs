//! Browser host boundary for the desktop shell.
//!
//! Everything that talks to the page environment lives here: the read-only
//! JSON content endpoints consumed by hosted apps, and the query-string
//! surface used to open windows at session start. All browser calls are
//! gated on `wasm32` with deterministic non-wasm fallbacks so the rest of
//! the workspace unit-tests on the host target.

pub mod content;
pub mod query;

pub use content::{ContentError, ContentFuture, ContentSource, StaticContentSource, WebContentSource};
pub use query::deep_link_param;
