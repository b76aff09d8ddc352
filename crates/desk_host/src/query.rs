//! Query-string access for the deep-link open surface.

/// Reads a single query-string parameter from the current page URL.
///
/// Returns `None` when the parameter is absent, empty, or when no browser
/// environment is available.
pub fn deep_link_param(name: &str) -> Option<String> {
    let raw = raw_param(name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn raw_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_param(_name: &str) -> Option<String> {
    None
}
