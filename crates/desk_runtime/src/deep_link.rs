//! Deep-link open surface.
//!
//! A single query parameter carries comma-separated `app[:detail]` tokens,
//! parsed once at session start into one open request per recognized app.
//! Unrecognized ids are skipped, not errors.

use desk_app_contract::ApplicationId;
use serde_json::json;

use crate::apps;
use crate::model::OpenWindowRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One parsed `app[:detail]` token.
pub struct OpenTarget {
    pub app_id: ApplicationId,
    pub detail: Option<String>,
}

/// Splits a raw deep-link parameter into tokens. Empty tokens are dropped;
/// only the first `:` separates app id from detail, so details may contain
/// further colons.
pub fn parse_open_spec(raw: &str) -> Vec<OpenTarget> {
    raw.split(',')
        .filter_map(|token| {
            let token = token.trim();
            if token.is_empty() {
                return None;
            }
            let (app, detail) = match token.split_once(':') {
                Some((app, detail)) => (app.trim(), Some(detail.trim())),
                None => (token, None),
            };
            if app.is_empty() {
                return None;
            }
            Some(OpenTarget {
                app_id: ApplicationId::new(app),
                detail: detail.filter(|d| !d.is_empty()).map(str::to_string),
            })
        })
        .collect()
}

/// Builds the open request for one target, attaching the app-specific
/// payload its hosted unit understands. Returns `None` for ids with no
/// registry entry.
pub fn open_request_for_target(target: &OpenTarget) -> Option<OpenWindowRequest> {
    let mut request = apps::default_open_request(&target.app_id)?;
    if let Some(detail) = &target.detail {
        request.payload = match target.app_id.as_str() {
            "blog" => json!({ "postSlug": detail }),
            "logs" => json!({ "route": "viewer", "projectId": detail }),
            _ => json!({ "detail": detail }),
        };
    }
    Some(request)
}

/// Parses a raw deep-link parameter into ready-to-dispatch open requests.
pub fn open_requests_from_spec(raw: &str) -> Vec<OpenWindowRequest> {
    parse_open_spec(raw)
        .iter()
        .filter_map(open_request_for_target)
        .collect()
}
