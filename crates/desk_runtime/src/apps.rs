//! Static app registry: the catalog of hosted mini-applications.
//!
//! The session core only reads this table; it never mutates it. Lookups by
//! unknown id resolve to `None` (open requests) or to a visible placeholder
//! view (rendering), never to a failure.

use desk_app_contract::{AppModule, AppMountContext, ApplicationId};
use leptos::*;

use crate::model::OpenWindowRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Registry metadata for one app.
pub struct AppDescriptor {
    pub app_id: &'static str,
    pub title: &'static str,
    /// Default window size `(w, h)` used by launcher surfaces.
    pub default_size: (i32, i32),
    pub icon_url: Option<&'static str>,
    /// Windows of this app open maximized.
    pub maximized_by_default: bool,
}

const APP_REGISTRY: [AppDescriptor; 4] = [
    AppDescriptor {
        app_id: "blog",
        title: "Blog",
        default_size: (640, 420),
        icon_url: None,
        maximized_by_default: false,
    },
    AppDescriptor {
        app_id: "notes",
        title: "Notes",
        default_size: (420, 300),
        icon_url: Some("/images/notes_icon.png"),
        maximized_by_default: false,
    },
    AppDescriptor {
        app_id: "gallery",
        title: "Gallery",
        default_size: (820, 540),
        icon_url: Some("/images/gallery_icon.png"),
        maximized_by_default: false,
    },
    AppDescriptor {
        app_id: "logs",
        title: "Logs",
        default_size: (980, 600),
        icon_url: Some("/images/logs_icon.png"),
        maximized_by_default: true,
    },
];

/// The full registry table.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Looks up registry metadata by raw app id.
pub fn descriptor_by_id(app_id: &str) -> Option<&'static AppDescriptor> {
    APP_REGISTRY.iter().find(|entry| entry.app_id == app_id)
}

/// Builds an open request seeded with the app's registry defaults, or `None`
/// for an unregistered id.
pub fn default_open_request(app_id: &ApplicationId) -> Option<OpenWindowRequest> {
    let descriptor = descriptor_by_id(app_id.as_str())?;
    let mut request = OpenWindowRequest::new(app_id.clone());
    request.title = Some(descriptor.title.to_string());
    request.w = Some(descriptor.default_size.0);
    request.h = Some(descriptor.default_size.1);
    if descriptor.maximized_by_default {
        request.maximized = Some(true);
    }
    Some(request)
}

fn module_by_id(app_id: &str) -> Option<AppModule> {
    match app_id {
        "blog" => Some(desk_app_blog::app_module()),
        "notes" => Some(desk_app_notes::app_module()),
        "gallery" => Some(desk_app_gallery::app_module()),
        "logs" => Some(desk_app_logs::app_module()),
        _ => None,
    }
}

/// Mounts the app registered for `app_id`, falling back to a visible
/// placeholder when the id has no registry entry.
pub fn mount_app(app_id: &ApplicationId, context: AppMountContext) -> View {
    match module_by_id(app_id.as_str()) {
        Some(module) => module.mount(context),
        None => render_unknown_app(app_id),
    }
}

fn render_unknown_app(app_id: &ApplicationId) -> View {
    let label = format!("Unknown app: {app_id}");
    view! {
        <div class="app app-unknown">
            <p>{label}</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_registry_id_is_unique() {
        let mut ids: Vec<&str> = app_registry().iter().map(|entry| entry.app_id).collect();
        ids.sort_unstable();
        let len_before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len_before);
    }

    #[test]
    fn descriptor_lookup_misses_resolve_to_none() {
        assert!(descriptor_by_id("gallery").is_some());
        assert!(descriptor_by_id("minesweeper").is_none());
    }

    #[test]
    fn default_open_request_carries_registry_metadata() {
        let request = default_open_request(&ApplicationId::new("logs")).expect("logs registered");
        assert_eq!(request.title.as_deref(), Some("Logs"));
        assert_eq!((request.w, request.h), (Some(980), Some(600)));
        assert_eq!(request.maximized, Some(true));

        let request = default_open_request(&ApplicationId::new("notes")).expect("notes registered");
        assert_eq!(request.maximized, None);
    }

    #[test]
    fn default_open_request_for_unknown_app_is_none() {
        assert!(default_open_request(&ApplicationId::new("paint")).is_none());
    }
}
