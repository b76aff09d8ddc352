use desk_app_contract::ApplicationId;
use desk_host::deep_link_param;
use desk_runtime::deep_link::open_requests_from_spec;
use desk_runtime::{use_desktop_runtime, DesktopProvider, DesktopShell, SessionAction};
use leptos::*;
use serde::Deserialize;

const DESKTOP_MANIFEST: &str = include_str!("../desktop.toml");

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
/// Shell composition settings embedded at build time.
pub struct DesktopManifest {
    /// Apps pinned to the taskbar, in display order.
    #[serde(default)]
    pub pinned: Vec<String>,
    /// Apps shown as desktop shortcuts, in display order.
    #[serde(default)]
    pub shortcuts: Vec<String>,
}

impl DesktopManifest {
    /// Pinned taskbar app ids.
    pub fn pinned_ids(&self) -> Vec<ApplicationId> {
        self.pinned.iter().map(|raw| ApplicationId::new(raw.as_str())).collect()
    }

    /// Desktop shortcut app ids.
    pub fn shortcut_ids(&self) -> Vec<ApplicationId> {
        self.shortcuts.iter().map(|raw| ApplicationId::new(raw.as_str())).collect()
    }
}

/// Parses the embedded manifest, falling back to an empty shell on error.
pub fn load_manifest() -> DesktopManifest {
    toml::from_str(DESKTOP_MANIFEST).unwrap_or_else(|err| {
        logging::warn!("desktop manifest invalid: {err}");
        DesktopManifest::default()
    })
}

#[component]
pub fn SiteApp() -> impl IntoView {
    let manifest = load_manifest();

    view! {
        <main class="site-root">
            <DesktopEntry manifest=manifest />
        </main>
    }
}

#[component]
pub fn DesktopEntry(manifest: DesktopManifest) -> impl IntoView {
    let shortcuts = manifest.shortcut_ids();

    view! {
        <DesktopProvider pinned_apps=manifest.pinned_ids()>
            <DeepLinkOpener />
            <DesktopShell shortcuts=shortcuts />
        </DesktopProvider>
    }
}

#[component]
/// Issues one open action per recognized `?open=app[:detail]` token, once,
/// at session start.
fn DeepLinkOpener() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let opened = create_rw_signal(false);

    create_effect(move |_| {
        if opened.get_untracked() {
            return;
        }
        opened.set(true);
        if let Some(spec) = deep_link_param("open") {
            for request in open_requests_from_spec(&spec) {
                runtime.dispatch_action(SessionAction::Open(request));
            }
        }
    });
}
