//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod shortcuts;
mod taskbar;
mod window;

use desk_app_contract::ApplicationId;
use leptos::*;

use self::{shortcuts::DesktopShortcuts, taskbar::Taskbar, window::DesktopWindow};
use crate::model::{PointerPosition, ResizeEdge, WindowId};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const WINDOW_LAYER_DOM_ID: &str = "desk-window-layer";

#[component]
/// Renders the full desktop shell: shortcut grid, window layer, and taskbar.
pub fn DesktopShell(
    /// Apps shown as desktop shortcut icons.
    shortcuts: Vec<ApplicationId>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let controller = runtime.interaction.get_untracked();
        if !controller.is_active() {
            return;
        }
        if let Some(action) = controller.pointer_moved(pointer_from_pointer_event(&ev)) {
            runtime.dispatch_action(action);
        }
    };
    // Gestures end on release, full stop: the up target may differ from the
    // down target and the teardown still runs.
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().is_active() {
            runtime.interaction.update(|controller| controller.release());
        }
    };

    // Paint order is ascending stack order; minimized windows get no element
    // at all, so they expose no interaction surface either.
    let visible_windows = move || {
        let session = state.get();
        session
            .windows_by_stack()
            .into_iter()
            .filter(|win| !win.minimized)
            .map(|win| win.id)
            .collect::<Vec<WindowId>>()
    };

    view! {
        <div
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <DesktopShortcuts shortcuts=shortcuts />
            <div class="desktop-window-layer" id=WINDOW_LAYER_DOM_ID>
                <For each=visible_windows key=|id| id.0 let:id>
                    <DesktopWindow window_id=id />
                </For>
            </div>
            <Taskbar />
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Client-coordinate origin of the window layer, captured at gesture start so
/// move samples can be expressed in desktop-surface coordinates.
fn desktop_surface_origin() -> PointerPosition {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(WINDOW_LAYER_DOM_ID))
        {
            let rect = element.get_bounding_client_rect();
            return PointerPosition {
                x: rect.left() as i32,
                y: rect.top() as i32,
            };
        }
    }
    PointerPosition { x: 0, y: 0 }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
