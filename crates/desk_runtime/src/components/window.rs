use std::rc::Rc;

use super::*;
use crate::apps;
use crate::model::WindowRecord;
use crate::reducer::SessionAction;
use desk_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn accepts_gesture(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = Signal::derive(move || state.get().window(window_id).cloned());

    let focus = move |_: web_sys::PointerEvent| {
        if state.get_untracked().focused != Some(window_id) {
            runtime.dispatch_action(SessionAction::Focus { window_id });
        }
    };
    let minimize = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(SessionAction::ToggleMinimize { window_id });
    };
    let toggle_maximize = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(SessionAction::ToggleMaximize { window_id });
    };
    let close = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(SessionAction::Close { window_id });
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !accepts_gesture(&ev) {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        if win.maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        let origin = desktop_surface_origin();
        runtime.interaction.update(|controller| {
            if let Some(action) = controller.press_titlebar(&win, pointer, origin) {
                runtime.dispatch_action(action);
            }
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(SessionAction::ToggleMaximize { window_id });
    };

    view! {
        <Show
            when=move || window.get().map(|win| !win.minimized).unwrap_or(false)
            fallback=|| ()
        >
            {move || {
                let win = window.get().expect("window exists while shown");
                let style = window_style(&win);
                let focused_class = if state.get().focused == Some(window_id) {
                    " focused"
                } else {
                    ""
                };
                let maximized_class = if win.maximized { " maximized" } else { "" };

                view! {
                    <section
                        class=format!("desktop-window{}{}", focused_class, maximized_class)
                        style=style
                        role="dialog"
                        aria-label=win.title.clone()
                        on:pointerdown=focus
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <span class="titlebar-title">{win.title.clone()}</span>
                            <div class="titlebar-controls">
                                <WindowControlButton label="Minimize" glyph="–" on_press=minimize />
                                <WindowControlButton
                                    label=if win.maximized { "Restore" } else { "Maximize" }
                                    glyph="▢"
                                    on_press=toggle_maximize
                                />
                                <WindowControlButton label="Close" glyph="✕" on_press=close />
                            </div>
                        </header>
                        <div class="window-body">
                            <WindowBody window_id=window_id />
                        </div>
                        <Show
                            when=move || {
                                window.get().map(|win| !win.maximized).unwrap_or(false)
                            }
                            fallback=|| ()
                        >
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::North />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::South />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::East />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::West />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthEast />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthWest />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthEast />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthWest />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

// A maximized window always fills its container; the stored rectangle stays
// untouched underneath.
fn window_style(win: &WindowRecord) -> String {
    if win.maximized {
        format!(
            "left:0;top:0;width:100%;height:100%;z-index:{};",
            win.stack_order
        )
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.stack_order
        )
    }
}

#[component]
fn WindowControlButton(
    label: &'static str,
    glyph: &'static str,
    #[prop(into)] on_press: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            class="titlebar-button"
            aria-label=label
            // A press on a control must never start a titlebar drag.
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                on_press.call(ev);
            }
        >
            {glyph}
        </button>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !accepts_gesture(&ev) {
            return;
        }
        let Some(win) = state.get_untracked().window(window_id).cloned() else {
            return;
        };
        if win.maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        runtime.interaction.update(|controller| {
            if let Some(action) = controller.press_handle(&win, edge, pointer) {
                runtime.dispatch_action(action);
            }
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let contents = state
        .get_untracked()
        .window(window_id)
        .map(|win| {
            let context = AppMountContext {
                window_id: win.id.0,
                payload: win.payload.clone(),
                content: Rc::clone(&runtime.content.get_value()),
            };
            apps::mount_app(&win.app_id, context)
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
