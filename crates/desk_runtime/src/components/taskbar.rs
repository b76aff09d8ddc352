use std::time::Duration;

use super::*;
use crate::launcher;
use crate::{apps, components::menus::TaskbarAppMenu};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TaskbarAppMenuState {
    pub app_id: ApplicationId,
    pub x: i32,
    pub y: i32,
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let app_menu = create_rw_signal(None::<TaskbarAppMenuState>);

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if app_menu.get_untracked().is_some() {
            app_menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && app_menu.get_untracked().is_some() {
            ev.prevent_default();
            app_menu.set(None);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let pinned = move || state.get().pinned_apps.clone();

    view! {
        <footer class="taskbar" aria-label="Taskbar">
            <div class="taskbar-apps" role="list">
                <For each=pinned key=|app| app.as_str().to_string() let:app>
                    <TaskbarAppButton app_id=app app_menu=app_menu />
                </For>
            </div>
            <div class="taskbar-tray">
                <TaskbarClock />
            </div>
            <TaskbarAppMenu app_menu=app_menu />
        </footer>
    }
}

#[component]
fn TaskbarAppButton(
    app_id: ApplicationId,
    app_menu: RwSignal<Option<TaskbarAppMenuState>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Unpinnable ids (stale config entries) simply render nothing.
    let Some(descriptor) = apps::descriptor_by_id(app_id.as_str()) else {
        return ().into_view();
    };

    let is_active = {
        let app_id = app_id.clone();
        Signal::derive(move || launcher::any_visible(&state.get(), &app_id))
    };

    let on_click = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            let actions = launcher::taskbar_click_actions(&state.get_untracked(), &app_id);
            runtime.dispatch_all(actions);
        }
    };
    let on_context_menu = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            app_menu.set(Some(TaskbarAppMenuState {
                app_id: app_id.clone(),
                x: ev.client_x(),
                y: ev.client_y(),
            }));
        }
    };

    view! {
        <button
            class=move || {
                if is_active.get() {
                    "taskbar-app is-active"
                } else {
                    "taskbar-app"
                }
            }
            role="listitem"
            title=descriptor.title
            aria-label=descriptor.title
            on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            on:click=on_click
            on:contextmenu=on_context_menu
        >
            {match descriptor.icon_url {
                Some(url) => view! { <img class="taskbar-app-icon" src=url alt="" /> }.into_view(),
                None => view! { <span class="taskbar-app-dot" aria-hidden="true"></span> }.into_view(),
            }}
        </button>
    }
    .into_view()
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let text = create_rw_signal(clock_text());

    if let Ok(interval) =
        set_interval_with_handle(move || text.set(clock_text()), Duration::from_secs(60))
    {
        on_cleanup(move || interval.clear());
    }

    view! { <time class="taskbar-clock">{move || text.get()}</time> }
}

fn clock_text() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        return format!("{:02}:{:02}", date.get_hours(), date.get_minutes());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        "00:00".to_string()
    }
}
