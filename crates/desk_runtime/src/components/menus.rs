use super::taskbar::TaskbarAppMenuState;
use super::*;
use crate::launcher;
use crate::model::WindowRecord;
use crate::reducer::SessionAction;
use crate::apps;

#[component]
/// Context action set for one pinned taskbar app.
pub(super) fn TaskbarAppMenu(app_menu: RwSignal<Option<TaskbarAppMenuState>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || app_menu.get().is_some() fallback=|| ()>
            {move || {
                let Some(menu) = app_menu.get() else {
                    return ().into_view();
                };
                let app_id = menu.app_id.clone();
                let heading = apps::descriptor_by_id(app_id.as_str())
                    .map(|descriptor| descriptor.title)
                    .unwrap_or("Unknown app");
                let session = state.get();
                let instances: Vec<WindowRecord> = session
                    .windows_of_app(&app_id)
                    .into_iter()
                    .cloned()
                    .collect();
                let restore_actions = launcher::restore_all_actions(&session, &app_id);
                let minimize_actions = launcher::minimize_all_actions(&session, &app_id);
                let has_instances = !instances.is_empty();
                let menu_style = format!("left:{}px;top:{}px;", menu.x, menu.y);

                let open_new = {
                    let app_id = app_id.clone();
                    move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        app_menu.set(None);
                        if let Some(action) = launcher::open_new_instance_action(&app_id) {
                            runtime.dispatch_action(action);
                        }
                    }
                };
                let restore_all = {
                    let actions = restore_actions.clone();
                    move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        app_menu.set(None);
                        runtime.dispatch_all(actions.clone());
                    }
                };
                let minimize_all = {
                    let actions = minimize_actions.clone();
                    move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        app_menu.set(None);
                        runtime.dispatch_all(actions.clone());
                    }
                };

                view! {
                    <div
                        class="taskbar-menu"
                        role="menu"
                        aria-label=format!("{heading} menu")
                        style=menu_style
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:contextmenu=move |ev: web_sys::MouseEvent| ev.prevent_default()
                    >
                        <div class="taskbar-menu-heading">{heading}</div>
                        <button role="menuitem" class="taskbar-menu-item" on:click=open_new>
                            "New window"
                        </button>
                        <Show when=move || has_instances fallback=|| ()>
                            <div class="taskbar-menu-separator" role="separator"></div>
                        </Show>
                        {instances
                            .iter()
                            .map(|win| instance_item(runtime, app_menu, win))
                            .collect_view()}
                        <div class="taskbar-menu-separator" role="separator"></div>
                        <button
                            role="menuitem"
                            class="taskbar-menu-item"
                            disabled=restore_actions.is_empty()
                            on:click=restore_all
                        >
                            "Restore all"
                        </button>
                        <button
                            role="menuitem"
                            class="taskbar-menu-item"
                            disabled=minimize_actions.is_empty()
                            on:click=minimize_all
                        >
                            "Minimize all"
                        </button>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}

fn instance_item(
    runtime: DesktopRuntimeContext,
    app_menu: RwSignal<Option<TaskbarAppMenuState>>,
    win: &WindowRecord,
) -> View {
    let window_id = win.id;
    let label = if win.minimized {
        format!("{} (minimized)", win.title)
    } else {
        win.title.clone()
    };

    view! {
        <button
            role="menuitem"
            class="taskbar-menu-item"
            on:click=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                app_menu.set(None);
                runtime.dispatch_action(SessionAction::ToggleMinimize { window_id });
            }
        >
            {label}
        </button>
    }
    .into_view()
}
