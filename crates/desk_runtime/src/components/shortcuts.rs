use super::*;
use crate::apps;
use crate::launcher;

#[component]
/// Desktop shortcut grid: single click selects, double click opens.
pub(super) fn DesktopShortcuts(shortcuts: Vec<ApplicationId>) -> impl IntoView {
    let selected = create_rw_signal(None::<ApplicationId>);

    view! {
        <div class="desktop-icons" aria-label="Desktop">
            <ul class="desktop-grid" role="list">
                {shortcuts
                    .into_iter()
                    .filter(|app_id| apps::descriptor_by_id(app_id.as_str()).is_some())
                    .map(|app_id| view! { <DesktopShortcut app_id=app_id selected=selected /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn DesktopShortcut(
    app_id: ApplicationId,
    selected: RwSignal<Option<ApplicationId>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let Some(descriptor) = apps::descriptor_by_id(app_id.as_str()) else {
        return ().into_view();
    };

    let is_selected = {
        let app_id = app_id.clone();
        Signal::derive(move || selected.get().as_ref() == Some(&app_id))
    };

    let on_click = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            selected.set(Some(app_id.clone()));
        }
    };
    let on_double_click = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            if let Some(action) = launcher::open_new_instance_action(&app_id) {
                runtime.dispatch_action(action);
            }
        }
    };
    let on_blur = {
        let app_id = app_id.clone();
        move |_| {
            selected.update(|current| {
                if current.as_ref() == Some(&app_id) {
                    *current = None;
                }
            });
        }
    };

    view! {
        <li role="listitem">
            <button
                class=move || {
                    if is_selected.get() {
                        "desktop-icon is-selected"
                    } else {
                        "desktop-icon"
                    }
                }
                title=descriptor.title
                aria-label=descriptor.title
                on:click=on_click
                on:dblclick=on_double_click
                on:blur=on_blur
            >
                {match descriptor.icon_url {
                    Some(url) => view! { <img class="desktop-icon-image" src=url alt="" /> }
                        .into_view(),
                    None => view! { <span class="desktop-icon-dot" aria-hidden="true"></span> }
                        .into_view(),
                }}
                <span class="desktop-icon-label">{descriptor.title}</span>
            </button>
        </li>
    }
    .into_view()
}
