//! Logs mini-app: hierarchical project/part browser with an embedded viewer.

use std::collections::HashMap;
use std::rc::Rc;

use desk_app_contract::{AppModule, AppMountContext};
use desk_host::ContentSource;
use leptos::*;
use serde::Deserialize;
use serde_json::Value;

const LOGS_INDEX_URL: &str = "/api/logs/index.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogProject {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogPart {
    slug: String,
    title: String,
    embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct LogsLaunch {
    project_id: Option<String>,
    part_slug: Option<String>,
}

impl LogsLaunch {
    fn from_payload(payload: &Value) -> Self {
        Self {
            project_id: payload
                .get("projectId")
                .and_then(Value::as_str)
                .map(str::to_string),
            part_slug: payload
                .get("partSlug")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

fn mount(context: AppMountContext) -> View {
    let initial = LogsLaunch::from_payload(&context.payload);
    view! { <LogsApp content=context.content initial=initial /> }.into_view()
}

/// Registry entry point.
pub fn app_module() -> AppModule {
    AppModule::new(mount)
}

fn projects_from_document(document: Value) -> Vec<LogProject> {
    document
        .get("items")
        .cloned()
        .and_then(|items| serde_json::from_value(items).ok())
        .unwrap_or_default()
}

fn parts_from_document(document: Value) -> Vec<LogPart> {
    document
        .get("parts")
        .cloned()
        .and_then(|parts| serde_json::from_value(parts).ok())
        .unwrap_or_default()
}

fn parts_url(project_id: &str) -> String {
    format!("/api/logs/{project_id}.json")
}

async fn fetch_projects(content: Rc<dyn ContentSource>) -> Vec<LogProject> {
    match content.fetch_json(LOGS_INDEX_URL).await {
        Ok(document) => projects_from_document(document),
        Err(err) => {
            logging::warn!("logs index unavailable: {err}");
            Vec::new()
        }
    }
}

async fn fetch_parts(content: Rc<dyn ContentSource>, project_id: &str) -> Vec<LogPart> {
    match content.fetch_json(&parts_url(project_id)).await {
        Ok(document) => parts_from_document(document),
        Err(err) => {
            logging::warn!("log parts unavailable for {project_id}: {err}");
            Vec::new()
        }
    }
}

// Loads the project's parts (once) and points the viewer at the requested
// part, falling back to the project's own embed.
fn open_project(
    content: Rc<dyn ContentSource>,
    parts_by_project: RwSignal<HashMap<String, Vec<LogPart>>>,
    embed: RwSignal<Option<String>>,
    project: LogProject,
    focus_part: Option<String>,
) {
    spawn_local(async move {
        let cached = parts_by_project.get_untracked().get(&project.id).cloned();
        let parts = match cached {
            Some(parts) => parts,
            None => {
                let fetched = fetch_parts(content, &project.id).await;
                parts_by_project.update(|cache| {
                    cache.insert(project.id.clone(), fetched.clone());
                });
                fetched
            }
        };
        let target = focus_part.and_then(|slug| {
            parts
                .iter()
                .find(|part| part.slug.eq_ignore_ascii_case(&slug))
                .map(|part| part.embed_url.clone())
        });
        embed.set(target.or(Some(project.embed_url.clone())));
    });
}

#[component]
fn LogsApp(content: Rc<dyn ContentSource>, initial: LogsLaunch) -> impl IntoView {
    let expanded = create_rw_signal(Vec::<String>::new());
    let parts_by_project = create_rw_signal(HashMap::<String, Vec<LogPart>>::new());
    let embed = create_rw_signal(None::<String>);
    let initial_applied = create_rw_signal(false);

    let projects = create_local_resource(
        || (),
        {
            let content = Rc::clone(&content);
            move |_| {
                let content = Rc::clone(&content);
                async move { fetch_projects(content).await }
            }
        },
    );

    let on_toggle = Callback::new({
        let content = Rc::clone(&content);
        move |project: LogProject| {
            let id = project.id.clone();
            let is_expanding = !expanded.get_untracked().contains(&id);
            if is_expanding {
                expanded.update(|list| list.push(id));
                open_project(
                    Rc::clone(&content),
                    parts_by_project,
                    embed,
                    project,
                    None,
                );
            } else {
                expanded.update(|list| list.retain(|entry| entry != &id));
            }
        }
    });

    // Deep-link landing: once the index is in, expand the requested project.
    create_effect({
        let content = Rc::clone(&content);
        move |_| {
            if initial_applied.get_untracked() {
                return;
            }
            let Some(projects) = projects.get() else {
                return;
            };
            let Some(wanted) = initial.project_id.clone() else {
                initial_applied.set(true);
                return;
            };
            initial_applied.set(true);
            if let Some(project) = projects
                .iter()
                .find(|project| project.id.eq_ignore_ascii_case(&wanted))
            {
                let project = project.clone();
                expanded.update(|list| {
                    if !list.contains(&project.id) {
                        list.push(project.id.clone());
                    }
                });
                open_project(
                    Rc::clone(&content),
                    parts_by_project,
                    embed,
                    project,
                    initial.part_slug.clone(),
                );
            }
        }
    });

    view! {
        <div class="app app-logs">
            <aside class="logs-sidebar" aria-label="Logs navigation">
                <div class="logs-heading">"Logs"</div>
                <ul class="logs-tree" role="tree">
                    {move || {
                        projects
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|project| {
                                let is_expanded = {
                                    let id = project.id.clone();
                                    Signal::derive(move || expanded.get().contains(&id))
                                };
                                let parts = {
                                    let id = project.id.clone();
                                    Signal::derive(move || {
                                        parts_by_project.get().get(&id).cloned().unwrap_or_default()
                                    })
                                };
                                let toggle = {
                                    let project = project.clone();
                                    move |_| on_toggle.call(project.clone())
                                };
                                view! {
                                    <li
                                        role="treeitem"
                                        aria-expanded=move || is_expanded.get().to_string()
                                        class="logs-node"
                                    >
                                        <button class="logs-project" on:click=toggle>
                                            {project.title.clone()}
                                        </button>
                                        <Show when=move || is_expanded.get() fallback=|| ()>
                                            <ul class="logs-parts" role="group">
                                                {move || {
                                                    parts
                                                        .get()
                                                        .into_iter()
                                                        .map(|part| {
                                                            let url = part.embed_url.clone();
                                                            view! {
                                                                <li>
                                                                    <button
                                                                        class="logs-part"
                                                                        on:click=move |_| embed.set(Some(url.clone()))
                                                                    >
                                                                        {part.title.clone()}
                                                                    </button>
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()
                                                }}
                                            </ul>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </aside>
            <div class="logs-viewer">
                {move || match embed.get() {
                    Some(url) => view! { <iframe class="logs-embed" src=url></iframe> }.into_view(),
                    None => view! { <p class="logs-empty">"Select a project"</p> }.into_view(),
                }}
            </div>
        </div>
    }
}
