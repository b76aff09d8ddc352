//! Gallery mini-app: image grid with a zoomed single-image view.

use std::rc::Rc;

use desk_app_contract::{AppModule, AppMountContext};
use desk_host::ContentSource;
use leptos::*;
use serde::Deserialize;
use serde_json::Value;

const GALLERY_FEED_URL: &str = "/api/gallery.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct GalleryItem {
    url: String,
    filename: String,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl GalleryItem {
    fn caption(&self) -> String {
        self.alt.clone().unwrap_or_else(|| self.filename.clone())
    }
}

fn mount(context: AppMountContext) -> View {
    view! { <GalleryApp content=context.content /> }.into_view()
}

/// Registry entry point.
pub fn app_module() -> AppModule {
    AppModule::new(mount)
}

fn items_from_document(document: Value) -> Vec<GalleryItem> {
    document
        .get("items")
        .cloned()
        .and_then(|items| serde_json::from_value(items).ok())
        .unwrap_or_default()
}

async fn fetch_items(content: Rc<dyn ContentSource>) -> Vec<GalleryItem> {
    match content.fetch_json(GALLERY_FEED_URL).await {
        Ok(document) => items_from_document(document),
        Err(err) => {
            logging::warn!("gallery feed unavailable: {err}");
            Vec::new()
        }
    }
}

#[component]
fn GalleryApp(content: Rc<dyn ContentSource>) -> impl IntoView {
    let zoomed = create_rw_signal(None::<GalleryItem>);

    let items = create_local_resource(
        || (),
        move |_| {
            let content = Rc::clone(&content);
            async move { fetch_items(content).await }
        },
    );

    view! {
        <div class="app app-gallery">
            {move || match zoomed.get() {
                Some(item) => {
                    let caption = item.caption();
                    view! {
                        <div class="gallery-zoom" role="dialog" on:click=move |_| zoomed.set(None)>
                            <img class="gallery-zoom-image" src=item.url.clone() alt=caption.clone() />
                            <div class="gallery-zoom-caption">
                                <span class="gallery-zoom-title">{caption}</span>
                                <span class="gallery-zoom-meta">
                                    {item.description.clone().unwrap_or_default()}
                                </span>
                            </div>
                        </div>
                    }
                        .into_view()
                }
                None => view! {
                    <div class="gallery-grid" role="list">
                        {move || {
                            items
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|item| {
                                    let caption = item.caption();
                                    let tile = item.clone();
                                    view! {
                                        <button
                                            role="listitem"
                                            class="gallery-tile"
                                            title=caption.clone()
                                            on:click=move |_| zoomed.set(Some(tile.clone()))
                                        >
                                            <img class="gallery-thumb" src=item.url.clone() alt=caption />
                                            <span class="gallery-name">{item.filename.clone()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                }
                    .into_view(),
            }}
        </div>
    }
}
