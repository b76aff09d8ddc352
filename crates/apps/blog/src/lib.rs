//! Blog mini-app: post list with an embedded reader view.

use std::rc::Rc;

use desk_app_contract::{AppModule, AppMountContext};
use desk_host::ContentSource;
use leptos::*;
use serde::Deserialize;
use serde_json::Value;

const BLOG_FEED_URL: &str = "/api/blogs.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPost {
    title: String,
    #[serde(default)]
    date: Option<String>,
    embed_url: String,
    #[serde(default)]
    description: Option<String>,
}

fn mount(context: AppMountContext) -> View {
    // A deep link can land directly on one post.
    let initial_embed = context
        .payload
        .get("postSlug")
        .and_then(Value::as_str)
        .map(|slug| format!("/embed/blog/{slug}/"));
    view! { <BlogApp content=context.content initial_embed=initial_embed /> }.into_view()
}

/// Registry entry point.
pub fn app_module() -> AppModule {
    AppModule::new(mount)
}

fn posts_from_document(document: Value) -> Vec<BlogPost> {
    document
        .get("items")
        .cloned()
        .and_then(|items| serde_json::from_value(items).ok())
        .unwrap_or_default()
}

async fn fetch_posts(content: Rc<dyn ContentSource>) -> Vec<BlogPost> {
    match content.fetch_json(BLOG_FEED_URL).await {
        Ok(document) => posts_from_document(document),
        Err(err) => {
            logging::warn!("blog feed unavailable: {err}");
            Vec::new()
        }
    }
}

#[component]
fn BlogApp(content: Rc<dyn ContentSource>, initial_embed: Option<String>) -> impl IntoView {
    let embed = create_rw_signal(initial_embed);

    let posts = create_local_resource(
        || (),
        move |_| {
            let content = Rc::clone(&content);
            async move { fetch_posts(content).await }
        },
    );

    view! {
        {move || match embed.get() {
            Some(url) => view! {
                <div class="app app-blog blog-reader">
                    <iframe class="blog-embed" src=url></iframe>
                </div>
            }
                .into_view(),
            None => view! {
                <div class="app app-blog">
                    <h2>"Blog"</h2>
                    <ul class="blog-list">
                        {move || {
                            posts
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|post| {
                                    let open_url = post.embed_url.clone();
                                    view! {
                                        <li>
                                            <button
                                                class="blog-entry"
                                                on:click=move |_| embed.set(Some(open_url.clone()))
                                            >
                                                <span class="blog-entry-title">{post.title.clone()}</span>
                                                <span class="blog-entry-date">
                                                    {post.date.clone().unwrap_or_default()}
                                                </span>
                                                <span class="blog-entry-summary">
                                                    {post.description.clone().unwrap_or_default()}
                                                </span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            }
                .into_view(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn feed_items_decode_into_posts() {
        let document = json!({
            "items": [
                {
                    "title": "Hello",
                    "date": "2024-05-01",
                    "embedUrl": "/embed/blog/hello/",
                    "description": "First post"
                }
            ]
        });
        let posts = posts_from_document(document);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].embed_url, "/embed/blog/hello/");
    }

    #[test]
    fn malformed_feeds_decode_to_an_empty_list() {
        assert_eq!(posts_from_document(json!({ "items": "nope" })), vec![]);
        assert_eq!(posts_from_document(json!(null)), vec![]);
    }
}
