//! Notes mini-app: an ephemeral scratch pad.

use desk_app_contract::{AppModule, AppMountContext};
use leptos::*;

fn mount(_context: AppMountContext) -> View {
    view! { <NotesApp /> }.into_view()
}

/// Registry entry point.
pub fn app_module() -> AppModule {
    AppModule::new(mount)
}

#[component]
fn NotesApp() -> impl IntoView {
    view! {
        <div class="app app-notes">
            <h2>"Notes"</h2>
            <textarea class="notes-pad" placeholder="Scratch space"></textarea>
        </div>
    }
}
