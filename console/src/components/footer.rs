//! South region.

use leptos::prelude::*;

use crate::state::shell::ShellState;

/// Fixed-height footer region.
#[component]
pub fn Footer() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let (region, title) = shell.with_untracked(|s| (s.layout.footer, s.settings.title.clone()));

    view! {
        <footer id=region.id class="region region--south" style=format!("height: {}px", region.height)>
            <div id=region.content_el class="footer">
                {format!("{title} console {}", env!("CARGO_PKG_VERSION"))}
            </div>
        </footer>
    }
}
