//! North region: console title and session status.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::session::{LoginReason, SessionPhase};
use crate::state::shell::ShellState;

/// Fixed-height header region.
#[component]
pub fn Header() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let (region, title) = shell.with_untracked(|s| (s.layout.header, s.settings.title.clone()));
    let phase = move || shell.with(|s| s.session.phase());

    view! {
        <header id=region.id class="region region--north" style=format!("height: {}px", region.height)>
            <div id=region.content_el class="header">
                <h1 class="header__title">{title}</h1>
                <span class="header__status" class:header__status--live=move || phase() == SessionPhase::Authenticated>
                    {move || session_status_label(phase())}
                </span>
            </div>
        </header>
    }
}

/// Short status text for the header.
pub fn session_status_label(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Uninitialized | SessionPhase::PendingProbe => "Connecting...",
        SessionPhase::LoginRequired(LoginReason::Rejected) => "Not logged in",
        SessionPhase::LoginRequired(LoginReason::Unreachable) => "Server unreachable",
        SessionPhase::Authenticated => "Logged in",
    }
}
