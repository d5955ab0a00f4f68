//! Center region: the tab container.
//!
//! DESIGN
//! ======
//! Tab bodies are keyed by panel instance, so focusing a tab or attaching a
//! new one never re-creates an existing panel's view. Inactive bodies stay
//! mounted and are only hidden.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::rest_grid::RestGrid;
use crate::state::panels::{Panel, PanelKind, WELCOME_PANEL_ID};
use crate::state::shell::ShellState;

/// Tab strip plus the bodies of every attached panel.
#[component]
pub fn TabPanel() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let panels = move || shell.with(|s| s.layout.center.iter().cloned().collect::<Vec<Panel>>());

    view! {
        <main class="region region--center">
            <nav class="tab-strip">
                <For each=panels key=Panel::instance children=move |panel| view! { <Tab panel=panel/> }/>
            </nav>
            <div class="tab-body">
                <For each=panels key=Panel::instance children=move |panel| view! { <TabBody panel=panel/> }/>
            </div>
        </main>
    }
}

#[component]
fn Tab(panel: Panel) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let id = StoredValue::new(panel.id().to_owned());
    let is_active = move || shell.with(|s| id.with_value(|id| s.layout.center.active_id() == Some(id.as_str())));

    let on_activate = move |_| {
        shell.update(|s| {
            if let Err(e) = id.with_value(|id| s.layout.center.activate(id)) {
                log::warn!("{e}");
            }
        });
    };
    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        shell.update(|s| {
            if let Err(e) = id.with_value(|id| s.layout.center.close(id)) {
                log::warn!("{e}");
            }
        });
    };

    view! {
        <div class="tab" class:tab--active=is_active on:click=on_activate>
            <span class="tab__title">{panel.title().to_owned()}</span>
            {panel.closable().then(|| view! {
                <button class="tab__close" title="Close" on:click=on_close>"\u{00d7}"</button>
            })}
        </div>
    }
}

#[component]
fn TabBody(panel: Panel) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let id = panel.id().to_owned();
    let dom_id = id.clone();
    let is_active = move || shell.with(|s| s.layout.center.active_id() == Some(id.as_str()));

    let content = match panel.kind() {
        PanelKind::RestGrid(config) => view! { <RestGrid config=config.clone()/> }.into_any(),
        PanelKind::Static if panel.id() == WELCOME_PANEL_ID => view! { <Welcome/> }.into_any(),
        PanelKind::Static => ().into_any(),
    };

    view! {
        <section id=dom_id class="tab-body__panel" style:display=move || if is_active() { "block" } else { "none" }>
            {content}
        </section>
    }
}

#[component]
fn Welcome() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let title = shell.with_untracked(|s| s.settings.title.clone());
    let hint = move || {
        if shell.with(ShellState::navigation_available) {
            "Choose an entry from the navigation on the left."
        } else {
            "Navigation becomes available once you are logged in."
        }
    };

    view! {
        <div class="welcome">
            <h2>{format!("Welcome to {title}")}</h2>
            <p>{hint}</p>
        </div>
    }
}
