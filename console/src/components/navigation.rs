//! West region: collapsible, resizable accordion hosting the main menu.
//!
//! The Settings section is a static host for markup supplied by the page.
//!
//! ARCHITECTURE
//! ============
//! The region is always rendered. Its `Navigation` section shows the main
//! menu only once the session gate has built it; before that the section
//! holds a placeholder, so no panel operation is reachable pre-login.
//! Collapsed/width/expanded state lives in the layout and is persisted by the
//! page.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::state::layout::{NAVIGATION_SECTION_ID, NavSection};
use crate::state::shell::ShellState;

/// Navigation region with its accordion sections and splitter.
#[component]
pub fn Navigation() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let (id, title, sections) = shell.with_untracked(|s| {
        let nav = &s.layout.navigation;
        (nav.id, nav.title, nav.sections())
    });
    let collapsed = move || shell.with(|s| s.layout.navigation.collapsed());
    let width = move || shell.with(|s| s.layout.navigation.width());

    // (pointer x, width) at drag start.
    let drag_origin = RwSignal::new(None::<(i32, u32)>);

    let on_drag_start = move |ev: leptos::ev::PointerEvent| {
        drag_origin.set(Some((ev.client_x(), width())));
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    };
    let on_drag_move = move |ev: leptos::ev::PointerEvent| {
        if let Some((start_x, start_width)) = drag_origin.get_untracked() {
            let next = drag_width(start_width, start_x, ev.client_x());
            shell.update(|s| s.layout.navigation.set_width(next));
        }
    };
    let on_drag_end = move |_ev: leptos::ev::PointerEvent| drag_origin.set(None);

    view! {
        <aside
            id=id
            class="region region--west"
            class:region--collapsed=collapsed
            style=move || region_style(collapsed(), width())
        >
            <div class="region__header">
                <span class="region__title">{title}</span>
                <button
                    class="region__collapse"
                    title=move || if collapsed() { "Expand" } else { "Collapse" }
                    on:click=move |_| shell.update(|s| s.layout.navigation.toggle_collapsed())
                >
                    {move || if collapsed() { "\u{00bb}" } else { "\u{00ab}" }}
                </button>
            </div>
            <Show when=move || !collapsed()>
                <div class="accordion">
                    {sections.iter().map(|section| view! { <AccordionSection section=*section/> }).collect_view()}
                </div>
            </Show>
        </aside>
        <Show when=move || !collapsed()>
            <div
                class="region__splitter"
                on:pointerdown=on_drag_start
                on:pointermove=on_drag_move
                on:pointerup=on_drag_end
                on:pointercancel=on_drag_end
            ></div>
        </Show>
    }
}

#[component]
fn AccordionSection(section: NavSection) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let expanded = move || shell.with(|s| s.layout.navigation.expanded_section() == section.id);
    let on_expand = move |_| {
        shell.update(|s| {
            if let Err(e) = s.layout.navigation.expand_section(section.id) {
                log::warn!("{e}");
            }
        });
    };

    view! {
        <section id=section.id class="accordion__section" class:accordion__section--expanded=expanded>
            <h2 class=format!("accordion__title accordion__title--{}", section.icon_cls) on:click=on_expand>
                {section.title}
            </h2>
            <Show when=expanded>
                <div id=section.content_el class="accordion__body">
                    {(section.id == NAVIGATION_SECTION_ID).then(|| view! { <MainMenu/> })}
                </div>
            </Show>
        </section>
    }
}

/// Menu entries built by the session gate. Clicking an entry ensures its
/// panel in the center region.
#[component]
fn MainMenu() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let entries = move || {
        shell.with(|s| s.menu.entries().iter().map(|e| e.label.clone()).enumerate().collect::<Vec<_>>())
    };

    view! {
        <Show
            when=move || shell.with(ShellState::navigation_available)
            fallback=|| view! { <p class="nav-menu__empty">"Navigation is available after login."</p> }
        >
            <ul class="nav-menu">
                <For
                    each=entries
                    key=|(index, label)| (*index, label.clone())
                    children=move |(index, label)| {
                        view! {
                            <li class="nav-menu__item">
                                <a
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        shell.update(|s| match s.activate_menu_entry(index) {
                                            Ok(outcome) => log::debug!("menu entry {index}: {outcome:?}"),
                                            Err(e) => log::error!("menu entry {index} failed: {e}"),
                                        });
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

/// Inline style for the region.
pub fn region_style(collapsed: bool, width: u32) -> String {
    if collapsed { "width: auto".to_owned() } else { format!("width: {width}px") }
}

/// Width after dragging the splitter from `start_x` to `current_x`. The
/// layout clamps the result to its limits.
pub fn drag_width(start_width: u32, start_x: i32, current_x: i32) -> u32 {
    let next = i64::from(start_width) + i64::from(current_x) - i64::from(start_x);
    u32::try_from(next.max(0)).unwrap_or(u32::MAX)
}
