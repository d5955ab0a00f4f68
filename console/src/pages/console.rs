//! The console viewport: every region plus the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout already exists in [`ShellState`] when this page mounts. In the
//! browser the page then:
//!
//! 1. restores the navigation region from `localStorage`,
//! 2. spawns the session gate, which probes once and, on failure, waits on
//!    the login channel,
//! 3. persists the navigation region whenever it changes.
//!
//! During SSR none of this runs; the server renders the pre-gate layout
//! with no navigation entries and no login surface.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::login_window::LoginWindow;
use crate::components::navigation::Navigation;
use crate::components::tab_panel::TabPanel;
use crate::net::gate::{LoginTrigger, login_channel};
use crate::state::shell::ShellState;

/// Full-viewport console page.
#[component]
pub fn ConsolePage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    let (trigger, login_signal) = login_channel();
    let trigger: StoredValue<Option<LoginTrigger>> = StoredValue::new(Some(trigger));

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpAuthProbe;
        use crate::net::gate::run_session_gate;
        use crate::util::ui_persistence::BrowserStateStore;

        Effect::new(move || {
            shell.update(|s| s.layout.restore(&BrowserStateStore));
        });

        let nav_state = Memo::new(move |_| shell.with(|s| s.layout.navigation.state().clone()));
        Effect::new(move || {
            nav_state.track();
            shell.with_untracked(|s| s.layout.persist(&mut BrowserStateStore));
        });

        let probe = HttpAuthProbe::new(&shell.with_untracked(|s| s.settings.clone()));
        leptos::task::spawn_local(async move {
            let outcome = run_session_gate(&probe, &login_signal, |event| {
                shell.update(|s| {
                    if let Err(e) = s.apply(event) {
                        log::error!("session gate event {event:?} rejected: {e}");
                    }
                });
            })
            .await;
            log::info!("session gate finished: {outcome:?}");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(login_signal);

    view! {
        <div class="viewport">
            <Header/>
            <div class="viewport__middle">
                <Navigation/>
                <TabPanel/>
            </div>
            <Footer/>
            <Show when=move || shell.with(ShellState::login_visible)>
                <LoginWindow trigger=trigger/>
            </Show>
        </div>
    }
}
