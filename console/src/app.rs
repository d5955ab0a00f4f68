//! Root application component and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ConsoleSettings, REST_URL_META, TITLE_META};
use crate::pages::console::ConsolePage;
use crate::state::shell::ShellState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides [`ConsoleSettings`] as context; they are echoed into
/// `<meta>` tags so the browser sees the same values after hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<ConsoleSettings>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=REST_URL_META content=settings.rest_url/>
                <meta name=TITLE_META content=settings.title/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single [`ShellState`] signal and provides it to every region.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = use_context::<ConsoleSettings>().unwrap_or_else(ConsoleSettings::from_document);
    let title = settings.title.clone();
    let shell = RwSignal::new(ShellState::new(settings));
    provide_context(shell);

    view! {
        <Stylesheet id="leptos" href="/pkg/scm-console.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
