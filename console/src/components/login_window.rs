//! Modal credential-entry window shown when the session probe fails.
//!
//! The window is only mounted while [`ShellState::login`] is set, so it is
//! never constructed before the probe result is known. A successful login
//! fires the single-use trigger the session gate is waiting on; the gate then
//! hides this window and builds the menu. A failed login keeps the window
//! open with the error and the user resubmits.

use leptos::prelude::*;

use crate::net::gate::LoginTrigger;
use crate::state::login::LoginForm;
use crate::state::shell::ShellState;

/// Login window bound to the shell's [`LoginForm`].
#[component]
pub fn LoginWindow(trigger: StoredValue<Option<LoginTrigger>>) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let form_field = move |read: fn(&LoginForm) -> String| shell.with(|s| s.login.as_ref().map(read).unwrap_or_default());
    let busy = move || shell.with(|s| s.login.as_ref().is_some_and(|f| f.busy));
    let hint = move || shell.with(|s| s.login.as_ref().map(LoginForm::hint).unwrap_or_default());
    let message = move || shell.with(|s| s.login.as_ref().and_then(|f| f.message.clone()));

    let edit = move |apply: fn(&mut LoginForm, String), value: String| {
        shell.update(|s| {
            if let Some(form) = s.login.as_mut() {
                apply(form, value);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut credentials = None;
        shell.update(|s| {
            if let Some(form) = s.login.as_mut() {
                credentials = form.begin_submit().ok();
            }
        });
        let Some((username, password)) = credentials else {
            return;
        };
        let settings = shell.with_untracked(|s| s.settings.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&settings, &username, &password).await {
                Ok(()) => match trigger.try_update_value(Option::take).flatten() {
                    Some(t) => {
                        if !t.fire() {
                            log::warn!("login succeeded but the session gate is no longer waiting");
                        }
                    }
                    None => log::warn!("login trigger already used"),
                },
                Err(e) => shell.update(|s| {
                    if let Some(form) = s.login.as_mut() {
                        form.submit_failed(&e.to_string());
                    }
                }),
            }
        });
    };

    view! {
        <div class="login-mask">
            <div class="login-window" role="dialog" aria-labelledby="login-window-title">
                <h2 id="login-window-title" class="login-window__title">"Login"</h2>
                <p class="login-window__hint">{hint}</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__field">
                        <span>"Username"</span>
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || form_field(|f| f.username.clone())
                            on:input=move |ev| edit(|f, v| f.username = v, event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || form_field(|f| f.password.clone())
                            on:input=move |ev| edit(|f, v| f.password = v, event_target_value(&ev))
                        />
                    </label>
                    <button class="login-form__submit" type="submit" disabled=busy>
                        "Login"
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-window__message">{move || message().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
