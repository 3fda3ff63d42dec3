//! Login / register form.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use ocean::{AppState, AuthMode, OperationKey};

use crate::app::AppController;

#[component]
pub fn AuthPanel() -> Element {
    let controller = use_context::<AppController>();
    let state = use_context::<Signal<AppState>>();

    let mut mode = use_signal(|| AuthMode::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let busy = state.read().is_pending(&OperationKey::Auth);

    let submit = use_callback(move |_| {
        let controller = controller.clone();
        let current_mode = mode();
        let email_value = email();
        let password_value = password();
        error.set(None);
        spawn_forever(async move {
            if let Err(e) = controller
                .authenticate(current_mode, &email_value, &password_value)
                .await
            {
                error.set(Some(e.user_message("Auth failed")));
            }
        });
    });

    let (title, action, switch_prompt, switch_label) = match mode() {
        AuthMode::Login => ("Sign in", "Login", "No account yet?", "Register"),
        AuthMode::Register => ("Create account", "Register", "Already registered?", "Login"),
    };

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card",
                h1 { class: "auth-brand", "Ocean" }
                h2 { "{title}" }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter && !busy {
                            submit.call(());
                        }
                    },
                }
                if let Some(message) = error() {
                    p { class: "auth-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: move |_| submit.call(()),
                    if busy { "Please wait…" } else { "{action}" }
                }
                p {
                    class: "auth-switch",
                    "{switch_prompt} "
                    a {
                        href: "#",
                        onclick: move |e| {
                            e.prevent_default();
                            error.set(None);
                            mode.set(mode().toggled());
                        },
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
