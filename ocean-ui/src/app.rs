//! Root component: builds the controller, restores the session and routes on
//! the derived screen.

use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use ocean::{AppState, ClientConfig, Controller, Gateway, Screen};

use crate::components::{AuthPanel, Dashboard, Editor, Wizard, APP_STYLES};
use crate::storage::LocalSessionStorage;
use crate::store::SignalStore;
use crate::transport::GlooTransport;

pub type AppController = Controller<GlooTransport, SignalStore, LocalSessionStorage>;

fn build_controller(state: Signal<AppState>) -> AppController {
    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        error!("Invalid API base, using default: {e}");
        ClientConfig::default()
    });
    Controller::new(
        Gateway::new(GlooTransport, config),
        SignalStore::new(state),
        LocalSessionStorage,
    )
}

#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| Signal::new(AppState::default()));
    let controller = use_context_provider(|| build_controller(state));

    use_hook(move || {
        spawn(async move {
            controller.start().await;
        });
    });

    let screen = state.read().screen();

    rsx! {
        style { {APP_STYLES} }
        div {
            class: "ocean-app",
            match screen {
                Screen::Auth => rsx! { AuthPanel {} },
                Screen::Dashboard => rsx! { Dashboard {} },
                Screen::Wizard => rsx! { Wizard {} },
                Screen::Editor => rsx! { Editor {} },
                Screen::Loading => rsx! {
                    div { class: "ocean-loading", "Loading…" }
                },
            }
        }
    }
}
