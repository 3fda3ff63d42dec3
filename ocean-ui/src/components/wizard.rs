//! New project form: document type plus topic.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use ocean::{AppState, DocType, View};

use crate::app::AppController;
use crate::interop::alert;

#[component]
pub fn Wizard() -> Element {
    let controller = use_context::<AppController>();
    let state = use_context::<Signal<AppState>>();

    let mut doc_type = use_signal(DocType::default);
    let mut topic = use_signal(String::new);

    let busy = state.read().is_loading();

    let back = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.show(View::Dashboard)
    };

    let create = move |_: MouseEvent| {
        let controller = controller.clone();
        let chosen = doc_type();
        let topic_value = topic();
        // Success swaps this screen out; the first-section generation must outlive it.
        spawn_forever(async move {
            match controller.create_project(&topic_value, chosen).await {
                Ok(_) => {}
                Err(e) if e.is_unauthorized() => {}
                Err(e) => alert(&e.user_message("Failed to create project")),
            }
        });
    };

    rsx! {
        div {
            class: "wizard-screen",
            div {
                class: "wizard-card",
                button { class: "link-btn", onclick: back, "← Back to Dashboard" }
                h2 { "Create New Document" }

                label { class: "field-label", "Document Type" }
                div {
                    class: "doc-type-grid",
                    for kind in DocType::ALL {
                        button {
                            key: "{kind.extension()}",
                            class: if doc_type() == kind { "doc-type-option selected" } else { "doc-type-option" },
                            onclick: move |_| doc_type.set(kind),
                            "{kind.label()}"
                        }
                    }
                }

                label { class: "field-label", "Topic or Prompt" }
                textarea {
                    class: "wizard-topic",
                    placeholder: "E.g., A strategic analysis of the EV market in 2025...",
                    value: "{topic}",
                    oninput: move |e| topic.set(e.value()),
                }

                button {
                    class: "btn btn-primary btn-wide",
                    disabled: busy || topic().is_empty(),
                    onclick: create,
                    if busy { "Generating outline…" } else { "Generate Outline" }
                }
            }
        }
    }
}
