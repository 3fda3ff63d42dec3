//! Project list with entry points into the wizard and the editor.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use ocean::{AppState, OperationKey, View};

use crate::app::AppController;

#[component]
pub fn Dashboard() -> Element {
    let controller = use_context::<AppController>();
    let state = use_context::<Signal<AppState>>();

    let snapshot = state.read();
    let email = snapshot.session.email().to_string();
    let projects = snapshot.projects.clone();
    let loading = snapshot.is_pending(&OperationKey::LoadProjects);
    drop(snapshot);

    let logout = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.logout()
    };
    let new_project = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.show(View::Wizard)
    };

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "topbar",
                span { class: "topbar-brand", "Ocean" }
                div {
                    class: "topbar-actions",
                    span { class: "topbar-email", "{email}" }
                    button { class: "btn", onclick: logout, "Logout" }
                }
            }
            main {
                class: "dashboard-body",
                div {
                    class: "dashboard-heading",
                    h2 { "Your projects" }
                    button { class: "btn btn-primary", onclick: new_project, "+ New project" }
                }
                if projects.is_empty() {
                    div {
                        class: "dashboard-empty",
                        if loading { "Loading projects…" } else { "No projects yet. Create one to get started." }
                    }
                } else {
                    div {
                        class: "project-grid",
                        for project in projects {
                            {
                                let controller = controller.clone();
                                let project_id = project.id.clone();
                                let summary = project.summary();
                                let progress = format!(
                                    "{} of {} sections generated",
                                    project.generated_count(),
                                    project.sections.len()
                                );
                                rsx! {
                                    div {
                                        key: "{project.id}",
                                        class: "project-card",
                                        title: "{progress}",
                                        onclick: move |_| {
                                            let controller = controller.clone();
                                            let project_id = project_id.clone();
                                            controller.open_project(&project_id);
                                            spawn_forever(async move {
                                                controller.refresh_project(&project_id).await;
                                                let _ = controller.select_section(0).await;
                                            });
                                        },
                                        span { class: "project-type", "{project.doc_type.label()}" }
                                        h3 { "{project.topic}" }
                                        p { class: "project-meta", "{summary}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
