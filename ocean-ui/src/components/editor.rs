//! Editor screen: outline on the left, the active section in the middle,
//! feedback and comments on the right.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use ocean::{AppState, Feedback, OperationKey, SectionPhase, View};

use super::markdown::MarkdownView;
use crate::app::AppController;
use crate::interop::{alert, save_download};

#[component]
pub fn Editor() -> Element {
    let state = use_context::<Signal<AppState>>();

    let snapshot = state.read();
    let Some(project) = snapshot.current.clone() else {
        return rsx! {};
    };
    let active = snapshot.active_section;
    let section = project.section(active).cloned().unwrap_or_default();
    let phase = snapshot
        .section_phase(&project.id, active)
        .unwrap_or(SectionPhase::Empty);
    let busy = snapshot.is_loading();
    drop(snapshot);

    rsx! {
        div {
            class: "editor-screen",
            HeaderBar {
                project_id: project.id.clone(),
                topic: project.topic.clone(),
                extension: project.doc_type.extension().to_uppercase(),
            }
            div {
                class: "editor-body",
                OutlineSidebar {}
                main {
                    class: "editor-main",
                    div {
                        class: "page",
                        div {
                            class: "page-header",
                            h1 { "{section.title}" }
                            p { class: "page-subtitle", "Draft • {project.doc_type.extension()}" }
                        }
                        div {
                            class: "page-content",
                            if phase == SectionPhase::Generating && section.content.is_empty() {
                                div { class: "page-generating", "Generating content with AI..." }
                            } else {
                                MarkdownView { content: section.content.clone() }
                            }
                        }
                    }
                    RefineBar { project_id: project.id.clone(), index: active, busy }
                }
                ToolsSidebar {
                    project_id: project.id.clone(),
                    index: active,
                    feedback: section.feedback,
                    comments: section.comments.clone(),
                }
            }
        }
    }
}

#[component]
fn HeaderBar(project_id: String, topic: String, extension: String) -> Element {
    let controller = use_context::<AppController>();
    let state = use_context::<Signal<AppState>>();

    let exporting = state.read().is_pending(&OperationKey::Export {
        project_id: project_id.clone(),
    });

    let back = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.show(View::Dashboard)
    };
    let export = move |_: MouseEvent| {
        let controller = controller.clone();
        let project_id = project_id.clone();
        spawn_forever(async move {
            match controller.export_project(&project_id).await {
                Ok(artifact) => {
                    if let Err(e) = save_download(&artifact) {
                        alert(&format!("Export failed: {e}"));
                    }
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => alert(&e.user_message("Export failed")),
            }
        });
    };

    rsx! {
        header {
            class: "topbar",
            div {
                class: "topbar-title",
                button { class: "btn", onclick: back, "☰" }
                h2 { "{topic}" }
                span { class: "type-badge", "{extension}" }
            }
            button {
                class: "btn btn-export",
                disabled: exporting,
                onclick: export,
                if exporting { "Exporting…" } else { "Export" }
            }
        }
    }
}

#[component]
fn OutlineSidebar() -> Element {
    let controller = use_context::<AppController>();
    let state = use_context::<Signal<AppState>>();

    let snapshot = state.read();
    let Some(project) = snapshot.current.as_ref() else {
        return rsx! {};
    };
    let rows: Vec<(usize, String, SectionPhase)> = project
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let phase = snapshot
                .section_phase(&project.id, i)
                .unwrap_or(SectionPhase::Empty);
            (i, s.title.clone(), phase)
        })
        .collect();
    let active = snapshot.active_section;
    drop(snapshot);

    rsx! {
        aside {
            class: "outline-sidebar",
            h3 { class: "sidebar-heading", "Structure" }
            div {
                class: "outline-list",
                for (index, title, phase) in rows {
                    {
                        let controller = controller.clone();
                        let marker = match phase {
                            SectionPhase::Generated => "dot dot-done",
                            SectionPhase::Generating | SectionPhase::Refining => "dot dot-busy",
                            SectionPhase::Empty => "dot",
                        };
                        rsx! {
                            button {
                                key: "{index}",
                                class: if index == active { "outline-item active" } else { "outline-item" },
                                onclick: move |_| {
                                    let controller = controller.clone();
                                    spawn_forever(async move {
                                        match controller.select_section(index).await {
                                            Err(e) if !e.is_unauthorized() => {
                                                alert(&e.user_message("Failed to generate section"));
                                            }
                                            _ => {}
                                        }
                                    });
                                },
                                span { class: "outline-title", "{index + 1}. {title}" }
                                span { class: marker }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RefineBar(project_id: String, index: usize, busy: bool) -> Element {
    let controller = use_context::<AppController>();
    let mut instruction = use_signal(String::new);

    let refine = move |_: MouseEvent| {
        let controller = controller.clone();
        let project_id = project_id.clone();
        let text = instruction();
        spawn_forever(async move {
            match controller.refine_section(&project_id, index, &text).await {
                Ok(()) => {
                    // The bar may be gone by now (401 reset, view change)
                    if let Ok(mut text) = instruction.try_write() {
                        text.clear();
                    }
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => alert(&e.user_message("Refine failed")),
            }
        });
    };

    rsx! {
        div {
            class: "refine-bar",
            input {
                r#type: "text",
                placeholder: "Ask AI to refine this page...",
                value: "{instruction}",
                oninput: move |e| instruction.set(e.value()),
            }
            button {
                class: "btn btn-primary",
                disabled: busy,
                onclick: refine,
                if busy { "…" } else { "Refine" }
            }
        }
    }
}

#[component]
fn ToolsSidebar(
    project_id: String,
    index: usize,
    feedback: Option<Feedback>,
    comments: Vec<String>,
) -> Element {
    let controller = use_context::<AppController>();
    let mut draft = use_signal(String::new);

    let vote = {
        let controller = controller.clone();
        let project_id = project_id.clone();
        move |kind: Feedback| {
            let controller = controller.clone();
            let project_id = project_id.clone();
            spawn_forever(async move {
                controller.toggle_feedback(&project_id, index, kind).await;
            });
        }
    };
    let like = {
        let vote = vote.clone();
        move |_: MouseEvent| vote(Feedback::Like)
    };
    let dislike = move |_: MouseEvent| vote(Feedback::Dislike);

    let add_comment = move |_: MouseEvent| {
        let controller = controller.clone();
        let project_id = project_id.clone();
        let text = draft();
        if text.is_empty() {
            return;
        }
        draft.set(String::new());
        spawn_forever(async move {
            controller.add_comment(&project_id, index, &text).await;
        });
    };

    rsx! {
        aside {
            class: "tools-sidebar",
            h3 { class: "sidebar-heading", "Feedback & Notes" }
            div {
                class: "feedback-box",
                p { "Was this generation helpful?" }
                div {
                    class: "feedback-buttons",
                    button {
                        class: if feedback == Some(Feedback::Like) { "btn vote liked" } else { "btn vote" },
                        onclick: like,
                        "👍 Like"
                    }
                    button {
                        class: if feedback == Some(Feedback::Dislike) { "btn vote disliked" } else { "btn vote" },
                        onclick: dislike,
                        "👎 Dislike"
                    }
                }
            }
            div {
                class: "comments-box",
                h4 { "Comments" }
                div {
                    class: "comment-list",
                    for (i, comment) in comments.iter().enumerate() {
                        div { key: "{i}", class: "comment", "{comment}" }
                    }
                }
                textarea {
                    placeholder: "Add a note...",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                }
                button { class: "btn btn-dark btn-wide", onclick: add_comment, "Add Comment" }
            }
        }
    }
}
