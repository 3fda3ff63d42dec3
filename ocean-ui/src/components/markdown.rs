use dioxus::prelude::*;
use ocean::markdown::EMPTY_PLACEHOLDER;
use ocean::{render_styled, StyledDocument};

/// Section body with `**bold**` runs, one paragraph per line.
#[component]
pub fn MarkdownView(content: String) -> Element {
    match render_styled(&content) {
        StyledDocument::Empty => rsx! {
            p { class: "md-placeholder", "{EMPTY_PLACEHOLDER}" }
        },
        StyledDocument::Lines(lines) => rsx! {
            div {
                class: "md-body",
                for (i, line) in lines.into_iter().enumerate() {
                    if line.is_blank() {
                        br { key: "{i}" }
                    } else {
                        p {
                            key: "{i}",
                            for run in line.runs {
                                if run.bold {
                                    strong { "{run.text}" }
                                } else {
                                    span { "{run.text}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
