use shared_types::{DocType, Project};

/// A rendered document ready to hand to the browser as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// `topic` with spaces replaced by underscores, plus the type extension.
pub fn export_filename(topic: &str, doc_type: DocType) -> String {
    format!("{}.{}", topic.replace(' ', "_"), doc_type.extension())
}

/// Used when the backend omits a content type
pub fn default_content_type(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Report => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        DocType::SlideDeck => {
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        }
    }
}

impl ExportArtifact {
    pub fn for_project(project: &Project, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: export_filename(&project.topic, project.doc_type),
            content_type: content_type
                .filter(|ct| !ct.trim().is_empty())
                .unwrap_or_else(|| default_content_type(project.doc_type).to_string()),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_replaces_spaces() {
        assert_eq!(export_filename("EV market", DocType::SlideDeck), "EV_market.pptx");
        assert_eq!(
            export_filename("Q3  plan 2025", DocType::Report),
            "Q3__plan_2025.docx"
        );
    }
}
