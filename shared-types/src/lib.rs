//! Shared types between the client core and the web UI
//!
//! These types mirror the JSON the document backend speaks:
//! - Project / Section documents returned by `/projects`
//! - Request and response bodies for auth, generation, refinement and save
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Types
// ============================================================================

/// Output format of a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DocType {
    /// Word report
    #[default]
    #[serde(rename = "docx")]
    Report,
    /// Slide deck
    #[serde(rename = "pptx")]
    SlideDeck,
}

impl DocType {
    pub const ALL: [DocType; 2] = [DocType::Report, DocType::SlideDeck];

    /// File extension, identical to the wire name
    pub fn extension(&self) -> &'static str {
        match self {
            DocType::Report => "docx",
            DocType::SlideDeck => "pptx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocType::Report => "Word Report",
            DocType::SlideDeck => "PowerPoint",
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Like / dislike verdict on a generated section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Like,
    Dislike,
}

impl Feedback {
    /// Toggle semantics: the same verdict clears, a different one replaces.
    pub fn toggle(current: Option<Feedback>, kind: Feedback) -> Option<Feedback> {
        if current == Some(kind) {
            None
        } else {
            Some(kind)
        }
    }
}

/// One outline entry of a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// True once AI output has been accepted for this section
    #[serde(default)]
    pub generated: bool,
    #[serde(default)]
    pub feedback: Option<Feedback>,
    /// Append-only from the client side
    #[serde(default)]
    pub comments: Vec<String>,
}

impl Section {
    /// Outline skeleton: title only, nothing generated yet
    pub fn skeleton(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Whether the content is authoritative AI output
    pub fn has_generated_content(&self) -> bool {
        self.generated && !self.content.is_empty()
    }
}

/// A user-owned document generation task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub doc_type: DocType,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Project {
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub fn generated_count(&self) -> usize {
        self.sections.iter().filter(|s| s.generated).count()
    }

    /// Card line for the project list: "3 Sections • 1/14/2025".
    /// The date part is left out when the backend sent none.
    pub fn summary(&self) -> String {
        let count = format!("{} Sections", self.sections.len());
        match self.created_at {
            Some(at) => format!("{count} • {}", at.format("%-m/%-d/%Y")),
            None => count,
        }
    }
}

// ============================================================================
// API Types
// ============================================================================

/// Body of `POST /login` and `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful auth reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
}

/// Error body the backend attaches to non-2xx replies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `POST /projects`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateProjectRequest {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub topic: String,
}

/// Reply of `POST /projects/{id}/generate-outline`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutlineResponse {
    pub sections: Vec<Section>,
}

/// Body of `POST /projects/{id}/sections/generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateSectionRequest {
    pub index: usize,
}

/// Body of `POST /projects/{id}/sections/refine`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefineSectionRequest {
    pub index: usize,
    pub instruction: String,
}

/// Reply of both generate and refine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionContentResponse {
    pub content: String,
}

/// Body of `PUT /projects/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveSectionsRequest {
    pub sections: Vec<Section>,
}

// ============================================================================
// Timestamps
// ============================================================================

/// The backend serializes datetimes as HTTP dates ("Tue, 14 Jan 2025 10:00:00 GMT");
/// RFC 3339 is accepted as well. Always written back as RFC 3339.
mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .map(|ts| ts.with_timezone(&Utc))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_project_summary_counts_sections_and_shows_date() {
        let mut project: Project = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "topic": "EV market",
            "type": "pptx",
            "created_at": "Tue, 14 Jan 2025 10:30:00 GMT",
            "sections": [{"title": "A"}, {"title": "B"}, {"title": "C"}]
        }))
        .unwrap();
        assert_eq!(project.summary(), "3 Sections • 1/14/2025");

        project.created_at = None;
        assert_eq!(project.summary(), "3 Sections");
    }

    #[test]
    fn test_doc_type_wire_names() {
        assert_eq!(serde_json::to_string(&DocType::Report).unwrap(), "\"docx\"");
        assert_eq!(
            serde_json::from_str::<DocType>("\"pptx\"").unwrap(),
            DocType::SlideDeck
        );
        assert_eq!(DocType::SlideDeck.extension(), "pptx");
    }

    #[test]
    fn test_feedback_toggle() {
        assert_eq!(Feedback::toggle(None, Feedback::Like), Some(Feedback::Like));
        assert_eq!(Feedback::toggle(Some(Feedback::Like), Feedback::Like), None);
        assert_eq!(
            Feedback::toggle(Some(Feedback::Like), Feedback::Dislike),
            Some(Feedback::Dislike)
        );
    }

    #[test]
    fn test_outline_skeleton_from_backend() {
        let json = r#"{"sections": [
            {"title": "Intro", "content": "", "generated": false, "feedback": null, "comments": []},
            {"title": "Market"}
        ]}"#;
        let outline: OutlineResponse = serde_json::from_str(json).unwrap();
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[1], Section::skeleton("Market"));
        assert!(!outline.sections[0].has_generated_content());
    }

    #[test]
    fn test_project_from_backend_document() {
        let json = r#"{
            "_id": "65a1",
            "user_id": "u1",
            "topic": "EV market",
            "type": "pptx",
            "sections": [],
            "created_at": "Tue, 14 Jan 2025 10:30:00 GMT",
            "last_modified": "Tue, 14 Jan 2025 10:30:00 GMT"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "65a1");
        assert_eq!(project.doc_type, DocType::SlideDeck);
        let created = project.created_at.unwrap();
        assert_eq!((created.year(), created.month(), created.day()), (2025, 1, 14));
        assert_eq!(created.hour(), 10);
    }

    #[test]
    fn test_project_tolerates_missing_or_odd_timestamp() {
        let project: Project =
            serde_json::from_str(r#"{"_id": "1", "topic": "t", "type": "docx"}"#).unwrap();
        assert!(project.created_at.is_none());
        assert!(project.sections.is_empty());

        let project: Project = serde_json::from_str(
            r#"{"_id": "1", "topic": "t", "type": "docx", "created_at": "yesterday"}"#,
        )
        .unwrap();
        assert!(project.created_at.is_none());
    }

    #[test]
    fn test_save_request_serializes_feedback_lowercase() {
        let mut section = Section::skeleton("Intro");
        section.feedback = Some(Feedback::Dislike);
        let body = serde_json::to_value(SaveSectionsRequest {
            sections: vec![section],
        })
        .unwrap();
        assert_eq!(body["sections"][0]["feedback"], "dislike");
        assert_eq!(body["sections"][0]["comments"], serde_json::json!([]));
    }

    #[test]
    fn test_timestamp_parse_rfc3339() {
        assert!(timestamp::parse("2025-01-14T10:30:00Z").is_some());
        assert!(timestamp::parse("").is_none());
    }
}
