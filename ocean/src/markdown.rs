//! Styled text for generated section content.
//!
//! The backend only emits `**bold**` markers, so this is a split, not a
//! parser: one line per `\n`, and within a line every odd-indexed piece
//! between `**` markers is bold. An unmatched trailing `**` makes the rest of
//! the line bold, same as the export renderer on the server.

pub const EMPTY_PLACEHOLDER: &str = "No content generated.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub runs: Vec<StyledRun>,
}

impl StyledLine {
    pub fn is_blank(&self) -> bool {
        self.runs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledDocument {
    /// Nothing generated yet
    Empty,
    Lines(Vec<StyledLine>),
}

impl StyledDocument {
    pub fn lines(&self) -> &[StyledLine] {
        match self {
            StyledDocument::Empty => &[],
            StyledDocument::Lines(lines) => lines,
        }
    }

    /// Text with the markers removed, lines joined by `\n`
    pub fn plain_text(&self) -> String {
        self.lines()
            .iter()
            .map(|line| line.runs.iter().map(|r| r.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn render_styled(text: &str) -> StyledDocument {
    if text.is_empty() {
        return StyledDocument::Empty;
    }

    let lines = text
        .split('\n')
        .map(|line| StyledLine {
            runs: line
                .split("**")
                .enumerate()
                .filter(|(_, part)| !part.is_empty())
                .map(|(i, part)| StyledRun {
                    text: part.to_string(),
                    bold: i % 2 == 1,
                })
                .collect(),
        })
        .collect();

    StyledDocument::Lines(lines)
}
