//! User-facing rendering of clustering failures.
//!
//! Stateless mapping from a [`ClusteringFailure`] to the blocks the
//! rendering layer displays. Each failure class renders a bounded,
//! human-readable explanation; unknown errors degrade to the generic
//! fallback rather than failing silently.

use explorer_model::ClusteringFailure;

/// One block of a rendered error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    /// Rendered with strong emphasis (the error detail itself).
    Emphasis(String),
    /// De-emphasized closing note.
    Note(&'static str),
}

/// A displayable error message: a heading plus ordered content blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub heading: &'static str,
    pub blocks: Vec<Block>,
}

const ENGINE_ERROR_HEADING: &str = "Clustering engine error";
const ENGINE_ERROR_LEAD: &str = "Results could not be clustered due to the following error:";
const CLOSING_NOTE: &str = "That's all we know.";

impl ErrorView {
    /// Build the message shown for a failure.
    pub fn for_failure(failure: &ClusteringFailure) -> Self {
        match failure {
            ClusteringFailure::RateLimited => Self {
                heading: "Too many clustering requests",
                blocks: vec![Block::Paragraph(
                    "You are making too many clustering requests for our little \
                     demo server to handle. Please check back in a minute."
                        .to_string(),
                )],
            },
            ClusteringFailure::RequestTooLarge => Self {
                heading: "Too much data to cluster",
                blocks: vec![Block::Paragraph(
                    "You sent too much data for our little demo server to \
                     handle. Lower the number of search results and try again."
                        .to_string(),
                )],
            },
            ClusteringFailure::EngineException { stacktrace } => Self {
                heading: ENGINE_ERROR_HEADING,
                blocks: vec![
                    Block::Paragraph(ENGINE_ERROR_LEAD.to_string()),
                    Block::Emphasis(stacktrace.lines().next().unwrap_or("").to_string()),
                    Block::Note(CLOSING_NOTE),
                ],
            },
            ClusteringFailure::EngineMessage { message } => Self {
                heading: ENGINE_ERROR_HEADING,
                blocks: vec![
                    Block::Paragraph(ENGINE_ERROR_LEAD.to_string()),
                    Block::Emphasis(message.clone()),
                    Block::Note(CLOSING_NOTE),
                ],
            },
            ClusteringFailure::Generic { status_text } => Self {
                heading: ENGINE_ERROR_HEADING,
                blocks: vec![
                    Block::Paragraph(ENGINE_ERROR_LEAD.to_string()),
                    Block::Paragraph(soft_break(status_text)),
                    Block::Note(CLOSING_NOTE),
                ],
            },
        }
    }
}

/// Insert a zero-width space (U+200B) immediately after every `&`, `/` and
/// `?` character.
///
/// Status texts often contain URL fragments; the extra break points let the
/// rendering layer wrap them without auto-linkification kicking in. The
/// insertion rule is an external contract and must stay byte-exact.
pub fn soft_break(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        out.push(ch);
        if matches!(ch, '&' | '/' | '?') {
            out.push('\u{200B}');
        }
    }
    out
}
