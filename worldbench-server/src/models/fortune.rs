//! Fortune rows and listing order

/// Message of the entry appended to every listing at request time.
pub const SYNTHETIC_MESSAGE: &str = "Additional fortune added at request time.";

/// A single `fortune` row.
///
/// `message` is untrusted text; escape it before putting it in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fortune {
    pub id: i32,
    pub message: String,
}

impl Fortune {
    pub fn new(id: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }

    /// The in-memory entry added to each listing. Never persisted.
    pub fn synthetic() -> Self {
        Self::new(0, SYNTHETIC_MESSAGE)
    }
}

/// Append the synthetic entry and sort by message.
///
/// Ordering is byte-wise on the UTF-8 message and stable, so equal messages
/// keep the order the database returned them in.
pub fn prepare_fortunes(mut fortunes: Vec<Fortune>) -> Vec<Fortune> {
    fortunes.push(Fortune::synthetic());
    fortunes.sort_by(|a, b| a.message.as_bytes().cmp(b.message.as_bytes()));
    fortunes
}
