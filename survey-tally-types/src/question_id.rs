use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question within a survey, e.g. `"665f1c2ab0e4"`.
///
/// Opaque and stable for the lifetime of the survey. Answers refer to their
/// question through this id, and the breakdown is keyed by it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let id = QuestionId::new("q1");
        assert_eq!(id.as_str(), "q1");
        assert!(!id.is_empty());
    }

    #[test]
    fn display() {
        let id = QuestionId::new("665f1c2ab0e4");
        assert_eq!(format!("{}", id), "665f1c2ab0e4");
    }

    #[test]
    fn from_str() {
        let id: QuestionId = "q2".into();
        assert_eq!(id, QuestionId::new("q2"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = QuestionId::new("q3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q3\"");

        let back: QuestionId = serde_json::from_str("\"q3\"").unwrap();
        assert_eq!(back, id);
    }
}
