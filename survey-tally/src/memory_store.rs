//! In-memory store for tests and single-process tools.
//!
//! `MemoryStore` keeps surveys and their responses in plain maps. The tests
//! use it in place of a database.
//!
//! # Example
//!
//! ```rust
//! use survey_tally::{MemoryStore, Question, Response, SurveyDefinition, analyze};
//!
//! let store = MemoryStore::new()
//!     .with_survey(
//!         "s1",
//!         SurveyDefinition::new(vec![Question::radio("q1", "Color?", ["Red", "Blue"])]),
//!     )
//!     .with_response("s1", Response::new().with_answer("q1", "Blue"));
//!
//! let breakdown = analyze(&store, "s1").unwrap();
//! assert_eq!(breakdown.total_responses(), 1);
//! ```

use std::collections::HashMap;

use crate::{Response, ResponseStore, SurveyDefinition};

/// A store that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    surveys: HashMap<String, SurveyDefinition>,
    responses: HashMap<String, Vec<Response>>,
}

/// Error type for MemoryStore.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("No survey stored under id: {0}")]
    UnknownSurvey(String),
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            surveys: HashMap::new(),
            responses: HashMap::new(),
        }
    }

    /// Store a survey under the given id, replacing any previous one.
    ///
    /// The survey's own `id` field is set to match.
    pub fn insert_survey(&mut self, id: impl Into<String>, mut survey: SurveyDefinition) {
        let id = id.into();
        survey.id = Some(id.clone());
        self.responses.entry(id.clone()).or_default();
        self.surveys.insert(id, survey);
    }

    /// Add a survey.
    pub fn with_survey(mut self, id: impl Into<String>, survey: SurveyDefinition) -> Self {
        self.insert_survey(id, survey);
        self
    }

    /// Add a response without any submission checks.
    ///
    /// Responses for surveys that are not stored are kept too, as a
    /// document store would.
    pub fn with_response(mut self, survey_id: impl Into<String>, response: Response) -> Self {
        self.responses
            .entry(survey_id.into())
            .or_default()
            .push(response);
        self
    }

    /// Get the number of stored surveys.
    pub fn survey_count(&self) -> usize {
        self.surveys.len()
    }

    /// Get the number of responses stored for a survey.
    pub fn response_count(&self, survey_id: &str) -> usize {
        self.responses.get(survey_id).map_or(0, Vec::len)
    }
}

impl ResponseStore for MemoryStore {
    type Error = MemoryStoreError;

    fn survey(&self, survey_id: &str) -> Result<Option<SurveyDefinition>, Self::Error> {
        Ok(self.surveys.get(survey_id).cloned())
    }

    fn responses(&self, survey_id: &str) -> Result<Vec<Response>, Self::Error> {
        Ok(self.responses.get(survey_id).cloned().unwrap_or_default())
    }

    fn insert_response(&mut self, survey_id: &str, response: Response) -> Result<(), Self::Error> {
        if !self.surveys.contains_key(survey_id) {
            return Err(MemoryStoreError::UnknownSurvey(survey_id.to_string()));
        }
        self.responses
            .entry(survey_id.to_string())
            .or_default()
            .push(response);
        Ok(())
    }

    fn remove_survey(&mut self, survey_id: &str) -> Result<bool, Self::Error> {
        self.responses.remove(survey_id);
        Ok(self.surveys.remove(survey_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    fn store() -> MemoryStore {
        MemoryStore::new().with_survey(
            "s1",
            SurveyDefinition::new(vec![Question::free_text("q1", "Why?")]),
        )
    }

    #[test]
    fn insert_survey_sets_its_id() {
        let store = store();
        let survey = store.survey("s1").unwrap().unwrap();
        assert_eq!(survey.id.as_deref(), Some("s1"));
        assert_eq!(store.survey_count(), 1);
    }

    #[test]
    fn insert_response_requires_the_survey() {
        let mut store = store();
        store
            .insert_response("s1", Response::new().with_answer("q1", "ok"))
            .unwrap();
        assert_eq!(store.response_count("s1"), 1);

        let err = store.insert_response("nope", Response::new()).unwrap_err();
        assert!(matches!(err, MemoryStoreError::UnknownSurvey(id) if id == "nope"));
    }

    #[test]
    fn remove_survey_drops_its_responses() {
        let mut store = store()
            .with_response("s1", Response::new())
            .with_response("s1", Response::new());

        assert!(store.remove_survey("s1").unwrap());
        assert_eq!(store.response_count("s1"), 0);
        assert!(store.survey("s1").unwrap().is_none());
        assert!(!store.remove_survey("s1").unwrap());
    }
}
