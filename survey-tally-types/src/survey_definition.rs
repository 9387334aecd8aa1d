use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Question, QuestionId, TallyError};

/// The survey whose responses are being tallied.
///
/// Only the question list matters to the aggregator; the remaining fields
/// are what a creator edits and what decides whether responses are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDefinition {
    /// Identifier of the survey, if it has been stored.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title shown on the dashboard.
    #[serde(default)]
    pub title: String,

    /// Optional description shown to respondents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Questions in declaration order.
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Whether the survey currently accepts responses.
    #[serde(default)]
    pub is_published: bool,
}

impl SurveyDefinition {
    /// Create a new, unpublished survey with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: None,
            questions,
            is_published: false,
        }
    }

    /// Create an empty survey definition.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the survey id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the survey as published.
    pub fn published(mut self) -> Self {
        self.is_published = true;
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if respondents may currently submit.
    pub fn accepts_responses(&self) -> bool {
        self.is_published
    }

    /// Check that every question id is unique.
    pub fn validate(&self) -> Result<(), TallyError> {
        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.id()) {
                return Err(TallyError::DuplicateQuestionId(question.id().clone()));
            }
        }
        Ok(())
    }
}

impl Default for SurveyDefinition {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_survey() -> SurveyDefinition {
        SurveyDefinition::new(vec![
            Question::radio("q1", "Color?", ["Red", "Blue"]),
            Question::free_text("q2", "Why?"),
        ])
        .with_id("s1")
        .with_title("Colors")
    }

    #[test]
    fn lookup() {
        let survey = color_survey();
        assert_eq!(survey.len(), 2);
        assert_eq!(survey.question(&"q2".into()).unwrap().text(), "Why?");
        assert!(survey.question(&"q3".into()).is_none());
    }

    #[test]
    fn publishing() {
        assert!(!color_survey().accepts_responses());
        assert!(color_survey().published().accepts_responses());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        assert!(color_survey().validate().is_ok());

        let mut survey = color_survey();
        survey.questions.push(Question::free_text("q1", "Again?"));
        let err = survey.validate().unwrap_err();
        assert!(matches!(err, TallyError::DuplicateQuestionId(id) if id.as_str() == "q1"));
    }

    #[test]
    fn decodes_stored_document() {
        let survey: SurveyDefinition = serde_json::from_str(
            r#"{
                "_id": "s1",
                "title": "Colors",
                "isPublished": true,
                "responseCount": 4,
                "questions": [
                    {"_id": "q1", "questionText": "Color?", "questionType": "RADIO",
                     "options": [{"optionText": "Red"}, {"optionText": "Blue"}]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(survey.id.as_deref(), Some("s1"));
        assert!(survey.accepts_responses());
        assert_eq!(survey.questions()[0].options().len(), 2);
    }
}
