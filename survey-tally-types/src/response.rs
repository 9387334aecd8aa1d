use serde::{Deserialize, Serialize};

use crate::{AnswerValue, QuestionId};

/// One answer inside a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The question this answer is for.
    pub question_id: QuestionId,

    /// What the respondent gave.
    pub answer_value: AnswerValue,
}

impl Answer {
    /// Create a new answer.
    pub fn new(question_id: impl Into<QuestionId>, answer_value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            answer_value: answer_value.into(),
        }
    }
}

/// An anonymous submission to a survey.
///
/// Carries no information about who submitted it: no user, session or
/// address is ever attached. Immutable once stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The survey this response was submitted to.
    #[serde(default, alias = "survey", skip_serializing_if = "Option::is_none")]
    pub survey_id: Option<String>,

    /// Answers in submission order. Not every question needs an answer.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Response {
    /// Create a new response with no answers and no survey link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Link this response to a survey.
    pub fn for_survey(mut self, survey_id: impl Into<String>) -> Self {
        self.survey_id = Some(survey_id.into());
        self
    }

    /// Append an answer.
    pub fn with_answer(
        mut self,
        question_id: impl Into<QuestionId>,
        answer_value: impl Into<AnswerValue>,
    ) -> Self {
        self.answers.push(Answer::new(question_id, answer_value));
        self
    }

    /// Get the first answer given for a question.
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.question_id == question_id)
    }

    /// Check if this response belongs to the given survey.
    ///
    /// A response without a survey link belongs to whichever survey it is
    /// handed to.
    pub fn belongs_to(&self, survey_id: &str) -> bool {
        self.survey_id.as_deref().is_none_or(|id| id == survey_id)
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
