use crate::QuestionId;

/// Error type for tally operations.
///
/// Per-answer anomalies (unknown question ids, wrongly shaped values) are
/// never errors; they are skipped during aggregation.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    /// No survey definition was supplied.
    #[error("No survey definition supplied")]
    MissingSurvey,

    /// The store has no survey with this id.
    #[error("Survey not found: {0}")]
    UnknownSurvey(String),

    /// The survey exists but is not accepting responses.
    #[error("Survey '{0}' is not currently accepting responses")]
    NotPublished(String),

    /// A response names a different survey than the one it was submitted to.
    #[error("Response belongs to survey '{actual}', not '{expected}'")]
    SurveyMismatch { expected: String, actual: String },

    /// A required question was left unanswered.
    #[error("Missing answer for required question: {0}")]
    MissingRequired(QuestionId),

    /// Two questions in one survey share an id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),

    /// A JSON document could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage failure (I/O, database, etc.)
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl TallyError {
    /// Create a store error from any error type.
    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        Self::Store(err.into())
    }

    /// Check if this error means there was no survey to work on.
    pub fn is_missing_survey(&self) -> bool {
        matches!(self, Self::MissingSurvey | Self::UnknownSurvey(_))
    }

    /// Check if this error was caused by the submitted data rather than the system.
    pub fn is_rejected_submission(&self) -> bool {
        matches!(
            self,
            Self::NotPublished(_) | Self::SurveyMismatch { .. } | Self::MissingRequired(_)
        )
    }
}
