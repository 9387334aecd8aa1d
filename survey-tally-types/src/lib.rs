//! Core types for the survey-tally crate.
//!
//! This crate provides the foundational types for tallying surveys:
//! - `SurveyDefinition` - The survey being analysed
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Response`, `Answer` and `AnswerValue` - Anonymous submitted answers
//! - `ResponseStore` trait - The seam to whatever persists surveys and responses

mod question_id;
pub use question_id::QuestionId;

mod answer_value;
pub use answer_value::AnswerValue;

mod response;
pub use response::{Answer, Response};

mod question;
pub use question::{Question, QuestionKind, QuestionOption};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::TallyError;

mod traits;
pub use traits::ResponseStore;
