use crate::{Response, SurveyDefinition};

/// Trait for whatever persists surveys and their responses.
///
/// The tally operations only ever read a survey and its responses as two
/// independent fetches, append a response, or delete a survey together with
/// all of its responses. How that happens (documents, rows, files) is up to
/// the implementation.
pub trait ResponseStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Fetch a survey definition.
    ///
    /// # Returns
    /// * `Ok(Some(survey))` if the survey exists
    /// * `Ok(None)` if it does not
    fn survey(&self, survey_id: &str) -> Result<Option<SurveyDefinition>, Self::Error>;

    /// Fetch every response recorded for a survey, in submission order.
    fn responses(&self, survey_id: &str) -> Result<Vec<Response>, Self::Error>;

    /// Append a response to a survey.
    fn insert_response(&mut self, survey_id: &str, response: Response) -> Result<(), Self::Error>;

    /// Delete a survey and every response recorded for it.
    ///
    /// Returns `false` if there was no such survey.
    fn remove_survey(&mut self, survey_id: &str) -> Result<bool, Self::Error>;
}
