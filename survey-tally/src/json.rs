//! JSON boundary: decoding survey and response documents, and producing the
//! breakdown document a dashboard renders.

use serde_json::Value;

use crate::{Response, SurveyDefinition, TallyError, aggregate};

/// Decode a survey definition.
///
/// A `null` document means there is no survey and yields
/// [`TallyError::MissingSurvey`].
pub fn decode_survey(json: &str) -> Result<SurveyDefinition, TallyError> {
    let survey: Option<SurveyDefinition> = serde_json::from_str(json)?;
    survey.ok_or(TallyError::MissingSurvey)
}

/// Decode a list of response documents.
///
/// The document must be a JSON array. Elements that do not decode as a
/// response (not an object, answers not a list, an answer without a
/// question id) are logged and skipped rather than failing the whole batch.
/// An answer value of unexpected shape does not reject its response.
pub fn decode_responses(json: &str) -> Result<Vec<Response>, TallyError> {
    let documents: Vec<Value> = serde_json::from_str(json)?;
    Ok(responses_from_values(documents))
}

/// Decode already-parsed response documents, skipping malformed ones.
pub fn responses_from_values(documents: Vec<Value>) -> Vec<Response> {
    let total = documents.len();
    let responses: Vec<Response> = documents
        .into_iter()
        .enumerate()
        .filter_map(|(i, doc)| match serde_json::from_value(doc) {
            Ok(response) => Some(response),
            Err(err) => {
                tracing::warn!("Skipping malformed response #{}: {}", i, err);
                None
            }
        })
        .collect();
    if responses.len() < total {
        tracing::warn!(
            "Decoded {} of {} response documents",
            responses.len(),
            total
        );
    }
    responses
}

/// Aggregate a survey document and a response-list document into the
/// breakdown document.
pub fn aggregate_json(survey: &str, responses: &str) -> Result<Value, TallyError> {
    let survey = decode_survey(survey)?;
    let responses = decode_responses(responses)?;
    Ok(serde_json::to_value(aggregate(&survey, &responses))?)
}
