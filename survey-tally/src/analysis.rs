//! Operations that go through a [`ResponseStore`]: analysing a stored
//! survey, showing it to respondents, accepting a new submission, and
//! deleting a survey with all of its responses.

use crate::{Breakdown, Response, ResponseStore, SurveyDefinition, TallyError, aggregate};

fn stored_survey<S: ResponseStore>(
    store: &S,
    survey_id: &str,
) -> Result<SurveyDefinition, TallyError> {
    store
        .survey(survey_id)
        .map_err(TallyError::store)?
        .ok_or_else(|| TallyError::UnknownSurvey(survey_id.to_string()))
}

/// Aggregate every stored response to a survey.
///
/// The survey and its responses are fetched as two independent reads. A
/// response submitted concurrently may or may not be included.
pub fn analyze<S: ResponseStore>(store: &S, survey_id: &str) -> Result<Breakdown, TallyError> {
    let survey = stored_survey(store, survey_id)?;
    let responses = store.responses(survey_id).map_err(TallyError::store)?;

    let breakdown = aggregate(
        &survey,
        responses.iter().filter(|r| r.belongs_to(survey_id)),
    );
    tracing::info!(
        "Analysed survey '{}': {} responses",
        survey_id,
        breakdown.total_responses()
    );
    Ok(breakdown)
}

/// Get a survey as respondents see it.
///
/// Only published surveys are visible; an unpublished one yields
/// [`TallyError::NotPublished`].
pub fn public_survey<S: ResponseStore>(
    store: &S,
    survey_id: &str,
) -> Result<SurveyDefinition, TallyError> {
    let survey = stored_survey(store, survey_id)?;
    if !survey.accepts_responses() {
        return Err(TallyError::NotPublished(survey_id.to_string()));
    }
    Ok(survey)
}

/// Count the stored responses to a survey.
///
/// Computed from the store on each call, so it always agrees with the
/// `totalResponses` of [`analyze`].
pub fn count_responses<S: ResponseStore>(store: &S, survey_id: &str) -> Result<usize, TallyError> {
    stored_survey(store, survey_id)?;
    let responses = store.responses(survey_id).map_err(TallyError::store)?;
    Ok(responses.iter().filter(|r| r.belongs_to(survey_id)).count())
}

/// Record an anonymous response to a published survey.
///
/// Rejects the submission if the survey is unknown or unpublished, if the
/// response names another survey, or if a required question is unanswered.
/// The stored response is linked to `survey_id`.
pub fn submit<S: ResponseStore>(
    store: &mut S,
    survey_id: &str,
    mut response: Response,
) -> Result<(), TallyError> {
    let survey = stored_survey(store, survey_id)?;

    if !survey.accepts_responses() {
        return Err(TallyError::NotPublished(survey_id.to_string()));
    }

    if let Some(actual) = &response.survey_id
        && actual != survey_id
    {
        return Err(TallyError::SurveyMismatch {
            expected: survey_id.to_string(),
            actual: actual.clone(),
        });
    }

    for question in survey.questions().iter().filter(|q| q.is_required()) {
        let answered = response
            .answer_for(question.id())
            .is_some_and(|a| !a.answer_value.is_blank());
        if !answered {
            return Err(TallyError::MissingRequired(question.id().clone()));
        }
    }

    response.survey_id = Some(survey_id.to_string());
    store
        .insert_response(survey_id, response)
        .map_err(TallyError::store)?;
    tracing::info!("Recorded response for survey '{}'", survey_id);
    Ok(())
}

/// Delete a survey and, with it, every response recorded for it.
///
/// Returns `false` if there was no such survey.
pub fn delete_survey<S: ResponseStore>(store: &mut S, survey_id: &str) -> Result<bool, TallyError> {
    let removed = store.remove_survey(survey_id).map_err(TallyError::store)?;
    if removed {
        tracing::info!("Deleted survey '{}' and its responses", survey_id);
    } else {
        tracing::debug!("No survey '{}' to delete", survey_id);
    }
    Ok(removed)
}
