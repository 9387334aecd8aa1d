//! Tallying responses into a [`Breakdown`].
//!
//! A single pass over every (response, answer) pair. Answers that cannot be
//! tallied (unknown question, checkbox answer that is not a list, a value of
//! no recognised shape on a free-text question) are skipped without failing
//! the aggregation: one respondent's malformed submission
//! must not take down analytics for everyone else.

use std::collections::HashMap;

use crate::{
    Answer, AnswerValue, Breakdown, OptionTally, QuestionBreakdown, QuestionKind, Response,
    SurveyDefinition, TallyError,
};

/// Aggregate responses to a survey into a per-question breakdown.
///
/// Every question and every declared option appears in the result, with
/// zero counts if nobody picked it. Responses are processed in iteration
/// order, which is also the order of each question's free-text values.
///
/// # Example
/// ```
/// use survey_tally::{Question, Response, SurveyDefinition, aggregate};
///
/// let survey = SurveyDefinition::new(vec![Question::radio("q1", "Color?", ["Red", "Blue"])]);
/// let responses = vec![
///     Response::new().with_answer("q1", "Red"),
///     Response::new().with_answer("q1", "Green"),
/// ];
///
/// let breakdown = aggregate(&survey, &responses);
/// let color = breakdown.get(&"q1".into()).unwrap();
/// assert_eq!(breakdown.total_responses(), 2);
/// assert_eq!(color.option("Red").unwrap().count, 1);
/// assert_eq!(color.total_count, 2);
/// ```
pub fn aggregate<'a>(
    survey: &SurveyDefinition,
    responses: impl IntoIterator<Item = &'a Response>,
) -> Breakdown {
    let mut tally = Tally::seed(survey);
    for response in responses {
        tally.record(response);
    }
    tracing::debug!(
        "Aggregated {} responses over {} questions",
        tally.breakdown.total_responses(),
        tally.breakdown.len()
    );
    tally.breakdown
}

/// Like [`aggregate`], for callers whose survey may be absent.
///
/// A missing survey is the only input that makes aggregation fail.
pub fn try_aggregate<'a>(
    survey: Option<&SurveyDefinition>,
    responses: impl IntoIterator<Item = &'a Response>,
) -> Result<Breakdown, TallyError> {
    let survey = survey.ok_or(TallyError::MissingSurvey)?;
    Ok(aggregate(survey, responses))
}

/// Breakdown under construction, plus an option-text lookup per entry.
struct Tally {
    breakdown: Breakdown,
    slots: Vec<HashMap<String, usize>>,
}

impl Tally {
    fn seed(survey: &SurveyDefinition) -> Self {
        let mut breakdown = Breakdown::new();
        let mut slots = Vec::with_capacity(survey.len());

        for question in survey.questions() {
            let entry = QuestionBreakdown {
                question_text: question.text().to_string(),
                question_type: question.kind().clone(),
                options: question
                    .options()
                    .iter()
                    .map(|o| OptionTally {
                        text: o.option_text.clone(),
                        count: 0,
                    })
                    .collect(),
                free_text_responses: Vec::new(),
                total_count: 0,
            };

            // Options sharing a text: the first one declared gets the tally.
            let mut lookup = HashMap::with_capacity(entry.options.len());
            for (slot, option) in entry.options.iter().enumerate() {
                lookup.entry(option.text.clone()).or_insert(slot);
            }

            // A repeated id replaces the earlier question in place.
            let pos = breakdown.upsert(question.id().clone(), entry);
            if pos == slots.len() {
                slots.push(lookup);
            } else {
                tracing::debug!("Question id '{}' declared more than once", question.id());
                slots[pos] = lookup;
            }
        }

        Self { breakdown, slots }
    }

    fn record(&mut self, response: &Response) {
        self.breakdown.count_response();
        for answer in &response.answers {
            self.record_answer(answer);
        }
    }

    fn record_answer(&mut self, answer: &Answer) {
        let Some(pos) = self.breakdown.position(&answer.question_id) else {
            tracing::debug!(
                "Skipping answer for unknown question '{}'",
                answer.question_id
            );
            return;
        };
        let lookup = &self.slots[pos];
        let entry = self.breakdown.entry_mut(pos);

        match entry.question_type {
            QuestionKind::Radio => {
                if let Some(&slot) = answer.answer_value.as_str().and_then(|v| lookup.get(v)) {
                    entry.options[slot].count += 1;
                }
                // Counted even when the value matched no option.
                entry.total_count += 1;
            }
            QuestionKind::Checkbox => {
                let Some(values) = answer.answer_value.as_list() else {
                    tracing::debug!(
                        "Skipping {} answer for checkbox question '{}'",
                        answer.answer_value.type_name(),
                        answer.question_id
                    );
                    return;
                };
                for value in values {
                    if let Some(&slot) = lookup.get(value) {
                        entry.options[slot].count += 1;
                    }
                }
                entry.total_count += 1;
            }
            QuestionKind::Text
            | QuestionKind::Slider
            | QuestionKind::Likert
            | QuestionKind::Unknown(_) => match free_text(&answer.answer_value) {
                Some(text) => entry.free_text_responses.push(text),
                None => tracing::debug!(
                    "Skipping {} answer for question '{}'",
                    answer.answer_value.type_name(),
                    answer.question_id
                ),
            },
        }
    }
}

fn free_text(value: &AnswerValue) -> Option<String> {
    match value {
        AnswerValue::Scalar(s) => Some(s.clone()),
        AnswerValue::Multi(values) => Some(values.join(", ")),
        AnswerValue::Other(_) => None,
    }
}
