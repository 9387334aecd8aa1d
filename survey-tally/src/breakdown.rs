use std::collections::HashMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{QuestionId, QuestionKind};

/// Aggregated view of every response to a survey.
///
/// Holds one entry per question, in the order the survey declares them,
/// including questions nobody answered. Computed on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    total_responses: usize,
    entries: Vec<(QuestionId, QuestionBreakdown)>,
    index: HashMap<QuestionId, usize>,
}

impl Breakdown {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for a question, keeping the position of
    /// the first insertion. Returns the entry's position.
    pub(crate) fn upsert(&mut self, id: QuestionId, entry: QuestionBreakdown) -> usize {
        if let Some(&pos) = self.index.get(&id) {
            self.entries[pos].1 = entry;
            return pos;
        }
        let pos = self.entries.len();
        self.index.insert(id.clone(), pos);
        self.entries.push((id, entry));
        pos
    }

    pub(crate) fn position(&self, id: &QuestionId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn entry_mut(&mut self, pos: usize) -> &mut QuestionBreakdown {
        &mut self.entries[pos].1
    }

    pub(crate) fn count_response(&mut self) {
        self.total_responses += 1;
    }

    /// Number of responses that were tallied.
    pub fn total_responses(&self) -> usize {
        self.total_responses
    }

    /// Get the entry for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&QuestionBreakdown> {
        self.position(id).map(|pos| &self.entries[pos].1)
    }

    /// Iterate over entries in question declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &QuestionBreakdown)> {
        self.entries.iter().map(|(id, entry)| (id, entry))
    }

    /// Get the number of questions in the breakdown.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the breakdown has no questions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Breakdown", 2)?;
        state.serialize_field("totalResponses", &self.total_responses)?;
        state.serialize_field("questionBreakdown", &Entries(&self.entries))?;
        state.end()
    }
}

/// Serializes entries as a map keyed by question id, in declaration order.
struct Entries<'a>(&'a [(QuestionId, QuestionBreakdown)]);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, entry)| (id, entry)))
    }
}

/// Aggregated answers for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBreakdown {
    /// The question's display text.
    pub question_text: String,

    /// The question's type, taken from the survey definition.
    pub question_type: QuestionKind,

    /// One tally per declared option, in declaration order.
    pub options: Vec<OptionTally>,

    /// Free-text values in the order responses were processed.
    pub free_text_responses: Vec<String>,

    /// Number of responses that answered this choice question.
    ///
    /// Counted once per response, however many checkbox values it held.
    /// Free-text questions leave this at zero; their count is the length of
    /// `free_text_responses`.
    pub total_count: usize,
}

impl QuestionBreakdown {
    /// Find the tally for an option by its text.
    pub fn option(&self, text: &str) -> Option<&OptionTally> {
        self.options.iter().find(|o| o.text == text)
    }

    /// Sum of all option counts.
    pub fn tallied(&self) -> usize {
        self.options.iter().map(|o| o.count).sum()
    }

    /// Each option's share of `tallied()`, in percent.
    ///
    /// All shares are `0.0` when nothing has been tallied.
    pub fn option_shares(&self) -> Vec<(&str, f64)> {
        let tallied = self.tallied();
        self.options
            .iter()
            .map(|o| {
                let share = if tallied == 0 {
                    0.0
                } else {
                    o.count as f64 * 100.0 / tallied as f64
                };
                (o.text.as_str(), share)
            })
            .collect()
    }
}

/// How many times one option was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTally {
    /// The option's display text.
    pub text: String,

    /// Number of times it was chosen.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(counts: &[(&str, usize)]) -> QuestionBreakdown {
        QuestionBreakdown {
            question_text: "Color?".into(),
            question_type: QuestionKind::Radio,
            options: counts
                .iter()
                .map(|(text, count)| OptionTally {
                    text: text.to_string(),
                    count: *count,
                })
                .collect(),
            free_text_responses: Vec::new(),
            total_count: counts.iter().map(|(_, c)| c).sum(),
        }
    }

    #[test]
    fn upsert_keeps_first_position() {
        let mut breakdown = Breakdown::new();
        breakdown.upsert("a".into(), entry(&[("Red", 1)]));
        breakdown.upsert("b".into(), entry(&[]));
        let pos = breakdown.upsert("a".into(), entry(&[("Blue", 2)]));

        assert_eq!(pos, 0);
        assert_eq!(breakdown.len(), 2);
        let ids: Vec<_> = breakdown.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(breakdown.get(&"a".into()).unwrap().option("Blue").is_some());
    }

    #[test]
    fn shares() {
        let entry = entry(&[("Red", 3), ("Blue", 1), ("Green", 0)]);
        assert_eq!(entry.tallied(), 4);
        assert_eq!(
            entry.option_shares(),
            vec![("Red", 75.0), ("Blue", 25.0), ("Green", 0.0)]
        );
    }

    #[test]
    fn shares_without_tallies() {
        let entry = entry(&[("Red", 0), ("Blue", 0)]);
        assert_eq!(entry.option_shares(), vec![("Red", 0.0), ("Blue", 0.0)]);
    }

    #[test]
    fn serializes_in_declaration_order() {
        let mut breakdown = Breakdown::new();
        breakdown.upsert("zeta".into(), entry(&[("Red", 1)]));
        breakdown.upsert("alpha".into(), entry(&[]));
        breakdown.count_response();

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.starts_with(r#"{"totalResponses":1,"questionBreakdown":{"zeta":"#));
        assert!(json.find("\"zeta\"").unwrap() < json.find("\"alpha\"").unwrap());
    }
}
