//! # survey-tally
//!
//! Tally anonymous survey responses into per-question breakdowns.
//! Storage-agnostic.
//!
//! This crate turns a survey definition and the responses submitted to it
//! into the breakdown a results dashboard renders: option counts for choice
//! questions and the collected values of open-ended ones.
//!
//! ## Usage
//!
//! ```rust
//! use survey_tally::{Question, Response, SurveyDefinition, aggregate};
//!
//! let survey = SurveyDefinition::new(vec![
//!     Question::checkbox("toppings", "Toppings?", ["Cheese", "Olives"]),
//!     Question::free_text("comments", "Anything else?"),
//! ]);
//!
//! let responses = vec![
//!     Response::new()
//!         .with_answer("toppings", vec!["Cheese", "Olives"])
//!         .with_answer("comments", "More olives please"),
//!     Response::new().with_answer("toppings", vec!["Cheese"]),
//! ];
//!
//! let breakdown = aggregate(&survey, &responses);
//! let toppings = breakdown.get(&"toppings".into()).unwrap();
//! assert_eq!(toppings.option("Cheese").unwrap().count, 2);
//! assert_eq!(toppings.total_count, 2);
//! ```
//!
//! ## Tallying rules
//!
//! - `RADIO`: the option whose text equals the answer is counted; the
//!   question's `total_count` goes up even when no option matched.
//! - `CHECKBOX`: every listed value that matches an option is counted;
//!   `total_count` goes up once per response. A non-list answer is ignored.
//! - `TEXT`, `SLIDER`, `LIKERT` and unrecognised types: the value is
//!   appended to `free_text_responses`.
//! - An answer value of no recognised shape (`null`, an object) matches no
//!   option and adds no free text; a `RADIO` question still counts it.
//! - Answers for questions the survey does not have are ignored.
//!
//! ## Stores
//!
//! [`analyze`], [`public_survey`], [`count_responses`], [`submit`] and
//! [`delete_survey`] work against any [`ResponseStore`]. [`MemoryStore`] keeps everything in memory.

// Re-export all types from survey-tally-types
pub use survey_tally_types::*;

mod aggregate;
pub use aggregate::{aggregate, try_aggregate};

mod breakdown;
pub use breakdown::{Breakdown, OptionTally, QuestionBreakdown};

mod analysis;
pub use analysis::{analyze, count_responses, delete_survey, public_survey, submit};

pub mod json;

// In-memory store for tests and single-process tools
mod memory_store;
pub use memory_store::{MemoryStore, MemoryStoreError};
