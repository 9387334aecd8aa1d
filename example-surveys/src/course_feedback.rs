use survey_tally_types::{Question, QuestionKind, QuestionOption, Response, SurveyDefinition};

/// End-of-course feedback with a Likert scale, a slider and a required
/// yes/no question.
pub struct CourseFeedback;

impl CourseFeedback {
    pub const ID: &'static str = "course-feedback";
    pub const PACE: &'static str = "pace";
    pub const DIFFICULTY: &'static str = "difficulty";
    pub const RECOMMEND: &'static str = "recommend";
    pub const IMPROVE: &'static str = "improve";

    pub fn survey() -> SurveyDefinition {
        SurveyDefinition::new(vec![
            Question::new(Self::PACE, "The pace was right", QuestionKind::Likert)
                .with_option(QuestionOption::with_value("Strongly disagree", "1"))
                .with_option(QuestionOption::with_value("Disagree", "2"))
                .with_option(QuestionOption::with_value("Neutral", "3"))
                .with_option(QuestionOption::with_value("Agree", "4"))
                .with_option(QuestionOption::with_value("Strongly agree", "5")),
            Question::new(Self::DIFFICULTY, "How hard was it (1-10)?", QuestionKind::Slider),
            Question::radio(Self::RECOMMEND, "Would you recommend it?", ["Yes", "No"]).required(),
            Question::free_text(Self::IMPROVE, "What should we improve?"),
        ])
        .with_id(Self::ID)
        .with_title("Rust for beginners - feedback")
        .published()
    }

    /// Three responses, all answering every question.
    pub fn responses() -> Vec<Response> {
        vec![
            Response::new()
                .with_answer(Self::PACE, "Agree")
                .with_answer(Self::DIFFICULTY, 6i64)
                .with_answer(Self::RECOMMEND, "Yes")
                .with_answer(Self::IMPROVE, "More exercises"),
            Response::new()
                .with_answer(Self::PACE, "Strongly disagree")
                .with_answer(Self::DIFFICULTY, 9i64)
                .with_answer(Self::RECOMMEND, "No")
                .with_answer(Self::IMPROVE, "Slower start"),
            Response::new()
                .with_answer(Self::PACE, "Neutral")
                .with_answer(Self::DIFFICULTY, 4i64)
                .with_answer(Self::RECOMMEND, "Yes")
                .with_answer(Self::IMPROVE, "Nothing"),
        ]
    }
}
