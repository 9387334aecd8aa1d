use survey_tally_types::{Question, Response, SurveyDefinition};

/// A pizza order poll: one single-choice, one multi-select and one
/// open-ended question.
///
/// The response set includes the kinds of records real submissions
/// produce: an unrecognised size, a checkbox answer sent as a single
/// string, an empty comment and an answer to a question that no longer
/// exists.
pub struct PizzaPoll;

impl PizzaPoll {
    pub const ID: &'static str = "pizza-poll";
    pub const SIZE: &'static str = "size";
    pub const TOPPINGS: &'static str = "toppings";
    pub const COMMENTS: &'static str = "comments";

    pub fn survey() -> SurveyDefinition {
        SurveyDefinition::new(vec![
            Question::radio(Self::SIZE, "Which size?", ["Small", "Medium", "Large"]).required(),
            Question::checkbox(
                Self::TOPPINGS,
                "Pick your toppings",
                ["Cheese", "Olives", "Mushrooms", "Ham"],
            ),
            Question::free_text(Self::COMMENTS, "Anything else?"),
        ])
        .with_id(Self::ID)
        .with_title("Friday pizza")
        .with_description("Help us order the right pizzas.")
        .published()
    }

    /// Five responses.
    ///
    /// Expected tallies: sizes Small 1, Medium 1, Large 2 with a total of 5;
    /// toppings Cheese 4, Olives 1, Mushrooms 1, Ham 0 with a total of 4;
    /// comments `["More olives", ""]`.
    pub fn responses() -> Vec<Response> {
        vec![
            Response::new()
                .for_survey(Self::ID)
                .with_answer(Self::SIZE, "Large")
                .with_answer(Self::TOPPINGS, vec!["Cheese", "Olives"])
                .with_answer(Self::COMMENTS, "More olives"),
            Response::new()
                .for_survey(Self::ID)
                .with_answer(Self::SIZE, "Medium")
                .with_answer(Self::TOPPINGS, vec!["Cheese"]),
            Response::new()
                .for_survey(Self::ID)
                .with_answer(Self::TOPPINGS, vec!["Cheese", "Mushrooms", "Cheese"])
                .with_answer(Self::SIZE, "Large")
                .with_answer(Self::COMMENTS, ""),
            Response::new()
                .for_survey(Self::ID)
                .with_answer(Self::SIZE, "Extra large")
                .with_answer(Self::TOPPINGS, "Ham"),
            Response::new()
                .for_survey(Self::ID)
                .with_answer("crust", "Thin")
                .with_answer(Self::SIZE, "Small")
                .with_answer(Self::TOPPINGS, Vec::<String>::new()),
        ]
    }
}
