use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier that answers use to refer to this question.
    #[serde(alias = "_id")]
    id: QuestionId,

    /// The label shown to respondents.
    #[serde(alias = "questionText")]
    text: String,

    /// The kind of question (determines how answers are tallied).
    #[serde(rename = "type", alias = "questionType")]
    kind: QuestionKind,

    /// Declared options, in display order. Empty for free-text questions.
    #[serde(default)]
    options: Vec<QuestionOption>,

    /// Whether a submission must answer this question.
    #[serde(default)]
    is_required: bool,
}

impl Question {
    /// Create a new question without options.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            options: Vec::new(),
            is_required: false,
        }
    }

    /// Create a single-choice question with the given option texts.
    pub fn radio<S: Into<String>>(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(id, text, QuestionKind::Radio).with_options(options)
    }

    /// Create a multi-select question with the given option texts.
    pub fn checkbox<S: Into<String>>(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(id, text, QuestionKind::Checkbox).with_options(options)
    }

    /// Create a free-text question.
    pub fn free_text(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self::new(id, text, QuestionKind::Text)
    }

    /// Append options whose stored value equals their text.
    pub fn with_options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options.extend(options.into_iter().map(QuestionOption::new));
        self
    }

    /// Append a single option.
    pub fn with_option(mut self, option: QuestionOption) -> Self {
        self.options.push(option);
        self
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the declared options.
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    /// Check if a submission must answer this question.
    pub fn is_required(&self) -> bool {
        self.is_required
    }
}

/// The kind of question, as named on the wire.
///
/// Unrecognised type names decode to `Unknown` rather than failing, so a
/// survey written by a newer client still loads. The name is kept and
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Open-ended text input.
    Text,

    /// Pick exactly one option.
    Radio,

    /// Pick any number of options.
    Checkbox,

    /// Agreement scale; carries a label value.
    Likert,

    /// Numeric range; carries a scalar position.
    Slider,

    /// A type this version does not know about, with its wire name.
    Unknown(String),
}

impl QuestionKind {
    /// Check if answers are tallied against the declared options (RADIO, CHECKBOX).
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }

    /// Check if answers are collected verbatim.
    pub fn is_free_text(&self) -> bool {
        !self.is_choice()
    }

    /// The wire name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "TEXT",
            Self::Radio => "RADIO",
            Self::Checkbox => "CHECKBOX",
            Self::Likert => "LIKERT",
            Self::Slider => "SLIDER",
            Self::Unknown(name) => name,
        }
    }
}

impl From<&str> for QuestionKind {
    fn from(name: &str) -> Self {
        match name {
            "TEXT" => Self::Text,
            "RADIO" => Self::Radio,
            "CHECKBOX" => Self::Checkbox,
            "LIKERT" => Self::Likert,
            "SLIDER" => Self::Slider,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl Serialize for QuestionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// One declared option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    /// Text shown to respondents; answers match against this.
    pub option_text: String,

    /// Stored value for analysis, if different from the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl QuestionOption {
    /// Create an option without a separate stored value.
    pub fn new(option_text: impl Into<String>) -> Self {
        Self {
            option_text: option_text.into(),
            value: None,
        }
    }

    /// Create an option with a separate stored value.
    pub fn with_value(option_text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            option_text: option_text.into(),
            value: Some(value.into()),
        }
    }
}
