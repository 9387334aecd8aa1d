use serde::{Deserialize, Deserializer, Serialize};

/// The value a respondent gave for one question.
///
/// Single-choice, text, Likert and slider questions carry a `Scalar`;
/// checkbox questions carry a `Multi` list of selected option texts.
/// Anything else a client sent (`null`, an object, a nested list) is kept
/// as `Other` so the rest of the response still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A single value (free text, chosen option text, slider position).
    Scalar(String),

    /// Several values (selected checkbox options).
    Multi(Vec<String>),

    /// A value of no recognised shape, exactly as it arrived.
    Other(serde_json::Value),
}

impl AnswerValue {
    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Multi(_) | Self::Other(_) => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Multi(values) => Some(values),
            Self::Scalar(_) | Self::Other(_) => None,
        }
    }

    /// Check if this is a multi-valued answer.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    /// Check if the respondent effectively gave nothing: an empty string,
    /// an empty selection, or a value of no recognised shape.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::Multi(values) => values.is_empty(),
            Self::Other(_) => true,
        }
    }

    /// Get the type name of this value for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Multi(_) => "Multi",
            Self::Other(_) => "Other",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Scalar(i.to_string())
    }
}

/// What respondents actually send: strings, but also bare numbers
/// (sliders) and booleans, alone or in a list. `Other` must stay last.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswerValue {
    Scalar(RawScalar),
    Multi(Vec<RawScalar>),
    Other(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
}

impl From<RawScalar> for String {
    fn from(raw: RawScalar) -> Self {
        match raw {
            RawScalar::Text(s) => s,
            RawScalar::Flag(b) => b.to_string(),
            RawScalar::Number(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAnswerValue::deserialize(deserializer)? {
            RawAnswerValue::Scalar(raw) => Self::Scalar(raw.into()),
            RawAnswerValue::Multi(raw) => Self::Multi(raw.into_iter().map(String::from).collect()),
            RawAnswerValue::Other(value) => Self::Other(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let scalar = AnswerValue::from("Red");
        assert_eq!(scalar.as_str(), Some("Red"));
        assert!(scalar.as_list().is_none());
        assert!(!scalar.is_multi());

        let multi = AnswerValue::from(vec!["Cheese", "Olives"]);
        assert_eq!(multi.as_list().unwrap(), ["Cheese", "Olives"]);
        assert!(multi.as_str().is_none());
        assert_eq!(multi.type_name(), "Multi");
    }

    #[test]
    fn blank_values() {
        assert!(AnswerValue::from("").is_blank());
        assert!(AnswerValue::Multi(Vec::new()).is_blank());
        assert!(!AnswerValue::from(" ").is_blank());
        assert!(!AnswerValue::from(vec![""]).is_blank());
        assert!(AnswerValue::Other(serde_json::Value::Null).is_blank());
    }

    #[test]
    fn decodes_strings_and_lists() {
        let scalar: AnswerValue = serde_json::from_str("\"Great!\"").unwrap();
        assert_eq!(scalar, AnswerValue::Scalar("Great!".into()));

        let multi: AnswerValue = serde_json::from_str(r#"["Cheese", "Olives"]"#).unwrap();
        assert_eq!(multi, AnswerValue::from(vec!["Cheese", "Olives"]));
    }

    #[test]
    fn decodes_numbers_and_booleans_as_text() {
        let slider: AnswerValue = serde_json::from_str("7").unwrap();
        assert_eq!(slider, AnswerValue::Scalar("7".into()));

        let fraction: AnswerValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(fraction, AnswerValue::Scalar("2.5".into()));

        let mixed: AnswerValue = serde_json::from_str("[1, true, \"x\"]").unwrap();
        assert_eq!(mixed, AnswerValue::from(vec!["1", "true", "x"]));
    }

    #[test]
    fn keeps_unrecognised_shapes_as_other() {
        for raw in ["null", r#"{"a": 1}"#, r#"[["nested"]]"#, r#"[1, null]"#] {
            let value: AnswerValue = serde_json::from_str(raw).unwrap();
            let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
            assert_eq!(value, AnswerValue::Other(expected), "decoding {raw}");
            assert!(value.as_str().is_none());
            assert!(value.as_list().is_none());
        }
    }

    #[test]
    fn other_encodes_as_received() {
        let value: AnswerValue = serde_json::from_str(r#"{"a":1}"#).unwrap();
        assert_eq!(value.type_name(), "Other");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn encodes_untagged() {
        let multi = AnswerValue::from(vec!["a", "b"]);
        assert_eq!(serde_json::to_string(&multi).unwrap(), r#"["a","b"]"#);
        assert_eq!(
            serde_json::to_string(&AnswerValue::from("a")).unwrap(),
            "\"a\""
        );
    }
}
