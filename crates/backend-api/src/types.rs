use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A single autocomplete option.
///
/// Options are either bare strings or structured entries carrying a
/// `description`; the untagged representation lets seed data and backend
/// payloads mix both shapes freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Suggestion {
    Plain(String),
    Entry { description: String },
}

impl Suggestion {
    /// The text shown to the user, also used to deduplicate options.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Suggestion::Plain(text) => text,
            Suggestion::Entry { description } => description,
        }
    }
}

impl From<&str> for Suggestion {
    fn from(text: &str) -> Self {
        Suggestion::Plain(text.to_string())
    }
}

impl From<String> for Suggestion {
    fn from(text: String) -> Self {
        Suggestion::Plain(text)
    }
}

/// One element of a search result.
///
/// Results are opaque to the controller: a named action plus free-form
/// parameters the embedding application interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub name: String,
    #[serde(default)]
    pub params: Value,
}

impl ResultItem {
    /// Create a new [`ResultItem`] with the provided `name` and `params`.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Build a display-only item whose parameters carry description lines.
    ///
    /// Used for synthetic notices such as the "no result found" message.
    #[must_use]
    pub fn view<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let description: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self::new("view", json!({ "description": description }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reads_both_variants() {
        assert_eq!(Suggestion::from("cats").label(), "cats");
        let entry = Suggestion::Entry {
            description: "dogs".to_string(),
        };
        assert_eq!(entry.label(), "dogs");
    }

    #[test]
    fn suggestions_deserialize_untagged() {
        let options: Vec<Suggestion> =
            serde_json::from_str(r#"["plain", {"description": "structured"}]"#).unwrap();
        assert_eq!(options[0], Suggestion::from("plain"));
        assert_eq!(options[1].label(), "structured");
    }

    #[test]
    fn view_item_carries_description_lines() {
        let item = ResultItem::view(["first", "second"]);
        assert_eq!(item.name, "view");
        assert_eq!(item.params["description"][0], "first");
        assert_eq!(item.params["description"][1], "second");
    }
}
