use serde::{Deserialize, Serialize};

/// A predefined civic issue from the bundled catalog.
///
/// `message_paragraph` is the ready-to-send body paragraph the message
/// generator inserts verbatim when the issue is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub message_paragraph: String,
}
