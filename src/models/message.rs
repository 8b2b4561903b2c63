use serde::{Deserialize, Serialize};

/// A generated contact-form message.
///
/// `to` stays empty by design - users paste the message into each
/// representative's web contact form rather than emailing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}
