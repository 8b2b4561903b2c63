//! Message generation for representative contact forms.
//!
//! Produces respectful, issue-based messages that users paste into a
//! representative's web contact form. Generation is pure: the same
//! selection always yields the same subject and body.

use crate::models::{GeneratedMessage, Issue, Representative};

/// Salutation used for every message. Generic on purpose - the same
/// text works whether it lands in a Senate or a House contact form.
pub const MESSAGE_SALUTATION: &str = "Dear Senator or Representative,";

/// Opening paragraph.
pub const MESSAGE_OPENING: &str = "I am writing to you as a concerned constituent to share my priorities and ask for your attention on matters important to me and my community.";

/// Body paragraph used when no issues are selected.
pub const MESSAGE_GENERIC: &str = "I am reaching out to ensure my voice is heard on the issues that matter most to our community. I encourage you to prioritize the needs of your constituents in all legislative decisions.";

/// Closing paragraph with the signature placeholders users fill in.
pub const MESSAGE_CLOSING: &str = "Thank you for taking the time to consider my concerns. I trust that you will represent the interests of our community thoughtfully and responsibly. I look forward to hearing about your positions and actions on these important issues.\n\nRespectfully,\n[Your Name]\n[Your Address]\n[Your City, State ZIP]";

/// Subject line by selection count.
fn generate_subject(issues: &[Issue]) -> String {
    match issues {
        [] => "Message from a Concerned Constituent".to_string(),
        [only] => format!("Constituent Request: {}", only.title),
        [first, second] => format!(
            "Constituent Priorities: {} and {}",
            first.title, second.title
        ),
        [first, rest @ ..] => format!(
            "Constituent Priorities: {} and {} Other Issues",
            first.title,
            rest.len()
        ),
    }
}

/// Generates a complete message from the selected issues.
///
/// Representatives are accepted so the content can later be tailored
/// per recipient; today the text does not vary by representative.
pub fn generate_message(
    selected_issues: &[Issue],
    _representatives: &[Representative],
) -> GeneratedMessage {
    let subject = generate_subject(selected_issues);

    let mut paragraphs = vec![MESSAGE_SALUTATION.to_string(), MESSAGE_OPENING.to_string()];

    if selected_issues.is_empty() {
        paragraphs.push(MESSAGE_GENERIC.to_string());
    } else {
        // One paragraph per issue, verbatim, in selection order.
        paragraphs.extend(
            selected_issues
                .iter()
                .map(|issue| issue.message_paragraph.clone()),
        );
    }

    paragraphs.push(MESSAGE_CLOSING.to_string());

    GeneratedMessage {
        // Users submit through web contact forms, never by email.
        to: String::new(),
        subject,
        body: paragraphs.join("\n\n"),
    }
}

/// Formats a message as a plain-text block for the clipboard.
/// The `To:` line appears only when the field is non-empty.
pub fn format_message_for_clipboard(message: &GeneratedMessage) -> String {
    let mut parts = Vec::new();

    if !message.to.is_empty() {
        parts.push(format!("To: {}", message.to));
    }

    parts.push(format!("Subject: {}", message.subject));
    parts.push(String::new());
    parts.push(message.body.clone());

    parts.join("\n")
}
