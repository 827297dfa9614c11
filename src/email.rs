use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to an email by the triage pipeline.
///
/// Serialized as the lowercase strings `"spam"`, `"support"` and
/// `"general"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Spam,
    Support,
    General,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Spam => write!(f, "spam"),
            Classification::Support => write!(f, "support"),
            Classification::General => write!(f, "general"),
        }
    }
}

/// The shared record threaded through the email triage pipeline.
///
/// Created by the caller with only `email_content` populated; each
/// step fills in exactly one of the remaining fields and never touches
/// the others. The record is returned to the caller after the last
/// step and is not persisted anywhere.
///
/// # Examples
///
/// ```
/// use mailsift::EmailState;
///
/// let record = EmailState::new("Please contact support about my order");
/// assert_eq!(
///     record.email_content.as_deref(),
///     Some("Please contact support about my order")
/// );
/// assert_eq!(record.is_spam, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailState {
    /// Raw email text, set by the caller. No step writes this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_content: Option<String>,
    /// Whether the content matched a spam trigger word. Written by
    /// `CheckSpamStep`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spam: Option<bool>,
    /// Triage category. Written by `ClassifyEmailStep`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Canned response text. Written by `GenerateResponseStep`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl EmailState {
    /// Creates a record with only the email content populated.
    pub fn new(email_content: impl Into<String>) -> Self {
        Self {
            email_content: Some(email_content.into()),
            ..Self::default()
        }
    }
}

/// Partial update produced by a single triage step.
///
/// Only the field a step owns is ever populated; merging skips the
/// rest, so a step cannot clobber another step's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spam: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl Record for EmailState {
    type Update = EmailUpdate;

    fn apply(&mut self, update: EmailUpdate) {
        if let Some(is_spam) = update.is_spam {
            self.is_spam = Some(is_spam);
        }
        if let Some(classification) = update.classification {
            self.classification = Some(classification);
        }
        if let Some(response) = update.response {
            self.response = Some(response);
        }
    }
}
