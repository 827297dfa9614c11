//! The fixed three-step email triage pipeline.
//!
//! Control flow is strictly linear: spam check, then classification,
//! then canned-response selection. Each step reads the record and
//! returns the single field it owns; later steps only read fields
//! written by earlier ones.

use crate::define_step;
use crate::email::{Classification, EmailState, EmailUpdate};
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use crate::step::Step;
use async_trait::async_trait;

/// Substrings that mark content as spam, matched case-insensitively.
const SPAM_TRIGGERS: [&str; 4] = ["free", "winner", "urgent", "click now"];

define_step!(CheckSpamStep);

/// Flags the email as spam when its content contains any trigger word.
///
/// Substring match, not whole-word: "freedom" trips the "free"
/// trigger.
#[async_trait]
impl Step<EmailState> for CheckSpamStep {
    async fn execute(&self, record: &EmailState) -> Result<EmailUpdate, PipelineError> {
        let content = email_content(record)?.to_lowercase();
        let is_spam = SPAM_TRIGGERS
            .iter()
            .any(|trigger| content.contains(trigger));

        Ok(EmailUpdate {
            is_spam: Some(is_spam),
            ..EmailUpdate::default()
        })
    }
}

define_step!(ClassifyEmailStep);

/// Buckets the email as spam, support, or general.
///
/// The spam flag takes precedence over the "support" keyword check.
#[async_trait]
impl Step<EmailState> for ClassifyEmailStep {
    async fn execute(&self, record: &EmailState) -> Result<EmailUpdate, PipelineError> {
        let is_spam = record.is_spam.ok_or_else(|| PipelineError::StepError {
            step_name: self.name(),
            details: "is_spam has not been set".to_string(),
        })?;

        let classification = if is_spam {
            Classification::Spam
        } else if email_content(record)?.to_lowercase().contains("support") {
            Classification::Support
        } else {
            Classification::General
        };

        Ok(EmailUpdate {
            classification: Some(classification),
            ..EmailUpdate::default()
        })
    }
}

define_step!(GenerateResponseStep);

/// Maps the classification to its canned response.
#[async_trait]
impl Step<EmailState> for GenerateResponseStep {
    async fn execute(&self, record: &EmailState) -> Result<EmailUpdate, PipelineError> {
        let classification = record
            .classification
            .ok_or_else(|| PipelineError::StepError {
                step_name: self.name(),
                details: "classification has not been set".to_string(),
            })?;

        let response = match classification {
            Classification::Spam => "Email moved to spam folder",
            Classification::Support => "Forwarded to support team",
            Classification::General => "Email filed in inbox",
        };

        Ok(EmailUpdate {
            response: Some(response.to_string()),
            ..EmailUpdate::default()
        })
    }
}

fn email_content(record: &EmailState) -> Result<&str, PipelineError> {
    record
        .email_content
        .as_deref()
        .ok_or_else(|| PipelineError::InvalidInput("email_content is not set".to_string()))
}

/// Builds the triage pipeline: spam check, classification, response.
///
/// The step list is fixed and ordered. Build the pipeline once and
/// reuse it; every run gets its own record and shares nothing with
/// other runs.
pub fn triage_pipeline() -> Pipeline<EmailState> {
    Pipeline::new(vec![
        Box::new(CheckSpamStep),
        Box::new(ClassifyEmailStep),
        Box::new(GenerateResponseStep),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_spam_matches_trigger_substrings() {
        let step = CheckSpamStep;

        let update = step
            .execute(&EmailState::new("you are the WINNER of a prize"))
            .await
            .unwrap();
        assert_eq!(update.is_spam, Some(true));

        // Substring, not whole-word.
        let update = step
            .execute(&EmailState::new("enjoy your freedom"))
            .await
            .unwrap();
        assert_eq!(update.is_spam, Some(true));

        let update = step
            .execute(&EmailState::new("minutes from the board meeting"))
            .await
            .unwrap();
        assert_eq!(update.is_spam, Some(false));
    }

    #[tokio::test]
    async fn test_check_spam_is_case_insensitive() {
        let step = CheckSpamStep;

        let update = step
            .execute(&EmailState::new("CLICK NOW to claim"))
            .await
            .unwrap();
        assert_eq!(update.is_spam, Some(true));
    }

    #[tokio::test]
    async fn test_check_spam_rejects_missing_content() {
        let step = CheckSpamStep;

        let result = step.execute(&EmailState::default()).await;
        match result {
            Err(PipelineError::InvalidInput(details)) => {
                assert_eq!(details, "email_content is not set");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_classify_spam_takes_precedence_over_support() {
        let step = ClassifyEmailStep;
        let mut record = EmailState::new("urgent support needed");
        record.is_spam = Some(true);

        let update = step.execute(&record).await.unwrap();
        assert_eq!(update.classification, Some(Classification::Spam));
    }

    #[tokio::test]
    async fn test_classify_support_keyword() {
        let step = ClassifyEmailStep;
        let mut record = EmailState::new("Please contact SUPPORT about my order");
        record.is_spam = Some(false);

        let update = step.execute(&record).await.unwrap();
        assert_eq!(update.classification, Some(Classification::Support));
    }

    #[tokio::test]
    async fn test_classify_falls_back_to_general() {
        let step = ClassifyEmailStep;
        let mut record = EmailState::new("Let's schedule a meeting tomorrow");
        record.is_spam = Some(false);

        let update = step.execute(&record).await.unwrap();
        assert_eq!(update.classification, Some(Classification::General));
    }

    #[tokio::test]
    async fn test_classify_requires_spam_flag() {
        let step = ClassifyEmailStep;

        let result = step.execute(&EmailState::new("hello")).await;
        match result {
            Err(PipelineError::StepError { step_name, details }) => {
                assert_eq!(step_name.as_str(), "ClassifyEmailStep");
                assert_eq!(details, "is_spam has not been set");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_response_mapping() {
        let step = GenerateResponseStep;

        for (classification, expected) in [
            (Classification::Spam, "Email moved to spam folder"),
            (Classification::Support, "Forwarded to support team"),
            (Classification::General, "Email filed in inbox"),
        ] {
            let mut record = EmailState::new("anything");
            record.is_spam = Some(false);
            record.classification = Some(classification);

            let update = step.execute(&record).await.unwrap();
            assert_eq!(update.response.as_deref(), Some(expected));
        }
    }

    #[tokio::test]
    async fn test_generate_response_requires_classification() {
        let step = GenerateResponseStep;

        let result = step.execute(&EmailState::new("hello")).await;
        match result {
            Err(PipelineError::StepError { step_name, details }) => {
                assert_eq!(step_name.as_str(), "GenerateResponseStep");
                assert_eq!(details, "classification has not been set");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
