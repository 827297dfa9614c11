use crate::step::StepName;
use thiserror::Error;

/// Errors that can occur while building or running a pipeline.
///
/// # Non-Exhaustive
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code. When matching
/// on this error, always include a wildcard pattern:
///
/// ```
/// use mailsift::PipelineError;
///
/// fn handle_error(error: PipelineError) {
///     match error {
///         PipelineError::InvalidInput(details) => {
///             eprintln!("Bad input record: {}", details);
///         }
///         PipelineError::StepError { step_name, details } => {
///             eprintln!("Step {} failed: {}", step_name, details);
///         }
///         PipelineError::Timeout { step_name } => {
///             eprintln!("Step {} timed out", step_name);
///         }
///         PipelineError::Configuration(msg) => {
///             eprintln!("Configuration error: {}", msg);
///         }
///         _ => eprintln!("Unknown error: {}", error),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// The initial record is not fit to enter the pipeline.
    ///
    /// For the email pipeline this means `email_content` was never set
    /// by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A step failed during execution.
    ///
    /// Returned when a step's `execute` method reports an error; the
    /// run aborts and the error is surfaced to the caller.
    #[error("Step failed: {step_name}, details: {details}")]
    StepError {
        /// The name of the step that failed
        step_name: StepName,
        /// Details about the failure
        details: String,
    },

    /// A step exceeded the pipeline's step timeout.
    ///
    /// Only reachable when a timeout was armed via
    /// [`PipelineBuilder::step_timeout`](crate::PipelineBuilder::step_timeout).
    #[error("Timeout occurred in step: {step_name}")]
    Timeout {
        /// The name of the step that timed out
        step_name: StepName,
    },

    /// The pipeline configuration is invalid.
    ///
    /// Returned by the builder when the step list is empty.
    #[error("Invalid pipeline configuration: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PipelineError::StepError {
            step_name: StepName::new("test_step"),
            details: "test error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Step failed: test_step, details: test error"
        );

        let timeout_error = PipelineError::Timeout {
            step_name: StepName::new("test_step"),
        };
        assert_eq!(
            timeout_error.to_string(),
            "Timeout occurred in step: test_step"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let error = PipelineError::InvalidInput("email_content is not set".to_string());
        assert_eq!(error.to_string(), "Invalid input: email_content is not set");
    }

    #[test]
    fn test_configuration_display() {
        let error = PipelineError::Configuration("no steps".to_string());
        assert_eq!(error.to_string(), "Invalid pipeline configuration: no steps");
    }
}
