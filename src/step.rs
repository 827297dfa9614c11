use crate::error::PipelineError;
use crate::record::Record;
use async_trait::async_trait;
use std::fmt;

/// Type-safe step name wrapper.
///
/// Provides compile-time safety for step identifiers, preventing
/// typos and mismatched step names at the API level.
///
/// # Examples
///
/// ```
/// use mailsift::StepName;
///
/// let name = StepName::new("CheckSpam");
/// assert_eq!(name.as_str(), "CheckSpam");
///
/// // From trait for ergonomic conversion
/// let name: StepName = "ClassifyEmail".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepName(String);

impl StepName {
    /// Creates a new StepName
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a StepName from a type's name (extracts last segment)
    pub fn from_type_name<T: ?Sized>() -> Self {
        let full_name = std::any::type_name::<T>();
        let short_name = full_name.split("::").last().unwrap_or("UnknownStep");
        Self::new(short_name)
    }

    /// Returns the step name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StepName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StepName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A pipeline step.
///
/// Implement this trait to define a stage of a [`Pipeline`](crate::Pipeline).
/// A step reads the current record immutably and returns a partial
/// update containing only the fields it owns; the executor merges the
/// update into the record before invoking the next step. Steps hold no
/// state of their own and are invoked in declaration order — they never
/// decide what runs next.
///
/// # Type Parameter
///
/// * `R` - The record type threaded through the pipeline
///
/// # Examples
///
/// ```
/// use mailsift::prelude::*;
/// use async_trait::async_trait;
///
/// define_step!(CountWordsStep);
///
/// #[derive(Debug, Default)]
/// struct Doc {
///     text: String,
///     words: Option<usize>,
/// }
///
/// impl Record for Doc {
///     type Update = usize;
///
///     fn apply(&mut self, update: usize) {
///         self.words = Some(update);
///     }
/// }
///
/// #[async_trait]
/// impl Step<Doc> for CountWordsStep {
///     async fn execute(&self, record: &Doc) -> Result<usize, PipelineError> {
///         Ok(record.text.split_whitespace().count())
///     }
/// }
/// # fn main() {}
/// ```
#[async_trait]
pub trait Step<R: Record>: Send + Sync {
    /// Executes the step logic.
    ///
    /// # Arguments
    ///
    /// * `record` - The current record, read-only
    ///
    /// # Returns
    ///
    /// - `Ok(update)` - Partial update to merge into the record
    /// - `Err(error)` - Step failed; the run aborts with this error
    async fn execute(&self, record: &R) -> Result<R::Update, PipelineError>;

    /// Returns the step name.
    ///
    /// By default, uses the type name. Override to provide a custom name.
    fn name(&self) -> StepName {
        StepName::from_type_name::<Self>()
    }
}
