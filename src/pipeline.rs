use crate::{PipelineError, Record, Step};
use std::fmt;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// A fixed, ordered sequence of steps over a shared record.
///
/// The step list is built once and walked front to back on every run;
/// there is no routing, branching, or retry machinery. Each step's
/// partial update is merged into the record before the next step is
/// invoked, and the fully merged record is returned after the last
/// step.
pub struct Pipeline<R: Record> {
    steps: Vec<Box<dyn Step<R>>>,
    step_timeout: Option<Duration>,
}

impl<R: Record> fmt::Debug for Pipeline<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field(
                "steps",
                &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("step_timeout", &self.step_timeout)
            .finish()
    }
}

impl<R: Record> Pipeline<R> {
    /// Creates a pipeline from an ordered list of steps.
    ///
    /// Steps run in the order given. No step timeout is armed.
    pub fn new(steps: Vec<Box<dyn Step<R>>>) -> Self {
        Self {
            steps,
            step_timeout: None,
        }
    }

    pub fn builder() -> PipelineBuilder<R> {
        PipelineBuilder::new()
    }

    /// Runs the pipeline over one record.
    ///
    /// Each step is invoked with the current record and awaited to
    /// completion; its update is merged before the next step starts.
    /// The first step error aborts the run and is returned to the
    /// caller.
    pub async fn run(&self, mut record: R) -> Result<R, PipelineError> {
        for step in &self.steps {
            let outcome = match self.step_timeout {
                Some(limit) => match timeout(limit, step.execute(&record)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(PipelineError::Timeout {
                        step_name: step.name(),
                    }),
                },
                None => step.execute(&record).await,
            };

            match outcome {
                Ok(update) => {
                    info!("Step '{}' completed successfully", step.name());
                    record.apply(update);
                }
                Err(error) => {
                    warn!("Step '{}' failed: {}", step.name(), error);
                    return Err(error);
                }
            }
        }

        Ok(record)
    }

    /// Runs the pipeline over several independent records.
    ///
    /// Records share no state, and one record's failure does not stop
    /// the rest of the batch; each record gets its own result.
    pub async fn run_batch(&self, records: Vec<R>) -> Vec<Result<R, PipelineError>> {
        let mut results = Vec::with_capacity(records.len());
        for record in records {
            results.push(self.run(record).await);
        }
        results
    }
}

/// Builder for [`Pipeline`].
pub struct PipelineBuilder<R: Record> {
    steps: Vec<Box<dyn Step<R>>>,
    step_timeout: Option<Duration>,
}

impl<R: Record> Default for PipelineBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> PipelineBuilder<R> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            step_timeout: None,
        }
    }

    /// Appends a step using its type's `Default` instance
    pub fn add<S: Step<R> + Default + 'static>(mut self) -> Self {
        self.steps.push(Box::new(S::default()));
        self
    }

    /// Appends an already-constructed step
    pub fn add_step<S: Step<R> + 'static>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Arms a wall-clock limit around each step's execution.
    ///
    /// A step that runs past the limit aborts the run with
    /// [`PipelineError::Timeout`]. Off by default.
    pub fn step_timeout(mut self, limit: Duration) -> Self {
        self.step_timeout = Some(limit);
        self
    }

    pub fn build(self) -> Result<Pipeline<R>, PipelineError> {
        if self.steps.is_empty() {
            return Err(PipelineError::Configuration(
                "Pipeline must contain at least one step".to_string(),
            ));
        }

        Ok(Pipeline {
            steps: self.steps,
            step_timeout: self.step_timeout,
        })
    }
}
