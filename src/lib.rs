//! # Mailsift
//!
//! A linear email triage pipeline built on a lightweight step engine.
//!
//! Incoming email text flows through a fixed three-step pipeline —
//! spam detection, classification, canned-response selection — over a
//! shared [`EmailState`] record. Each step reads the record and returns
//! a partial [`EmailUpdate`]; the executor merges the update and moves
//! on to the next step. There is no branching, no cycles, and no
//! hidden global state: a [`Pipeline`] is an ordered list of steps
//! built once and passed around explicitly.
//!
//! ## Features
//!
//! - **Type-safe**: the [`Record`] trait ties each pipeline to a typed
//!   record and a typed partial update; [`StepName`] prevents identifier
//!   typos at the API level
//! - **Linear by construction**: steps return updates, not successor
//!   names, so routing mistakes cannot exist
//! - **Single-writer fields**: merging applies only the fields a step
//!   owns, so no step can clobber another's output
//! - **Structured errors**: [`PipelineError`] with `thiserror`; the
//!   first failing step aborts its run without affecting other records
//! - **Observable**: `tracing` events at every step boundary, decoupled
//!   from control flow
//!
//! ## Quick Start
//!
//! ```rust
//! use mailsift::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), PipelineError> {
//! let pipeline = triage_pipeline();
//!
//! let record = pipeline
//!     .run(EmailState::new("Please contact support about my order"))
//!     .await?;
//!
//! assert_eq!(record.is_spam, Some(false));
//! assert_eq!(record.classification, Some(Classification::Support));
//! assert_eq!(record.response.as_deref(), Some("Forwarded to support team"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Pipelines
//!
//! The executor is generic over any [`Record`] implementation:
//!
//! ```rust
//! use mailsift::prelude::*;
//! use async_trait::async_trait;
//!
//! #[derive(Debug, Default)]
//! struct Counter {
//!     total: u32,
//! }
//!
//! impl Record for Counter {
//!     type Update = u32;
//!
//!     fn apply(&mut self, update: u32) {
//!         self.total += update;
//!     }
//! }
//!
//! define_step!(AddOneStep);
//!
//! #[async_trait]
//! impl Step<Counter> for AddOneStep {
//!     async fn execute(&self, _record: &Counter) -> Result<u32, PipelineError> {
//!         Ok(1)
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), PipelineError> {
//! let pipeline = Pipeline::builder()
//!     .add::<AddOneStep>()
//!     .add::<AddOneStep>()
//!     .build()?;
//!
//! let record = pipeline.run(Counter::default()).await?;
//! assert_eq!(record.total, 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use mailsift::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let pipeline = triage_pipeline();
//!
//! // A record without content never enters the spam check.
//! if let Err(error) = pipeline.run(EmailState::default()).await {
//!     match error {
//!         PipelineError::InvalidInput(details) => {
//!             eprintln!("Bad input record: {}", details);
//!         }
//!         _ => eprintln!("Error: {}", error),
//!     }
//! }
//! # }
//! ```

mod email;
mod error;
mod pipeline;
mod record;
mod step;
mod triage;

pub mod prelude;

pub use email::{Classification, EmailState, EmailUpdate};
pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use record::Record;
pub use step::{Step, StepName};
pub use triage::{triage_pipeline, CheckSpamStep, ClassifyEmailStep, GenerateResponseStep};

/// Macro to define a step with minimal boilerplate
///
/// This macro creates a step struct with:
/// - `const NAME: &'static str` - compile-time step name
/// - `Debug` derive
/// - `Default` implementation
///
/// # Example
///
/// ```rust
/// use mailsift::define_step;
///
/// define_step!(MyStep);
/// assert_eq!(MyStep::NAME, "MyStep");
/// ```
#[macro_export]
macro_rules! define_step {
    ($name:ident) => {
        #[derive(Debug)]
        pub struct $name;

        impl $name {
            /// Step name as a compile-time constant
            #[allow(dead_code)]
            pub const NAME: &'static str = stringify!($name);
        }

        impl Default for $name {
            fn default() -> Self {
                Self
            }
        }
    };
}
