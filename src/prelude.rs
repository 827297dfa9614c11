//! Commonly used types and traits

pub use crate::define_step;
pub use crate::email::{Classification, EmailState, EmailUpdate};
pub use crate::error::PipelineError;
pub use crate::pipeline::{Pipeline, PipelineBuilder};
pub use crate::record::Record;
pub use crate::step::{Step, StepName};
pub use crate::triage::{
    triage_pipeline, CheckSpamStep, ClassifyEmailStep, GenerateResponseStep,
};
