//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_pipeline, PipelineArgs, PipelineOutcome};
