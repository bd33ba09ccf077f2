//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_appcast_workflow, select_source, AppcastWorkflowArgs, WorkflowResult};
