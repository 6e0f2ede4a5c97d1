//! UI Components for the Fuzzy Columns application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`UploadWorkflow`] - Root workflow: staging, submit, results
//! - [`FilePicker`] - Staged CSV files with add/remove actions
//! - [`ColumnList`] - One checkbox per returned header
//! - [`GroupResultView`] - Backend grouping result as indented JSON

mod hero;
mod file_picker;
mod columns;
mod groups;
mod workflow;

pub use hero::*;
pub use file_picker::*;
pub use columns::*;
pub use groups::*;
pub use workflow::*;
