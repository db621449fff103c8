//! Interactive orchestration of the birth data form.
//!
//! - `resolver`: city typeahead with last-issued-wins completion
//! - `selection`: binding a picked city into the form
//! - `submission`: the Idle/Submitting/Succeeded/Failed lifecycle
//! - `session`: the single state aggregate tying them together
//! - `workflow`: async driver that calls the collaborators around a `Session`
//! - `render`: pure mapping of results into display sections

pub mod render;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod submission;
pub mod workflow;

pub use session::Session;
pub use workflow::Workflow;
