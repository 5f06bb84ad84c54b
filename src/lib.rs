//! life-evaluator - an interactive wellbeing questionnaire
//!
//! Asks a fixed set of weighted yes/no questions across six life categories,
//! totals the answers and reports either a success message or the areas
//! worth focusing on.
//!
//! The flow is built from small pieces so it can be driven without a
//! terminal:
//! - [`registry`] - the fixed, ordered question set
//! - [`session`] - running totals and the category evaluators
//! - [`scoring`] - percentage, pass threshold and the final [`scoring::Evaluation`]
//! - [`prompt`] - the yes/no input capability
//! - [`output`] / [`report`] - the output capability and everything it prints
//! - [`config`] - user-level presentation settings

pub mod config;
pub mod output;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod session;

pub use registry::{Category, Question, QuestionId, Registry};
pub use scoring::{Evaluation, Verdict};
pub use session::Session;
