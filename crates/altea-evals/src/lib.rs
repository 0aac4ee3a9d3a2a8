//! altea-evals
//!
//! The computation half of the assessment engine: summary folds over a score
//! map, re-evaluation comparison, and the evaluation lifecycle state machine.
//! Pure in-memory computation — persistence and transport belong to the host.

pub mod comparison;
pub mod error;
pub mod lifecycle;
pub mod render;
pub mod summary;
