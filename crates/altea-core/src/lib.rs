//! altea-core
//!
//! Pure domain types for the assessment engine. No I/O and no scoring logic —
//! this is the shared vocabulary of the Altea system.

pub mod models;
