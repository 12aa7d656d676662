//! Structural-integrity checks for the plant encyclopedia frontend.
//!
//! The flow is one-directional: [`evidence`] loads artifacts, [`checks`]
//! evaluates them into [`report::CheckOutcome`]s, and [`runner`] sequences the
//! sections and hands each one to the [`report::Reporter`].

pub mod checks;
pub mod errors;
pub mod evidence;
pub mod report;
pub mod runner;

pub use checks::{Section, SECTIONS};
pub use errors::{EvidenceError, SectionError};
pub use report::{CheckOutcome, Reporter, SectionReport};
pub use runner::{run, RunSummary};
