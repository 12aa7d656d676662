pub mod console;

pub use console::Reporter;

use crate::checks::Section;
use std::fmt;

pub const PASS_GLYPH: &str = "✅";
pub const FAIL_GLYPH: &str = "❌";

/// Result of evaluating one check against its evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub label: String,
    pub passed: bool,
    pub detail: Option<String>,
}

impl CheckOutcome {
    pub fn pass(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed: true,
            detail: None,
        }
    }

    pub fn fail(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed: false,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn glyph(&self) -> &'static str {
        if self.passed {
            PASS_GLYPH
        } else {
            FAIL_GLYPH
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

/// Outcomes of one section, in evaluation order, under its banner.
#[derive(Debug, Clone)]
pub struct SectionReport {
    /// 1-based position of the section in the run.
    pub ordinal: usize,
    pub section: &'static Section,
    pub outcomes: Vec<CheckOutcome>,
}

impl SectionReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}
