//! Sequential section runner with per-section failure isolation.

use crate::checks::{Section, SECTIONS};
use crate::report::{CheckOutcome, Reporter, SectionReport};
use std::io::{self, Write};
use std::path::Path;

/// Outcome counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sections: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluate one section. Never fails: an error becomes the section's only
/// outcome.
pub fn run_section(ordinal: usize, section: &'static Section, root: &Path) -> SectionReport {
    let outcomes = match section.evaluate(root) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            tracing::warn!(section = section.id, error = %e, "section could not be evaluated");
            vec![CheckOutcome::fail(section.failure_label).with_detail(e.to_string())]
        }
    };
    SectionReport {
        ordinal,
        section,
        outcomes,
    }
}

/// Run every registered section against `root`, printing as it goes.
///
/// Only a write failure on the reporter aborts the run.
pub fn run<W: Write>(root: &Path, reporter: &mut Reporter<W>) -> io::Result<RunSummary> {
    run_sections(SECTIONS, root, reporter)
}

pub fn run_sections<W: Write>(
    sections: &'static [Section],
    root: &Path,
    reporter: &mut Reporter<W>,
) -> io::Result<RunSummary> {
    tracing::debug!(root = %root.display(), sections = sections.len(), "starting run");
    let mut summary = RunSummary::default();

    reporter.opening()?;
    for (idx, section) in sections.iter().enumerate() {
        let report = run_section(idx + 1, section, root);
        summary.sections += 1;
        summary.passed += report.passed();
        summary.failed += report.failed();
        reporter.section(&report)?;
    }
    reporter.closing()?;

    Ok(summary)
}
