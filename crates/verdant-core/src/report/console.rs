use super::SectionReport;
use crate::checks::Section;
use std::io::{self, Write};

pub const OPENING_LINE: &str = "🌱 Plant encyclopedia structural check started";

/// Fixed closing text. Deliberately independent of the outcomes.
pub const CLOSING_LINES: &[&str] = &[
    "🎉 Plant encyclopedia structural check complete!",
    "💡 Tip: make sure every item shows ✅",
    "🔧 If any item shows ❌, inspect the corresponding file and feature",
];

/// Banner printed before a section. Deterministic, unit-testable.
#[must_use]
pub fn format_banner(ordinal: usize, section: &Section) -> String {
    format!("{} Check {}: {}", section.icon, ordinal, section.title)
}

/// Line-oriented text reporter.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn opening(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", OPENING_LINE)
    }

    pub fn section(&mut self, report: &SectionReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_banner(report.ordinal, report.section))?;
        for outcome in &report.outcomes {
            writeln!(self.out, "{}", outcome)?;
        }
        Ok(())
    }

    pub fn closing(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        for line in CLOSING_LINES {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
