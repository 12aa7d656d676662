//! Check registry and dispatch.
//!
//! A [`Section`] is pure data: what to load and which predicate to apply. The
//! closed [`Probe`] enum selects the predicate; [`Section::evaluate`] loads the
//! evidence and hands it to the matching function in [`predicates`].

pub mod predicates;
pub mod registry;

pub use registry::SECTIONS;

use crate::errors::{EvidenceError, SectionError};
use crate::evidence::{self, DataModule};
use crate::report::CheckOutcome;
use serde_json::Value;
use std::path::Path;

/// One banner-level group of checks.
#[derive(Debug)]
pub struct Section {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    /// Label of the single outcome emitted when the section cannot be evaluated.
    pub failure_label: &'static str,
    pub probe: Probe,
}

#[derive(Debug)]
pub enum Probe {
    /// Load a data module, report the size of each collection and check the
    /// fields of one sampled record.
    DataModule {
        path: &'static str,
        collections: &'static [Collection],
        sample: RecordSample,
    },
    /// Existence of each artifact, one outcome per path.
    Exists { paths: &'static [&'static str] },
    /// Every token must occur in one text artifact; one combined outcome.
    Contains {
        path: &'static str,
        tokens: &'static [&'static str],
        complete_label: &'static str,
        missing_label: &'static str,
    },
    /// Each page must contain all of its identifiers; one outcome per page.
    AllOf { pages: &'static [PageIdentifiers] },
}

#[derive(Debug)]
pub struct Collection {
    pub export: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct RecordSample {
    /// Array export whose first element is sampled.
    pub export: &'static str,
    pub fields: &'static [&'static str],
    pub complete_label: &'static str,
    pub missing_label: &'static str,
}

#[derive(Debug)]
pub struct PageIdentifiers {
    pub name: &'static str,
    pub path: &'static str,
    pub identifiers: &'static [&'static str],
}

impl Section {
    /// Artifacts this section reads, relative to the project root.
    pub fn artifacts(&self) -> Vec<&'static str> {
        match &self.probe {
            Probe::DataModule { path, .. } | Probe::Contains { path, .. } => vec![*path],
            Probe::Exists { paths } => paths.to_vec(),
            Probe::AllOf { pages } => pages.iter().map(|p| p.path).collect(),
        }
    }

    /// Load this section's evidence and evaluate it. Any error aborts the
    /// section as a whole; the caller turns it into one failing outcome.
    pub fn evaluate(&self, root: &Path) -> Result<Vec<CheckOutcome>, SectionError> {
        match &self.probe {
            Probe::DataModule {
                path,
                collections,
                sample,
            } => evaluate_data_module(root, path, collections, sample),
            Probe::Exists { paths } => Ok(paths
                .iter()
                .map(|p| predicates::existence(p, evidence::probe(root, p)))
                .collect()),
            Probe::Contains {
                path,
                tokens,
                complete_label,
                missing_label,
            } => {
                let text = evidence::read_text(root, path)?;
                Ok(vec![predicates::substring_difference(
                    &text,
                    tokens,
                    complete_label,
                    missing_label,
                )])
            }
            Probe::AllOf { pages } => {
                // Every page is read before any is judged.
                let texts = pages
                    .iter()
                    .map(|p| evidence::read_text(root, p.path))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(pages
                    .iter()
                    .zip(&texts)
                    .map(|(page, text)| predicates::all_of(page.name, text, page.identifiers))
                    .collect())
            }
        }
    }
}

fn evaluate_data_module(
    root: &Path,
    path: &str,
    collections: &[Collection],
    sample: &RecordSample,
) -> Result<Vec<CheckOutcome>, SectionError> {
    let mut exports: Vec<&str> = collections.iter().map(|c| c.export).collect();
    if !exports.contains(&sample.export) {
        exports.push(sample.export);
    }
    let module = evidence::load_data_module(root, path, &exports)?;

    let mut outcomes = Vec::with_capacity(collections.len() + 1);
    for collection in collections {
        let size = predicates::collection_size(export(&module, collection.export)?)
            .ok_or_else(|| SectionError::NotACollection(collection.export.to_string()))?;
        outcomes.push(CheckOutcome::pass(collection.label).with_detail(format!("{size} records")));
    }

    let record = export(&module, sample.export)?
        .as_array()
        .and_then(|records| records.first())
        .ok_or_else(|| SectionError::NoSampleRecord(sample.export.to_string()))?;
    outcomes.push(predicates::field_completeness(record, sample));

    Ok(outcomes)
}

fn export<'m>(module: &'m DataModule, name: &str) -> Result<&'m Value, EvidenceError> {
    module.export(name).ok_or_else(|| EvidenceError::MissingExport {
        path: module.path().to_path_buf(),
        export: name.to_string(),
    })
}
