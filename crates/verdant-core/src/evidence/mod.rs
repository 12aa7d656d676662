//! Evidence loading: read-only access to the artifacts of the project under
//! inspection.
//!
//! Every loader returns a `Result`; nothing here panics on a missing or
//! malformed artifact. Paths are always given relative to the project root and
//! error messages carry the relative form.

pub mod data_module;
pub mod js;

pub use data_module::DataModule;

use crate::errors::EvidenceError;
use std::path::Path;

/// Existence probe for an artifact that is only checked for presence.
pub fn probe(root: &Path, rel: &str) -> bool {
    let exists = root.join(rel).exists();
    tracing::debug!(path = rel, exists, "probed artifact");
    exists
}

/// Read an artifact as UTF-8 text.
pub fn read_text(root: &Path, rel: &str) -> Result<String, EvidenceError> {
    let text = std::fs::read_to_string(root.join(rel)).map_err(|source| EvidenceError::Read {
        path: rel.into(),
        source,
    })?;
    tracing::debug!(path = rel, bytes = text.len(), "read artifact");
    Ok(text)
}

/// Load a data module and evaluate the requested exports.
pub fn load_data_module(
    root: &Path,
    rel: &str,
    exports: &[&str],
) -> Result<DataModule, EvidenceError> {
    let source = read_text(root, rel)?;
    DataModule::evaluate(Path::new(rel), &source, exports)
}
