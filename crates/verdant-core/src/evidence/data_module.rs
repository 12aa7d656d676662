//! Static evaluation of a JavaScript data module.
//!
//! The module is tokenized and its top-level bindings recorded (see
//! [`crate::evidence::js`]); each wanted export is then folded into a JSON
//! value. Exports may be declared inline (`export const`, `exports.NAME =`),
//! listed (`export { a, b as c }`, `module.exports = { a, b }`) or point at
//! other top-level constants. Imported bindings evaluate to their specifier.
//! Anything computed at runtime surfaces as a parse error.

use crate::errors::EvidenceError;
use crate::evidence::js::{scan, tokenize, Evaluator};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The evaluated exports of one data module.
#[derive(Debug, Clone)]
pub struct DataModule {
    path: PathBuf,
    exports: BTreeMap<String, Value>,
}

impl DataModule {
    /// Evaluate `wanted` exports out of `source`. Fails on the first export
    /// that is absent or not a literal.
    pub fn evaluate(path: &Path, source: &str, wanted: &[&str]) -> Result<Self, EvidenceError> {
        let tokens = tokenize(source).map_err(|message| EvidenceError::Syntax {
            path: path.to_path_buf(),
            message,
        })?;
        let scope = scan(&tokens);
        let mut evaluator = Evaluator::new(&tokens, &scope);
        let mut exports = BTreeMap::new();

        for &name in wanted {
            let value = evaluator
                .export(name)
                .ok_or_else(|| EvidenceError::MissingExport {
                    path: path.to_path_buf(),
                    export: name.to_string(),
                })?
                .map_err(|message| EvidenceError::Parse {
                    path: path.to_path_buf(),
                    export: name.to_string(),
                    message,
                })?;
            exports.insert(name.to_string(), value);
        }

        tracing::debug!(path = %path.display(), exports = exports.len(), "evaluated data module");
        Ok(Self {
            path: path.to_path_buf(),
            exports,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn export(&self, name: &str) -> Option<&Value> {
        self.exports.get(name)
    }
}
