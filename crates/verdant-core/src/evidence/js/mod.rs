//! Just enough JavaScript to read a data module without running it.
//!
//! [`lexer`] turns the source into tokens with comments dropped and literals
//! kept whole, [`scan`] records the top-level bindings and exports, and
//! [`eval`] folds literal initializers into `serde_json::Value`s.

pub mod eval;
pub mod lexer;
pub mod scan;

pub use eval::Evaluator;
pub use lexer::{tokenize, Tok, Token};
pub use scan::{scan, Binding, Export, ModuleScope};
