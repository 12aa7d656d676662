//! Process exit codes.
//! Failed checks only change the exit code when `--strict` is given.

pub const SUCCESS: i32 = 0;
pub const CHECKS_FAILED: i32 = 1; // --strict and at least one failing outcome
pub const INTERNAL_ERROR: i32 = 2; // report could not be written
