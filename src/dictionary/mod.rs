//! Dictionary management module for Jibiki.
//!
//! This module handles Yomitan-format dictionaries end to end: the
//! `index.json` metadata model, dotted revision comparison, term-bank
//! parsing (whose "rules" column feeds the deinflection taxonomy), safe
//! zip extraction, and the check-then-download update lifecycle.

pub mod archive;
pub mod metadata;
pub mod revision;
pub mod term_bank;
pub mod update;

// Re-export commonly used types
pub use archive::*;
pub use metadata::*;
pub use revision::*;
pub use term_bank::*;
pub use update::*;
