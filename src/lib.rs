//! # Jibiki
//!
//! A Japanese deinflection and dictionary management library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Rule-based deinflection of polite and progressive verb forms
//! - Word-type taxonomy shared with Yomitan-format term banks
//! - Dictionary metadata, revision comparison, and update downloads
//! - Zip extraction with per-entry checksum verification
//!
//! ## Examples
//!
//! ```
//! use jibiki::inflection::{Deinflector, RuleKind, WordType};
//!
//! let deinflector = Deinflector::new();
//! let candidates = deinflector.deinflect("している");
//!
//! assert!(candidates.iter().any(|c| {
//!     c.text == "する"
//!         && c.rules == [RuleKind::Teiru, RuleKind::Te]
//!         && c.types == [WordType::Suru]
//! }));
//! ```

pub mod dictionary;
pub mod error;
pub mod inflection;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::dictionary::{Dictionary, DictionaryMetadata, TermEntry, UpdateState};
    pub use crate::error::{JibikiError, Result};
    pub use crate::inflection::{Deinflection, Deinflector, RuleKind, WordType};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
