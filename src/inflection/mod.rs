//! Deinflection module for Jibiki.
//!
//! This module reverses Japanese inflectional morphology: given a surface
//! form such as 来ます or している, it enumerates the base forms the surface
//! could have been inflected from, together with the rule chain and word
//! types of each candidate. It consists of:
//! - The word type taxonomy used to tag candidates ([`WordType`])
//! - The static table of suffix-rewrite rules ([`RuleTable`])
//! - The breadth-first search engine ([`Deinflector`])

pub mod deinflect;
pub mod rule;
pub mod word_type;

// Re-export commonly used types
pub use deinflect::*;
pub use rule::*;
pub use word_type::*;
