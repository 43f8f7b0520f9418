//! The deinflection search engine.
//!
//! Given a surface (inflected) word form, the engine discovers every base
//! form reachable by reversing the suffix-rewrite rules in the
//! [`RuleTable`]. Each candidate carries the ordered chain of rule
//! categories that produced it and the word types of the form it reached.
//!
//! # Algorithm
//!
//! The search is a breadth-first worklist over an implicit graph of
//! candidate states. The result list doubles as the worklist: it is seeded
//! with the identity candidate (the input itself, no rules applied, no
//! types), and an index walks the list while matching rules append child
//! candidates behind it. Traversal order therefore equals discovery order,
//! and the returned list contains every state ever discovered: the
//! identity candidate first, then generation by generation.
//!
//! There is no deduplication: two distinct rule chains that happen to
//! produce the same text yield two records, which is intentional (their
//! type sets usually differ, and downstream lexicon matching needs both).
//!
//! Deinflection is a total function. Empty input, or input matching no
//! rule, yields exactly the identity candidate; there are no error cases.
//!
//! # Examples
//!
//! ```
//! use jibiki::inflection::{Deinflector, RuleKind, WordType};
//!
//! let deinflector = Deinflector::new();
//! let candidates = deinflector.deinflect("来ます");
//!
//! assert!(candidates.iter().any(|c| {
//!     c.text == "来る" && c.rules == [RuleKind::Masu] && c.types == [WordType::Kuru]
//! }));
//! ```

use serde::{Deserialize, Serialize};

use crate::inflection::rule::{RuleKind, RuleTable};
use crate::inflection::word_type::WordType;

/// One deinflection candidate.
///
/// The first candidate of every search is the identity: the input text,
/// an empty rule chain, and an empty type set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deinflection {
    /// The candidate text after applying the rule chain.
    pub text: String,
    /// The rule categories applied, in application order.
    pub rules: Vec<RuleKind>,
    /// Word types of the candidate, set by the last rule applied.
    /// Empty for the identity candidate.
    pub types: Vec<WordType>,
}

impl Deinflection {
    fn identity(text: &str) -> Self {
        Deinflection {
            text: text.to_string(),
            rules: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Whether this is the identity candidate (no rules applied).
    pub fn is_identity(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The deinflection engine.
///
/// Holds a reference to the shared rule registry and an optional depth cap.
/// The engine is cheap to construct and clone, keeps no per-call state, and
/// can be used concurrently from any number of threads: every
/// [`deinflect`](Deinflector::deinflect) call allocates its own candidate
/// list and the registry is immutable.
///
/// By default the search is unbounded, matching the historical behavior of
/// the rule table (the current table always terminates because the type
/// gate collapses branching after a couple of generations). A rule table
/// with a type round-trip could loop, so callers that need a hard latency
/// bound can cap the rule-chain length with
/// [`with_max_depth`](Deinflector::with_max_depth).
#[derive(Clone, Debug)]
pub struct Deinflector {
    table: &'static RuleTable,
    max_depth: Option<usize>,
}

impl Deinflector {
    /// Create a deinflector over the standard rule table, unbounded.
    pub fn new() -> Self {
        Deinflector {
            table: RuleTable::standard(),
            max_depth: None,
        }
    }

    /// Cap the rule-chain length of produced candidates.
    ///
    /// Candidates whose chain has reached `max_depth` rules are still
    /// returned but no longer expanded.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Return every candidate reachable from `text` by zero or more rule
    /// applications, in discovery order.
    ///
    /// The identity candidate is always the first element of the result.
    pub fn deinflect(&self, text: &str) -> Vec<Deinflection> {
        let mut candidates = vec![Deinflection::identity(text)];

        let mut index = 0;
        while index < candidates.len() {
            let current = candidates[index].clone();

            let expandable = self
                .max_depth
                .is_none_or(|limit| current.rules.len() < limit);
            if expandable {
                for (kind, entries) in self.table.iter() {
                    for rule in entries {
                        if !rule.matches(&current.text, &current.types) {
                            continue;
                        }
                        let Some(new_text) = rule.apply(&current.text) else {
                            continue;
                        };

                        let mut chain = current.rules.clone();
                        chain.push(kind);
                        candidates.push(Deinflection {
                            text: new_text,
                            rules: chain,
                            types: rule.base_types.to_vec(),
                        });
                    }
                }
            }

            index += 1;
        }

        candidates
    }
}

impl Default for Deinflector {
    fn default() -> Self {
        Self::new()
    }
}
