//! Dotted numeric revision strings and their ordering.

use std::fmt;
use std::str::FromStr;

use crate::error::{JibikiError, Result};

/// A dictionary revision: one or more dot-separated numeric components,
/// such as `"3"`, `"1.2"` or `"2025.2.1"`.
///
/// Revisions only order against revisions with the same number of
/// components. The update protocol treats a component-count mismatch as a
/// broken publisher index, not as a comparison to win or lose.
///
/// # Examples
///
/// ```
/// use jibiki::dictionary::Revision;
///
/// let local: Revision = "1.2.3".parse().unwrap();
/// let remote: Revision = "1.3.0".parse().unwrap();
///
/// assert!(remote.newer_than(&local).unwrap());
/// assert!(!local.newer_than(&local).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revision {
    components: Vec<u64>,
}

impl Revision {
    /// The numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Whether `self` is strictly newer than `other`.
    ///
    /// Components are compared left to right and the first difference
    /// decides. Equal revisions are not newer than each other. Comparing
    /// revisions with different component counts is an error.
    pub fn newer_than(&self, other: &Revision) -> Result<bool> {
        if self.components.len() != other.components.len() {
            return Err(JibikiError::revision(format!(
                "mismatched revision formats '{self}' and '{other}'"
            )));
        }
        for (mine, theirs) in self.components.iter().zip(&other.components) {
            if mine != theirs {
                return Ok(mine > theirs);
            }
        }
        Ok(false)
    }
}

impl FromStr for Revision {
    type Err = JibikiError;

    fn from_str(s: &str) -> Result<Self> {
        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| JibikiError::revision(format!("invalid revision '{s}'")))
            })
            .collect::<Result<Vec<u64>>>()?;
        Ok(Revision { components })
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_revisions() {
        let revision: Revision = "2025.2.1".parse().unwrap();
        assert_eq!(revision.components(), &[2025, 2, 1]);

        let single: Revision = "7".parse().unwrap();
        assert_eq!(single.components(), &[7]);
    }

    #[test]
    fn test_parse_invalid_revisions() {
        for input in ["", "1..2", "1.2-beta", "a.b", "1.2.", "."] {
            assert!(input.parse::<Revision>().is_err(), "accepted '{input}'");
        }
    }

    #[test]
    fn test_display_round_trip() {
        let revision: Revision = "1.20.3".parse().unwrap();
        assert_eq!(revision.to_string(), "1.20.3");
    }

    #[test]
    fn test_newer_than() {
        let r = |s: &str| s.parse::<Revision>().unwrap();

        assert!(r("1.2.4").newer_than(&r("1.2.3")).unwrap());
        assert!(r("2.0.0").newer_than(&r("1.9.9")).unwrap());
        assert!(!r("1.2.3").newer_than(&r("1.2.3")).unwrap());
        assert!(!r("1.2.3").newer_than(&r("1.2.4")).unwrap());
        // The first differing component decides, even when a later
        // component is larger.
        assert!(!r("1.9").newer_than(&r("2.0")).unwrap());
    }

    #[test]
    fn test_component_count_mismatch_is_an_error() {
        let local: Revision = "1.2".parse().unwrap();
        let remote: Revision = "1.2.3".parse().unwrap();
        let error = remote.newer_than(&local).unwrap_err();
        assert!(error.to_string().contains("mismatched revision formats"));
    }
}
