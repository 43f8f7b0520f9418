//! Grammatical word-type taxonomy.
//!
//! This module defines [`WordType`], the fixed set of conjugation-class tags
//! used by the deinflection rules and by dictionary term banks. Each type has
//! an external string tag in the dictionary format (`v1`, `v5`, `adj-i`, ...)
//! and an optional list of declared subtypes.
//!
//! Tag lookup is exact and case-sensitive; a tag this library does not know
//! is simply reported as absent, never as an error, because real term banks
//! carry many tags outside the conjugation taxonomy.
//!
//! # Examples
//!
//! ```
//! use jibiki::inflection::WordType;
//!
//! assert_eq!(WordType::from_tag("vk"), Some(WordType::Kuru));
//! assert_eq!(WordType::from_tag("adj-i"), Some(WordType::AdjI));
//! assert_eq!(WordType::from_tag("n"), None);
//! ```

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A grammatical conjugation-class tag.
///
/// The concrete verb classes (`Ichidan`, `Godan`, `Suru`, `Kuru`) describe
/// how a dictionary form conjugates; `TeForm` and `MasuForm` mark
/// intermediate conjugated states reached during deinflection, not
/// dictionary forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordType {
    /// Generic verb, groups the concrete verb classes (`v`).
    Verb,
    /// Ichidan (る-dropping) verb class (`v1`).
    Ichidan,
    /// Godan (five-row) verb class (`v5`).
    Godan,
    /// Godan verb in dictionary form (`v5d`).
    GodanDict,
    /// Ichidan verb in dictionary form (`v1d`).
    IchidanDict,
    /// Irregular する verb (`vs`).
    Suru,
    /// Irregular 来る verb (`vk`).
    Kuru,
    /// ずる verb (`vz`).
    Zuru,
    /// Te-form intermediate state (`te_form`).
    TeForm,
    /// Masu-form (polite) intermediate state (`masu_form`).
    MasuForm,
    /// I-adjective (`adj-i`).
    AdjI,
}

impl WordType {
    /// All word types, in declaration order.
    pub const ALL: [WordType; 11] = [
        WordType::Verb,
        WordType::Ichidan,
        WordType::Godan,
        WordType::GodanDict,
        WordType::IchidanDict,
        WordType::Suru,
        WordType::Kuru,
        WordType::Zuru,
        WordType::TeForm,
        WordType::MasuForm,
        WordType::AdjI,
    ];

    /// The external string tag for this word type.
    ///
    /// These are the tags used in dictionary term banks. Note that the
    /// i-adjective tag is hyphenated (`adj-i`) while the intermediate-state
    /// tags use underscores (`te_form`, `masu_form`).
    pub fn tag(&self) -> &'static str {
        match self {
            WordType::Verb => "v",
            WordType::Ichidan => "v1",
            WordType::Godan => "v5",
            WordType::GodanDict => "v5d",
            WordType::IchidanDict => "v1d",
            WordType::Suru => "vs",
            WordType::Kuru => "vk",
            WordType::Zuru => "vz",
            WordType::TeForm => "te_form",
            WordType::MasuForm => "masu_form",
            WordType::AdjI => "adj-i",
        }
    }

    /// Look up a word type by its external tag.
    ///
    /// The match is exact and case-sensitive. Unknown tags yield `None`;
    /// callers are expected to tolerate unmapped tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use jibiki::inflection::WordType;
    ///
    /// assert_eq!(WordType::from_tag("v5"), Some(WordType::Godan));
    /// assert_eq!(WordType::from_tag("V5"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<WordType> {
        Self::ALL.iter().copied().find(|t| t.tag() == tag)
    }

    /// Direct subtypes of this word type, in declared order.
    ///
    /// The generalization map is declared data: the generic verb groups the
    /// concrete classes, and each concrete class points at its
    /// dictionary-form refinement. Rule matching does not consult this
    /// relation; it compares type sets exactly.
    pub fn children(&self) -> &'static [WordType] {
        match self {
            WordType::Verb => &[
                WordType::Ichidan,
                WordType::Godan,
                WordType::Suru,
                WordType::Kuru,
            ],
            WordType::Ichidan => &[WordType::IchidanDict],
            WordType::Godan => &[WordType::GodanDict],
            _ => &[],
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Serialize for WordType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for WordType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        WordType::from_tag(&tag)
            .ok_or_else(|| de::Error::custom(format!("unknown word type tag '{tag}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for word_type in WordType::ALL {
            assert_eq!(WordType::from_tag(word_type.tag()), Some(word_type));
        }
    }

    #[test]
    fn test_from_tag_exact_match_only() {
        assert_eq!(WordType::from_tag("adj-i"), Some(WordType::AdjI));
        assert_eq!(WordType::from_tag("adj_i"), None);
        assert_eq!(WordType::from_tag("V1"), None);
        assert_eq!(WordType::from_tag("v1 "), None);
        assert_eq!(WordType::from_tag(""), None);
        assert_eq!(WordType::from_tag("n"), None);
    }

    #[test]
    fn test_children() {
        assert_eq!(
            WordType::Verb.children(),
            &[
                WordType::Ichidan,
                WordType::Godan,
                WordType::Suru,
                WordType::Kuru
            ]
        );
        assert_eq!(WordType::Ichidan.children(), &[WordType::IchidanDict]);
        assert_eq!(WordType::Godan.children(), &[WordType::GodanDict]);
        assert!(WordType::Zuru.children().is_empty());
        assert!(WordType::TeForm.children().is_empty());
        assert!(WordType::AdjI.children().is_empty());
    }

    #[test]
    fn test_children_form_a_forest() {
        // Walking the subtype relation from any node must never revisit a
        // node already on the path.
        fn walk(node: WordType, path: &mut Vec<WordType>) {
            assert!(
                !path.contains(&node),
                "cycle through {node:?} via {path:?}"
            );
            path.push(node);
            for &child in node.children() {
                walk(child, path);
            }
            path.pop();
        }

        for word_type in WordType::ALL {
            walk(word_type, &mut Vec::new());
        }
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(WordType::MasuForm.to_string(), "masu_form");
        assert_eq!(WordType::AdjI.to_string(), "adj-i");
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&WordType::AdjI).unwrap();
        assert_eq!(json, "\"adj-i\"");

        let parsed: WordType = serde_json::from_str("\"te_form\"").unwrap();
        assert_eq!(parsed, WordType::TeForm);

        let err = serde_json::from_str::<WordType>("\"nope\"").unwrap_err();
        assert!(err.to_string().contains("unknown word type tag"));
    }
}
