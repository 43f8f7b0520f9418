//! Suffix-rewrite rules and the rule registry.
//!
//! Deinflection is driven by a fixed table of reversible suffix
//! substitutions, grouped into named categories (one per grammatical
//! transformation). Each [`InflectionRule`] says: a form ending in
//! `inflected_suffix`, tagged with `inflected_types` (or still untagged),
//! can be rewritten to end in `base_suffix` and retagged with `base_types`.
//!
//! The table is static data built into the binary. Suffix strings are exact
//! Unicode text reproduced verbatim, including the kanji and historical
//! spellings of the irregular verbs (為る, 来る, 來る).

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::inflection::word_type::WordType;

/// A named rule category: one grammatical transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Polite masu-form (〜ます).
    Masu,
    /// Te-form (〜て).
    Te,
    /// Progressive contraction (〜ている / 〜てる).
    Teiru,
}

impl RuleKind {
    /// All rule categories, in table order.
    pub const ALL: [RuleKind; 3] = [RuleKind::Masu, RuleKind::Te, RuleKind::Teiru];

    /// The category name, as reported in deinflection rule chains.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Masu => "masu",
            RuleKind::Te => "te",
            RuleKind::Teiru => "teiru",
        }
    }

    /// A Japanese display label for the transformation (suffix notation).
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Masu => "ーます",
            RuleKind::Te => "ーて",
            RuleKind::Teiru => "ーいる",
        }
    }

    /// Look up a rule category by name. Exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<RuleKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for RuleKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        RuleKind::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown rule category '{name}'")))
    }
}

/// A single reversible suffix substitution.
///
/// Rules are matched against a candidate's current text and type set, and
/// applied backwards: the inflected suffix is removed and the base suffix
/// appended, moving the candidate one step closer to a dictionary form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InflectionRule {
    /// Suffix of the base (less inflected) form.
    pub base_suffix: &'static str,
    /// Suffix of the inflected form.
    pub inflected_suffix: &'static str,
    /// Word types of the base form produced by applying this rule.
    pub base_types: &'static [WordType],
    /// Word types the inflected form must carry for this rule to apply.
    pub inflected_types: &'static [WordType],
}

impl InflectionRule {
    /// Create a rule from its suffix pair and type sets.
    pub const fn new(
        base_suffix: &'static str,
        inflected_suffix: &'static str,
        base_types: &'static [WordType],
        inflected_types: &'static [WordType],
    ) -> Self {
        InflectionRule {
            base_suffix,
            inflected_suffix,
            base_types,
            inflected_types,
        }
    }

    /// The match predicate: the text must end with the rule's inflected
    /// suffix (exact suffix test, no normalization), and the candidate's
    /// type set must either be empty (untagged) or equal the rule's
    /// inflected types exactly.
    ///
    /// Equality is exact type-set equality. The taxonomy's parent/child
    /// relation plays no role here: a candidate tagged `v1` does not match
    /// a rule requiring `v1d`.
    pub fn matches(&self, text: &str, types: &[WordType]) -> bool {
        text.ends_with(self.inflected_suffix)
            && (types.is_empty() || types == self.inflected_types)
    }

    /// Rewrite `text` by stripping the inflected suffix and appending the
    /// base suffix. Returns `None` if the text does not end with the
    /// inflected suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use jibiki::inflection::{RuleKind, RuleTable};
    ///
    /// let masu = &RuleTable::standard().rules(RuleKind::Masu)[0];
    /// assert_eq!(masu.apply("食べます").as_deref(), Some("食べる"));
    /// assert_eq!(masu.apply("食べる"), None);
    /// ```
    pub fn apply(&self, text: &str) -> Option<String> {
        let stem = text.strip_suffix(self.inflected_suffix)?;
        Some(format!("{stem}{}", self.base_suffix))
    }
}

const ICHIDAN_DICT: &[WordType] = &[WordType::IchidanDict];
const GODAN_DICT: &[WordType] = &[WordType::GodanDict];
const SURU: &[WordType] = &[WordType::Suru];
const KURU: &[WordType] = &[WordType::Kuru];
const TE_FORM: &[WordType] = &[WordType::TeForm];
const MASU_FORM: &[WordType] = &[WordType::MasuForm];

/// Masu-form rules: the ichidan ending, the nine godan consonant classes,
/// and the irregular verbs with their kanji spellings.
const MASU_RULES: &[InflectionRule] = &[
    InflectionRule::new("る", "ます", ICHIDAN_DICT, MASU_FORM),
    InflectionRule::new("う", "います", GODAN_DICT, MASU_FORM),
    InflectionRule::new("つ", "ちます", GODAN_DICT, MASU_FORM),
    InflectionRule::new("る", "ります", GODAN_DICT, MASU_FORM),
    InflectionRule::new("ぬ", "にます", GODAN_DICT, MASU_FORM),
    InflectionRule::new("ぶ", "びます", GODAN_DICT, MASU_FORM),
    InflectionRule::new("む", "みます", GODAN_DICT, MASU_FORM),
    InflectionRule::new("く", "きます", GODAN_DICT, MASU_FORM),
    InflectionRule::new("ぐ", "ぎます", GODAN_DICT, MASU_FORM),
    InflectionRule::new("す", "します", GODAN_DICT, MASU_FORM),
    InflectionRule::new("する", "します", SURU, MASU_FORM),
    InflectionRule::new("為る", "為ます", SURU, MASU_FORM),
    InflectionRule::new("くる", "きます", KURU, MASU_FORM),
    InflectionRule::new("来る", "来ます", KURU, MASU_FORM),
    InflectionRule::new("來る", "來ます", KURU, MASU_FORM),
];

/// Te-form rules, encoding the godan sound changes: く→いて, ぐ→いで,
/// ぬ/ぶ/む→んで, う/つ/る→って, す→して.
const TE_RULES: &[InflectionRule] = &[
    InflectionRule::new("る", "て", ICHIDAN_DICT, TE_FORM),
    InflectionRule::new("う", "って", GODAN_DICT, TE_FORM),
    InflectionRule::new("つ", "って", GODAN_DICT, TE_FORM),
    InflectionRule::new("る", "って", GODAN_DICT, TE_FORM),
    InflectionRule::new("ぬ", "んで", GODAN_DICT, TE_FORM),
    InflectionRule::new("ぶ", "んで", GODAN_DICT, TE_FORM),
    InflectionRule::new("む", "んで", GODAN_DICT, TE_FORM),
    InflectionRule::new("く", "いて", GODAN_DICT, TE_FORM),
    InflectionRule::new("ぐ", "いで", GODAN_DICT, TE_FORM),
    InflectionRule::new("す", "して", GODAN_DICT, TE_FORM),
    InflectionRule::new("する", "して", SURU, TE_FORM),
    InflectionRule::new("為る", "為て", SURU, TE_FORM),
    InflectionRule::new("くる", "きて", KURU, TE_FORM),
    InflectionRule::new("来る", "来て", KURU, TE_FORM),
    InflectionRule::new("來る", "來て", KURU, TE_FORM),
];

/// Teiru-form rules: て/で plus the いる/る contraction.
const TEIRU_RULES: &[InflectionRule] = &[
    InflectionRule::new("て", "ている", TE_FORM, ICHIDAN_DICT),
    InflectionRule::new("て", "てる", TE_FORM, ICHIDAN_DICT),
    InflectionRule::new("で", "でいる", TE_FORM, ICHIDAN_DICT),
    InflectionRule::new("で", "でる", TE_FORM, ICHIDAN_DICT),
];

static STANDARD_TABLE: RuleTable = RuleTable {
    groups: &[
        (RuleKind::Masu, MASU_RULES),
        (RuleKind::Te, TE_RULES),
        (RuleKind::Teiru, TEIRU_RULES),
    ],
};

/// The immutable rule registry: rule categories in a fixed order, each with
/// an ordered list of rules.
///
/// The registry is built into the binary and shared process-wide; it is
/// never mutated, so it can be read from any number of threads without
/// locking. Category order and per-category rule order are stable because
/// they determine the enumeration order of deinflection results.
#[derive(Debug)]
pub struct RuleTable {
    groups: &'static [(RuleKind, &'static [InflectionRule])],
}

impl RuleTable {
    /// The standard rule table.
    pub fn standard() -> &'static RuleTable {
        &STANDARD_TABLE
    }

    /// The ordered rules of one category.
    pub fn rules(&self, kind: RuleKind) -> &'static [InflectionRule] {
        self.groups
            .iter()
            .copied()
            .find(|(k, _)| *k == kind)
            .map_or(&[], |(_, rules)| rules)
    }

    /// Iterate over all categories and their rules, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &'static [InflectionRule])> + '_ {
        self.groups.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_is_stable() {
        let kinds: Vec<RuleKind> = RuleTable::standard().iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RuleKind::Masu, RuleKind::Te, RuleKind::Teiru]);
    }

    #[test]
    fn test_rule_counts() {
        let table = RuleTable::standard();
        assert_eq!(table.rules(RuleKind::Masu).len(), 15);
        assert_eq!(table.rules(RuleKind::Te).len(), 15);
        assert_eq!(table.rules(RuleKind::Teiru).len(), 4);
    }

    #[test]
    fn test_masu_table_contents() {
        let rules = RuleTable::standard().rules(RuleKind::Masu);

        // Ichidan first.
        assert_eq!(rules[0].base_suffix, "る");
        assert_eq!(rules[0].inflected_suffix, "ます");
        assert_eq!(rules[0].base_types, &[WordType::IchidanDict]);

        // All kanji variants of くる are present.
        for (base, inflected) in [("くる", "きます"), ("来る", "来ます"), ("來る", "來ます")] {
            assert!(
                rules
                    .iter()
                    .any(|r| r.base_suffix == base
                        && r.inflected_suffix == inflected
                        && r.base_types == &[WordType::Kuru]),
                "missing kuru rule {base}/{inflected}"
            );
        }
    }

    #[test]
    fn test_te_sound_changes() {
        let rules = RuleTable::standard().rules(RuleKind::Te);
        let pairs: Vec<(&str, &str)> = rules
            .iter()
            .filter(|r| r.base_types == &[WordType::GodanDict])
            .map(|r| (r.base_suffix, r.inflected_suffix))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("う", "って"),
                ("つ", "って"),
                ("る", "って"),
                ("ぬ", "んで"),
                ("ぶ", "んで"),
                ("む", "んで"),
                ("く", "いて"),
                ("ぐ", "いで"),
                ("す", "して"),
            ]
        );
    }

    #[test]
    fn test_teiru_contractions() {
        let rules = RuleTable::standard().rules(RuleKind::Teiru);
        let pairs: Vec<(&str, &str)> = rules
            .iter()
            .map(|r| (r.base_suffix, r.inflected_suffix))
            .collect();

        assert_eq!(
            pairs,
            vec![("て", "ている"), ("て", "てる"), ("で", "でいる"), ("で", "でる")]
        );
        for rule in rules {
            assert_eq!(rule.base_types, &[WordType::TeForm]);
            assert_eq!(rule.inflected_types, &[WordType::IchidanDict]);
        }
    }

    #[test]
    fn test_match_predicate_untagged() {
        let rule = &RuleTable::standard().rules(RuleKind::Masu)[0];
        // An untagged candidate matches on suffix alone.
        assert!(rule.matches("食べます", &[]));
        assert!(!rule.matches("食べる", &[]));
    }

    #[test]
    fn test_match_predicate_requires_exact_types() {
        let teiru = &RuleTable::standard().rules(RuleKind::Teiru)[0];
        assert!(teiru.matches("見ている", &[WordType::IchidanDict]));
        // A different type set does not match, even the declared parent of
        // the required type: matching ignores the hierarchy.
        assert!(!teiru.matches("見ている", &[WordType::Ichidan]));
        assert!(!teiru.matches("見ている", &[WordType::MasuForm]));
    }

    #[test]
    fn test_apply_rewrites_suffix() {
        let kuru = InflectionRule::new("来る", "来ます", KURU, MASU_FORM);
        assert_eq!(kuru.apply("来ます").as_deref(), Some("来る"));
        assert_eq!(kuru.apply("きます"), None);
    }

    #[test]
    fn test_rule_kind_names_and_labels() {
        assert_eq!(RuleKind::Masu.name(), "masu");
        assert_eq!(RuleKind::Te.name(), "te");
        assert_eq!(RuleKind::Teiru.name(), "teiru");
        assert_eq!(RuleKind::Masu.label(), "ーます");
        assert_eq!(RuleKind::Teiru.label(), "ーいる");
        assert_eq!(RuleKind::from_name("te"), Some(RuleKind::Te));
        assert_eq!(RuleKind::from_name("Te"), None);
    }

    #[test]
    fn test_rule_kind_serde() {
        let json = serde_json::to_string(&RuleKind::Teiru).unwrap();
        assert_eq!(json, "\"teiru\"");
        let parsed: RuleKind = serde_json::from_str("\"masu\"").unwrap();
        assert_eq!(parsed, RuleKind::Masu);
    }
}
