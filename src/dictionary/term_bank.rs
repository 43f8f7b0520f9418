//! Yomitan term banks (`term_bank_*.json`).
//!
//! A term bank is a JSON array of fixed-shape rows:
//!
//! ```text
//! [expression, reading, definition tags, rules, score, glossary, sequence, term tags]
//! ```
//!
//! Rows are parsed into [`TermEntry`] values. The `rules` column carries
//! whitespace-separated word-type tags that feed the deinflection taxonomy
//! via [`TermEntry::word_types`]. No lookup index is built here; this module
//! stops at producing tagged entries.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::inflection::WordType;

/// One row of a term bank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTermRow", into = "RawTermRow")]
pub struct TermEntry {
    /// The headword.
    pub expression: String,
    /// Reading in kana; empty when identical to the expression.
    pub reading: String,
    /// Space-separated definition tags, if any.
    pub definition_tags: Option<String>,
    /// Space-separated word-type tags (the "rules" column).
    pub rules: String,
    /// Popularity score used for ordering results.
    pub score: i64,
    /// Glossary content; its shape varies by dictionary, so it is kept as
    /// raw JSON.
    pub glossary: Vec<Value>,
    /// Sequence number grouping related entries.
    pub sequence: i64,
    /// Space-separated term tags.
    pub term_tags: String,
}

impl TermEntry {
    /// Resolve the `rules` column to word types.
    ///
    /// Tags the taxonomy does not know are silently dropped; term banks
    /// carry tags for many grammars and only the conjugation-class tags
    /// matter here.
    ///
    /// # Examples
    ///
    /// ```
    /// use jibiki::dictionary::TermEntry;
    /// use jibiki::inflection::WordType;
    ///
    /// let row = r#"["食べる", "たべる", "", "v1", 100, ["to eat"], 1, ""]"#;
    /// let entry: TermEntry = serde_json::from_str(row).unwrap();
    ///
    /// assert_eq!(entry.word_types(), [WordType::Ichidan]);
    /// ```
    pub fn word_types(&self) -> Vec<WordType> {
        self.rules
            .split_whitespace()
            .filter_map(WordType::from_tag)
            .collect()
    }
}

/// The on-disk row shape. Term banks store rows as plain arrays, so
/// (de)serialization goes through this tuple struct.
#[derive(Clone, Serialize, Deserialize)]
struct RawTermRow(
    String,
    String,
    Option<String>,
    String,
    i64,
    Vec<Value>,
    i64,
    String,
);

impl From<RawTermRow> for TermEntry {
    fn from(row: RawTermRow) -> Self {
        TermEntry {
            expression: row.0,
            reading: row.1,
            definition_tags: row.2,
            rules: row.3,
            score: row.4,
            glossary: row.5,
            sequence: row.6,
            term_tags: row.7,
        }
    }
}

impl From<TermEntry> for RawTermRow {
    fn from(entry: TermEntry) -> Self {
        RawTermRow(
            entry.expression,
            entry.reading,
            entry.definition_tags,
            entry.rules,
            entry.score,
            entry.glossary,
            entry.sequence,
            entry.term_tags,
        )
    }
}

/// Load one term-bank file.
pub fn load_term_bank<P: AsRef<Path>>(path: P) -> Result<Vec<TermEntry>> {
    let file = File::open(path.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Load every `term_bank_N.json` in a dictionary directory, concatenated in
/// numeric order. Files not matching the naming scheme are ignored.
pub fn load_term_banks<P: AsRef<Path>>(dir: P) -> Result<Vec<TermEntry>> {
    let mut banks: Vec<(u32, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(number) = name
            .strip_prefix("term_bank_")
            .and_then(|rest| rest.strip_suffix(".json"))
            .and_then(|number| number.parse::<u32>().ok())
        else {
            continue;
        };
        banks.push((number, entry.path()));
    }
    banks.sort_by_key(|(number, _)| *number);

    let mut terms = Vec::new();
    for (_, path) in banks {
        terms.extend(load_term_bank(&path)?);
    }
    Ok(terms)
}
