//! Dictionary metadata: the `index.json` model.
//!
//! Yomitan-format dictionaries ship as a directory (or zip archive) whose
//! `index.json` describes the dictionary and, for updatable dictionaries,
//! where to find the publisher's current index and archive. Field names on
//! the wire are camelCase; unknown fields are ignored so newer index files
//! keep loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File name of the metadata file inside a dictionary directory.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Metadata of a dictionary, as stored in its `index.json`.
///
/// `title`, `revision` and `format` are required; everything else is
/// optional or defaulted, matching the files real dictionaries publish.
///
/// # Examples
///
/// ```
/// use jibiki::dictionary::DictionaryMetadata;
///
/// let metadata = DictionaryMetadata::from_json_str(
///     r#"{"title": "Jitendex", "revision": "2025.2.1", "format": 3}"#,
/// )
/// .unwrap();
///
/// assert_eq!(metadata.title, "Jitendex");
/// assert_eq!(metadata.revision, "2025.2.1");
/// assert!(!metadata.sequenced);
/// assert!(metadata.download_url.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryMetadata {
    /// Display name of the dictionary.
    pub title: String,
    /// Dotted numeric revision string, e.g. `"1.2.3"`.
    pub revision: String,
    /// Yomitan schema format version.
    pub format: u32,
    /// Whether entries sharing a sequence number belong together.
    #[serde(default)]
    pub sequenced: bool,
    /// Whether the publisher supports the update protocol.
    #[serde(default)]
    pub is_updatable: bool,
    /// Author or maintainer.
    pub author: Option<String>,
    /// URL of the publisher's current `index.json`, polled for updates.
    pub index_url: Option<String>,
    /// URL of the publisher's current archive.
    pub download_url: Option<String>,
    /// Homepage of the dictionary.
    pub url: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Attribution or license text.
    pub attribution: Option<String>,
    /// BCP-47 language of the headwords.
    pub source_language: Option<String>,
    /// BCP-47 language of the glossaries.
    pub target_language: Option<String>,
    /// How frequency dictionaries rank terms (`"occurrence-based"` or
    /// `"rank-based"`).
    pub frequency_mode: Option<String>,
}

impl DictionaryMetadata {
    /// Parse metadata from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse metadata from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load metadata from an `index.json` file, or from a dictionary
    /// directory containing one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let index_path = if path.is_dir() {
            path.join(INDEX_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        let file = File::open(index_path)?;
        Self::from_reader(BufReader::new(file))
    }
}
