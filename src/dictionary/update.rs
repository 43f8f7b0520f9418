//! The dictionary update lifecycle.
//!
//! An updatable dictionary's metadata carries an `indexUrl` pointing at the
//! publisher's current `index.json` and a `downloadUrl` pointing at the
//! current archive. Checking for an update fetches the remote index and
//! compares revisions; applying one downloads the archive and replaces the
//! installed content.
//!
//! The revision decision itself ([`Dictionary::evaluate_remote_revision`])
//! is plain data logic with no I/O, so it is testable without a network.

use std::io::Cursor;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::archive::extract_archive;
use crate::dictionary::metadata::DictionaryMetadata;
use crate::dictionary::revision::Revision;
use crate::error::{JibikiError, Result};

/// Update availability of a dictionary.
///
/// Starts as [`Unknown`](UpdateState::Unknown). A successful
/// [`Dictionary::check_for_update`] moves it to
/// [`UpToDate`](UpdateState::UpToDate) or
/// [`UpdateAvailable`](UpdateState::UpdateAvailable), and a successful
/// [`Dictionary::update_into`] back to [`UpToDate`](UpdateState::UpToDate).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateState {
    /// No comparison against the publisher's index has happened yet.
    #[default]
    Unknown,
    /// The installed revision is current.
    UpToDate,
    /// The publisher advertises a newer revision.
    UpdateAvailable,
}

/// An installed dictionary together with its update state.
///
/// # Examples
///
/// ```
/// use jibiki::dictionary::{Dictionary, DictionaryMetadata, UpdateState};
///
/// let metadata = DictionaryMetadata::from_json_str(
///     r#"{"title": "Jitendex", "revision": "1.2.3", "format": 3}"#,
/// )
/// .unwrap();
/// let mut dictionary = Dictionary::new(metadata);
/// assert_eq!(dictionary.update_state(), UpdateState::Unknown);
///
/// let state = dictionary.evaluate_remote_revision("1.3.0").unwrap();
/// assert_eq!(state, UpdateState::UpdateAvailable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    metadata: DictionaryMetadata,
    update_state: UpdateState,
}

impl Dictionary {
    /// Wrap loaded metadata. The update state starts
    /// [`Unknown`](UpdateState::Unknown).
    pub fn new(metadata: DictionaryMetadata) -> Self {
        Dictionary {
            metadata,
            update_state: UpdateState::Unknown,
        }
    }

    /// Load a dictionary from its `index.json` file, or from a dictionary
    /// directory containing one.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Dictionary::new(DictionaryMetadata::from_path(path)?))
    }

    /// The dictionary's metadata.
    pub fn metadata(&self) -> &DictionaryMetadata {
        &self.metadata
    }

    /// The dictionary's title.
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// The installed revision string.
    pub fn revision(&self) -> &str {
        &self.metadata.revision
    }

    /// The current update state.
    pub fn update_state(&self) -> UpdateState {
        self.update_state
    }

    /// Compare the installed revision against a remote revision string and
    /// record the outcome.
    ///
    /// The remote is considered newer on the first dot-separated component
    /// that differs. Malformed revisions and component-count mismatches are
    /// errors and leave the state untouched.
    pub fn evaluate_remote_revision(&mut self, remote_revision: &str) -> Result<UpdateState> {
        let local: Revision = self.metadata.revision.parse()?;
        let remote: Revision = remote_revision.parse()?;
        self.update_state = if remote.newer_than(&local)? {
            UpdateState::UpdateAvailable
        } else {
            UpdateState::UpToDate
        };
        Ok(self.update_state)
    }

    /// Fetch the publisher's index and compare revisions.
    ///
    /// Without an `indexUrl` in the metadata there is nothing to compare
    /// against, so the state is returned untouched.
    pub fn check_for_update(&mut self) -> Result<UpdateState> {
        let Some(index_url) = self.metadata.index_url.as_deref() else {
            return Ok(self.update_state);
        };
        let body = fetch(index_url)?.text()?;
        let remote = DictionaryMetadata::from_json_str(&body)?;
        self.evaluate_remote_revision(&remote.revision)
    }

    /// Download the published archive and install it into `target_dir`,
    /// replacing any previous content.
    ///
    /// Does nothing unless an update is known to be available and the
    /// metadata carries a `downloadUrl`. On success the state becomes
    /// [`UpToDate`](UpdateState::UpToDate).
    pub fn update_into<P: AsRef<Path>>(&mut self, target_dir: P) -> Result<()> {
        if self.update_state != UpdateState::UpdateAvailable {
            return Ok(());
        }
        let Some(download_url) = self.metadata.download_url.as_deref() else {
            return Ok(());
        };
        let content = fetch(download_url)?.bytes()?;
        extract_archive(Cursor::new(content.as_ref()), target_dir.as_ref())?;
        self.update_state = UpdateState::UpToDate;
        Ok(())
    }
}

fn fetch(url: &str) -> Result<reqwest::blocking::Response> {
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(JibikiError::download(format!(
            "fetching '{url}' returned {}",
            response.status()
        )));
    }
    Ok(response)
}
