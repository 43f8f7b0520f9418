//! Zip extraction for dictionary content.

use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{JibikiError, Result};

/// Extract a dictionary archive into `target_dir`, replacing its content.
///
/// The target directory is created if missing and cleared before
/// extraction, since an update replaces the installed dictionary wholesale.
/// Entries whose resolved path would escape the target directory are
/// rejected, and every file's content is verified against the CRC32 the
/// archive declares for it.
pub fn extract_archive<R: Read + Seek>(reader: R, target_dir: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(reader)?;

    fs::create_dir_all(target_dir)?;
    clear_dir(target_dir)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(JibikiError::archive(format!(
                "path traversal in archive entry '{}'",
                entry.name()
            )));
        };
        let path = target_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&path)?;
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = Vec::new();
        // The entry reader checks the declared CRC32 once it reaches end of
        // stream and reports a mismatch as InvalidData.
        let intact = match entry.read_to_end(&mut content) {
            Ok(_) => crc32fast::hash(&content) == entry.crc32(),
            Err(error) if error.kind() == io::ErrorKind::InvalidData => false,
            Err(error) => return Err(error.into()),
        };
        if !intact {
            return Err(JibikiError::archive(format!(
                "invalid checksum for file {}",
                entry.name()
            )));
        }

        File::create(&path)?.write_all(&content)?;
    }

    Ok(())
}

fn clear_dir(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
