//! Archive extraction
//!
//! Materializes a zip archive under a destination directory, preserving
//! relative paths and the directory/file distinction.

use crate::error::Result;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

/// Extract `archive_path` into `dest`
///
/// Directory entries are created (with parents) and their content discarded;
/// file entries get their parent directories created before the bytes are
/// written. Returns only after every entry has been written, so callers can
/// treat a successful return as "the tree is fully on disk". Entries whose
/// names escape `dest` are skipped with a warning.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    fs::create_dir_all(dest)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        let Some(relative) = entry.enclosed_name() else {
            warn!(name = entry.name(), "skipping entry with unsafe path");
            continue;
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            io::copy(&mut entry, &mut out)?;
        }
    }

    debug!(
        archive = %archive_path.display(),
        dest = %dest.display(),
        "archive extracted"
    );
    Ok(())
}
