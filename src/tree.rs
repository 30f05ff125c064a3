//! Tree sanitization and subtree selection
//!
//! Two depth-first walks over the extraction scratch space. Sanitization runs
//! to completion before selection so a `.git` directory nested inside an
//! allow-listed directory can never leak into the copied result.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Reserved version-control metadata directory name
pub const VCS_METADATA_DIR: &str = ".git";

/// Delete every directory named `.git` anywhere under `root`
///
/// Matched directories are removed recursively in place; all other
/// directories are recursed into.
pub fn sanitize_tree(root: &Path) -> Result<()> {
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_dir() {
            continue;
        }

        if entry.file_name() == VCS_METADATA_DIR {
            debug!(path = %path.display(), "removing VCS metadata directory");
            fs::remove_dir_all(&path)?;
        } else {
            sanitize_tree(&path)?;
        }
    }
    Ok(())
}

/// Copy allow-listed directories found under `root` into `dest_root`
///
/// A directory whose name matches an allow-list entry is copied whole to
/// `dest_root/<name>` and not searched for further matches; non-matching
/// directories are recursed into. An empty allow-list finds nothing and
/// copies nothing.
pub fn select_subtrees(root: &Path, allow_list: &[String], dest_root: &Path) -> Result<()> {
    if allow_list.is_empty() {
        trace!("allow-list is empty, selection is a no-op");
        return Ok(());
    }

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let matches = name
            .to_str()
            .is_some_and(|n| allow_list.iter().any(|allowed| allowed == n));

        if matches {
            let target = dest_root.join(&name);
            debug!(
                source = %path.display(),
                target = %target.display(),
                "copying allow-listed directory"
            );
            copy_dir_recursive(&path, &target)?;
        } else {
            select_subtrees(&path, allow_list, dest_root)?;
        }
    }
    Ok(())
}

/// Copy `src` into `dest`, creating directories as needed
///
/// Files are copied byte-for-byte; an existing destination file at the same
/// relative path is overwritten (plain copy, not merge-aware).
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
