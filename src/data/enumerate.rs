use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::error::PipelineError;

/// List every directory nested at any depth under `base`, as paths relative
/// to `base`, lazily and in filesystem traversal order.
///
/// The base itself and plain files are not yielded. Errors met during the
/// walk (permission denied, vanished entries) are yielded as items so the
/// caller decides whether to stop or carry on.
pub fn list_run_groups(
    base: &Path,
) -> Result<impl Iterator<Item = Result<PathBuf, PipelineError>>, PipelineError> {
    std::fs::metadata(base).map_err(|e| PipelineError::io(base, e))?;

    let root = base.to_path_buf();
    let walker = WalkDir::new(base).min_depth(1).into_iter();

    Ok(walker.filter_map(move |entry| match entry {
        Ok(entry) if is_group_dir(&entry) => Some(Ok(entry
            .path()
            .strip_prefix(&root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| entry.path().to_path_buf()))),
        Ok(_) => None,
        Err(source) => Some(Err(PipelineError::Walk {
            base: root.clone(),
            source,
        })),
    }))
}

/// Symlinks to directories are listed but not descended into.
fn is_group_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Collect [`list_run_groups`] into a sorted list, stopping at the first
/// filesystem error.
pub fn sorted_run_groups(base: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut groups = list_run_groups(base)?.collect::<Result<Vec<_>, _>>()?;
    groups.sort();
    Ok(groups)
}
