use std::{fs, io, path::Path};

use super::{ResolveError, RunMode};

/// Files a statistics run leaves in the result folder; plotting from an
/// existing folder needs both
pub const RESULT_FILES: [&str; 2] = ["dnacomp.txt", "misincorporation.txt"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FolderState {
    Existing,
    Created,
}

/// Path exists and is not a directory
pub(crate) fn is_file_like(p: &Path) -> bool {
    p.exists() && !p.is_dir()
}

/// Make sure the output folder is usable for `mode`, creating it if needed
pub fn prepare_output_folder(folder: &Path, mode: RunMode) -> Result<FolderState, ResolveError> {
    if folder.is_dir() {
        match mode {
            RunMode::Full => warn!(
                "Folder {} already exists; content may be overwritten",
                folder.display()
            ),
            RunMode::PlotOnly => check_result_folder(folder)?,
            _ => debug!("Using existing result folder {}", folder.display()),
        }
        return Ok(FolderState::Existing);
    }

    if folder.exists() {
        return Err(ResolveError::usage(format!(
            "Output folder {} exists but is not a directory",
            folder.display()
        )));
    }

    create_folder(folder).map_err(|e| {
        ResolveError::usage(format!(
            "Could not create output folder {}: {}",
            folder.display(),
            e
        ))
    })?;
    debug!("Created output folder {}", folder.display());

    match mode.flag() {
        Some(flag) if mode.requires_result_folder() => Err(ResolveError::usage(format!(
            "Folder {} does not exist while {} was used",
            folder.display(),
            flag
        ))),
        _ => Ok(FolderState::Created),
    }
}

fn check_result_folder(folder: &Path) -> Result<(), ResolveError> {
    for name in RESULT_FILES {
        if !is_file_like(&folder.join(name)) {
            return Err(ResolveError::usage(format!(
                "Folder {} is not a valid result folder (missing {})",
                folder.display(),
                name
            )));
        }
    }
    Ok(())
}

#[cfg(unix)]
fn create_folder(folder: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o750)
        .create(folder)
}

#[cfg(not(unix))]
fn create_folder(folder: &Path) -> io::Result<()> {
    fs::create_dir_all(folder)
}
