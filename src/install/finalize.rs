use anyhow::anyhow;
use log::{debug, warn};
use std::path::PathBuf;

use super::Layout;
use crate::error::{InstallError, Result};
use crate::runtime::Runtime;

/// Rename the directory produced by extraction to the canonical name.
///
/// Candidates are sorted by name so the pick does not depend on listing
/// order. Returns the final install directory.
#[tracing::instrument(skip(runtime, layout))]
pub fn rename_extracted_dir<R: Runtime>(runtime: &R, layout: &Layout) -> Result<PathBuf> {
    let mut dirs: Vec<PathBuf> = runtime
        .read_dir(&layout.bin_dir)
        .map_err(InstallError::filesystem)?
        .into_iter()
        .filter(|path| runtime.is_dir(path))
        .collect();
    dirs.sort();

    let Some(extracted) = dirs.first() else {
        return Err(InstallError::StructuralAssumptionViolated {
            dir: layout.bin_dir.clone(),
        });
    };

    if dirs.len() > 1 {
        warn!(
            "Found {} directories in {:?}, using {:?}",
            dirs.len(),
            layout.bin_dir,
            extracted
        );
    }

    if runtime.exists(&layout.install_dir) {
        return Err(InstallError::filesystem(anyhow!(
            "Failed to rename {:?}: {:?} already exists",
            extracted,
            layout.install_dir
        )));
    }

    debug!("Renaming {:?} to {:?}", extracted, layout.install_dir);
    runtime
        .rename(extracted, &layout.install_dir)
        .map_err(InstallError::filesystem)?;

    Ok(layout.install_dir.clone())
}

/// Delete the downloaded archive.
#[tracing::instrument(skip(runtime, layout))]
pub fn remove_archive<R: Runtime>(runtime: &R, layout: &Layout) -> Result<()> {
    runtime
        .remove_file(&layout.archive)
        .map_err(InstallError::filesystem)
}
