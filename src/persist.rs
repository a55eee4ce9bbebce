//! Clipping persistence under the vault root.

use std::path::{Path, PathBuf};

use crate::error::{ClipError, Result};

/// Create the target directory (idempotent) and write the document.
///
/// The write is a full overwrite, not an atomic rename; a crash mid-write
/// can leave a partial file. Collisions on the derived name also overwrite.
pub async fn write_clipping(
    vault: &Path,
    folder: Option<&str>,
    file_stem: &str,
    markdown: &str,
) -> Result<PathBuf> {
    let dir = match folder {
        Some(sub) if !sub.trim().is_empty() => vault.join(sub),
        _ => vault.to_path_buf(),
    };

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| ClipError::Persist {
            path: dir.clone(),
            source,
        })?;

    let path = dir.join(format!("{}.md", file_stem));
    tokio::fs::write(&path, markdown)
        .await
        .map_err(|source| ClipError::Persist {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
