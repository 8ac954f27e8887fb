use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load a plain-text file verbatim.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    LoadedDocument::new(text, format!("txt:{}", path.display()))
}
