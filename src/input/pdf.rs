use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load text from PDF file using pdf-extract crate.
///
/// pdf-extract separates pages with whitespace already, so its output is the
/// concatenated document text.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let buffer = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    LoadedDocument::new(text, format!("pdf:{}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-garbage").unwrap();

        assert!(matches!(load(&path), Err(LoadError::PdfParse(_))));
    }

    #[test]
    fn test_pdf_parse_error() {
        let err = LoadError::PdfParse("Invalid PDF structure".to_string());
        assert!(matches!(err, LoadError::PdfParse(msg) if msg.contains("Invalid")));
    }
}
