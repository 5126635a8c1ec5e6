use std::io::Write;
use std::path::Path;

use crate::errors::ExtractError;

mod docx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Kind from the lowercase extension after the last `.`; anything else is refused.
    pub fn from_file_name(name: &str) -> Result<Self, ExtractError> {
        let (_, ext) = name.rsplit_once('.').ok_or(ExtractError::UnsupportedType)?;
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(ExtractError::UnsupportedType),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        match self {
            Self::Pdf => extract_pdf(path),
            Self::Docx => docx::extract_docx(path),
        }
    }
}

/// Stages an uploaded document in `staging_dir`, extracts its raw text and
/// removes the staged copy whatever the outcome.
pub fn extract_upload(
    staging_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<String, ExtractError> {
    if file_name.is_empty() {
        return Err(ExtractError::NoFileName);
    }
    let kind = DocumentKind::from_file_name(file_name)?;

    let mut staged = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&format!(".{}", kind.extension()))
        .tempfile_in(staging_dir)
        .map_err(|e| ExtractError::Io(format!("stage upload: {e}")))?;

    let result = staged
        .write_all(bytes)
        .and_then(|_| staged.flush())
        .map_err(|e| ExtractError::Io(format!("write upload: {e}")))
        .and_then(|_| kind.extract(staged.path()));

    let staged_path = staged.path().to_path_buf();
    if let Err(e) = staged.close() {
        tracing::debug!(error=%e, path=%staged_path.display(), "failed to remove staged upload");
    }

    let text = result?;
    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    tracing::info!(kind = kind.extension(), bytes = bytes.len(), chars = text.len(), "document extracted");
    Ok(text)
}

fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning an error
    match std::panic::catch_unwind(|| pdf_extract::extract_text(path)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf("malformed document".into())),
    }
}

#[cfg(test)]
pub fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    docx::tests::build_docx(paragraphs)
}
