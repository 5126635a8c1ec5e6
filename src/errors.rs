use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No text provided")]
    EmptyText,
    #[error("Text too short for summarization")]
    TextTooShort,
    #[error("Invalid summarization style")]
    InvalidStyle,
    #[error("Invalid percentage")]
    InvalidPercentage,
    #[error("lexical weighting failed: {0}")]
    Lexical(#[from] LexicalError),
    #[error("other: {0}")]
    Other(String),
}

impl SummarizeError {
    /// Caller mistakes that are reported back verbatim with a 400.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SummarizeError::EmptyText
                | SummarizeError::TextTooShort
                | SummarizeError::InvalidStyle
                | SummarizeError::InvalidPercentage
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No file uploaded")]
    NoFile,
    #[error("No file selected")]
    NoFileName,
    #[error("Only PDF and DOCX files are allowed")]
    UnsupportedType,
    #[error("No text could be extracted from the file")]
    NoText,
    #[error("Error reading PDF: {0}")]
    Pdf(String),
    #[error("Error reading DOCX: {0}")]
    Docx(String),
    #[error("io error: {0}")]
    Io(String),
}

impl ExtractError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExtractError::NoFile
                | ExtractError::NoFileName
                | ExtractError::UnsupportedType
                | ExtractError::NoText
        )
    }
}
