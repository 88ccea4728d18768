/// Failures inside an export encoder.
///
/// Distinct from validation and store errors: an encoding failure must
/// never disturb the caller's already-loaded record set.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Spreadsheet encoding failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF encoding failed: {0}")]
    Document(String),
}
