#[derive(Debug, thiserror::Error)]
pub enum VoucherError {
    /// The uploaded file is not a readable spreadsheet, or failed the
    /// extension check before parsing.
    #[error("failed to parse spreadsheet: {0}")]
    Parse(String),

    /// Rendering, PDF conversion, or archive construction failed. The whole
    /// batch is discarded; no partial archive is ever produced.
    #[error("voucher generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
