use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuotasError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}
