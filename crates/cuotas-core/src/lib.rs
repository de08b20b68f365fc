pub mod config;
pub mod currency;
pub mod error;
pub mod plans;
pub mod types;

pub use error::CuotasError;
pub use types::*;

/// Standard result type for all cuotas operations
pub type CuotasResult<T> = Result<T, CuotasError>;
