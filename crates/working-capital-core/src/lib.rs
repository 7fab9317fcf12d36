pub mod assumptions;
pub mod error;
pub mod types;

#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "advisory")]
pub mod advisory;

#[cfg(all(feature = "projection", feature = "advisory"))]
pub mod analysis;

#[cfg(feature = "demo_models")]
pub mod demo_models;

pub use assumptions::*;
pub use error::WorkingCapitalError;
pub use types::*;

/// Standard result type for all working-capital operations
pub type WorkingCapitalResult<T> = Result<T, WorkingCapitalError>;
