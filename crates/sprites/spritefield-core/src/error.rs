//! Recoverable error taxonomy.
//!
//! Index-range violations are contract violations and panic through checked
//! indexing instead of appearing here.

use thiserror::Error;

/// Errors a caller can legitimately hit at runtime.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sprite capacity exhausted ({capacity} slots)")]
    CapacityExhausted { capacity: u32 },
    #[error("no image atlas installed")]
    AtlasNotInstalled,
}
