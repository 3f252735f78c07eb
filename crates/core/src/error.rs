//! Purchase error model.
//!
//! Keep this focused on deterministic, business failures classified inside
//! the transaction engine. Transport concerns (status codes) belong to the
//! API layer.

use chrono::Duration;
use thiserror::Error;

/// Result type used across the domain layer.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Classified failure of a purchase attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// Client input malformed (missing payload, non-positive quantity).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The requested item does not exist.
    #[error("product not found")]
    NotFound,

    /// The per-item cooldown window is still active. Transient; the caller
    /// may retry after the advertised wait.
    #[error("please wait {} seconds before purchasing this product again", remaining_secs(.retry_after))]
    RateLimited { retry_after: Duration },

    /// Not enough stock to satisfy the requested quantity. Stock unchanged.
    #[error("insufficient stock: only {remaining} left")]
    OutOfStock { remaining: u32 },

    /// Persistence/append failure; surfaced generically.
    #[error("internal failure: {0}")]
    Internal(String),
}

impl PurchaseError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

fn remaining_secs(d: &Duration) -> i64 {
    // Advertise whole seconds, rounding up so "retry in 0s" never lies.
    let ms = d.num_milliseconds().max(0);
    (ms + 999) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_rounds_wait_up() {
        let err = PurchaseError::RateLimited {
            retry_after: Duration::milliseconds(4200),
        };
        assert_eq!(
            err.to_string(),
            "please wait 5 seconds before purchasing this product again"
        );
    }

    #[test]
    fn out_of_stock_reports_residual() {
        let err = PurchaseError::OutOfStock { remaining: 1 };
        assert_eq!(err.to_string(), "insufficient stock: only 1 left");
    }
}
