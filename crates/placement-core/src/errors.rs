//! Cross-cutting error types.
//!
//! Transport errors live in `placement-store` and `placement-auth`. The CLI
//! converges everything into `anyhow::Error` at the binary edge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A value did not match any known variant of an enum.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
