//! Error types raised while configuring the workability scorer.
#![forbid(unsafe_code)]

use thiserror::Error;
use workspot_core::FactorKind;

/// Errors raised when factor weights are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("weight for {factor} must be finite, got {value}")]
    NonFinite {
        /// Factor carrying the bad weight.
        factor: FactorKind,
        /// Rejected value.
        value: f32,
    },
    /// A weight was below zero.
    #[error("weight for {factor} must not be negative, got {value}")]
    Negative {
        /// Factor carrying the bad weight.
        factor: FactorKind,
        /// Rejected value.
        value: f32,
    },
    /// Every weight was zero, leaving nothing to normalise against.
    #[error("factor weights must sum to a positive value")]
    ZeroTotal,
}
