//! Error types.
//!
//! Every failure surfaces at construction time: [`crate::GaConfig::validate`]
//! rejects bad parameters before the engine ever runs, and
//! [`crate::Genotype::crossover`] rejects length-mismatched parents. There is
//! no recoverable failure path inside the evolutionary loop.

use thiserror::Error;

/// Errors raised by configuration validation and the genetic operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// A configuration parameter is out of its valid range.
    #[error("invalid {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending configuration field.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Crossover was attempted between genotypes of unequal bit length.
    ///
    /// Unreachable through the engine, which only ever crosses genotypes of
    /// the configured dimensionality, but the operator defends against
    /// direct misuse.
    #[error("cannot cross genotypes of different bit lengths ({left} vs {right})")]
    LengthMismatch {
        /// Bit length of the left parent.
        left: usize,
        /// Bit length of the right parent.
        right: usize,
    },
}

impl GaError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GaError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
