//! Error types for dual-quaternions.

use thiserror::Error;

/// The main error type for dual quaternion operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DualQuaternionError {
    /// A quaternion with zero (or non-finite) norm cannot be scaled to unit length.
    #[error("cannot normalize a quaternion with squared norm {norm_squared}")]
    DomainError { norm_squared: f64 },

    /// The right-hand operand of a multiplication is not supported.
    #[error("cannot multiply a dual quaternion by {0}: only dual quaternions and scalars are supported")]
    InvalidOperandType(&'static str),
}

/// A specialized Result type for dual quaternion operations.
pub type Result<T> = std::result::Result<T, DualQuaternionError>;
