//! Core algebra for dual-quaternions.
//!
//! This crate provides the fundamental types used throughout dual-quaternions:
//! - [`DualQuaternion`], a rigid transform stored as a unit real quaternion and a dual quaternion
//! - [`Operand`], the right-hand operands accepted by [`DualQuaternion::multiply`]
//! - [`QuaternionExt`], the quaternion operations layered over [`glam::DQuat`]
//! - Error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Value-returning algebra doesn't need must_use on every method
#![allow(clippy::must_use_candidate)]

pub mod dual_quaternion;
pub mod error;
pub mod operand;
pub mod quaternion;

pub use dual_quaternion::{DualQuaternion, DEFAULT_DELTA};
pub use error::{DualQuaternionError, Result};
pub use operand::Operand;
pub use quaternion::QuaternionExt;

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DQuat, DVec3};
