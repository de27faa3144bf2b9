//! dual-quaternions: rigid transformations as dual quaternions.
//!
//! A [`DualQuaternion`] stores a rotation in a unit "real" quaternion and the
//! translation in a "dual" quaternion. Multiplying two of them composes the
//! transforms, and the result can be turned back into a translation vector or
//! a homogeneous 4x4 matrix.
//!
//! # Quick Start
//!
//! ```
//! use dual_quaternions::*;
//!
//! fn main() -> Result<()> {
//!     // Rotate a quarter turn about Z, then move one unit along X
//!     let turn = DualQuaternion::from_rotation_translation(
//!         DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2),
//!         DVec3::new(1.0, 0.0, 0.0),
//!     )?;
//!     let lift = DualQuaternion::from_translation(DVec3::new(0.0, 0.0, 2.0));
//!
//!     // Lift first, then turn
//!     let combined = turn * lift;
//!     assert!((combined.translation() - DVec3::new(1.0, 0.0, 2.0)).length() < 1e-12);
//!
//!     let matrix = combined.transformation_matrix();
//!     assert_eq!(matrix.row(3), DVec4::new(0.0, 0.0, 0.0, 1.0));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Operations that pass through the constructor fail with
//! [`DualQuaternionError::DomainError`] when the real part would have zero
//! norm, e.g. scaling by zero or adding a value to its negation.
//! [`DualQuaternion::multiply`] rejects plain quaternions with
//! [`DualQuaternionError::InvalidOperandType`].

// Re-export core types
pub use dual_quaternions_core::{
    dual_quaternion::{DualQuaternion, DEFAULT_DELTA},
    error::{DualQuaternionError, Result},
    operand::Operand,
    quaternion::QuaternionExt,
};

// Re-export glam types used in the public API
pub use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};
