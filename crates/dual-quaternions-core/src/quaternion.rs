//! Quaternion capabilities needed by the dual quaternion algebra.
//!
//! The quaternion arithmetic itself (Hamilton product, addition, scalar
//! scaling, dot product, conjugate) comes from [`glam::DQuat`]. This module
//! adds the few operations glam does not expose in the required form.

use glam::{DMat3, DQuat, DVec3};

use crate::error::{DualQuaternionError, Result};

/// Extra operations on [`DQuat`] used by [`DualQuaternion`](crate::DualQuaternion).
pub trait QuaternionExt: Sized {
    /// Creates the translation-encoding quaternion `0.5 * (0, tx, ty, tz)`.
    fn from_translation(translation: DVec3) -> Self;

    /// Scales the quaternion to unit norm.
    ///
    /// Fails with [`DualQuaternionError::DomainError`] when the norm is zero or
    /// not finite.
    fn unit(self) -> Result<Self>;

    /// Returns whether every component differs from `other` by at most `delta`.
    fn almost_equal(&self, other: &Self, delta: f64) -> bool;

    /// Returns the 3x3 rotation matrix of this (unit) quaternion.
    fn rotation_matrix(&self) -> DMat3;
}

impl QuaternionExt for DQuat {
    fn from_translation(translation: DVec3) -> Self {
        let half = translation * 0.5;
        DQuat::from_xyzw(half.x, half.y, half.z, 0.0)
    }

    fn unit(self) -> Result<Self> {
        let norm_squared = self.length_squared();
        if !norm_squared.is_finite() || norm_squared <= 0.0 {
            log::warn!("refusing to normalize quaternion {} (squared norm {})", self, norm_squared);
            return Err(DualQuaternionError::DomainError { norm_squared });
        }
        Ok(self / norm_squared.sqrt())
    }

    fn almost_equal(&self, other: &Self, delta: f64) -> bool {
        self.abs_diff_eq(*other, delta)
    }

    fn rotation_matrix(&self) -> DMat3 {
        DMat3::from_quat(*self)
    }
}
