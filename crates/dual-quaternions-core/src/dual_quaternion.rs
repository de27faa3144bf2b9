//! Dual quaternions for rigid transformations.
//!
//! A dual quaternion `real + ε·dual` carries a rotation in its (unit) real part
//! and a translation, relative to that rotation, in its dual part. Products of
//! dual quaternions compose rigid transforms the same way products of
//! homogeneous matrices do.

use std::fmt;

use glam::{DMat4, DQuat, DVec3};

use crate::error::{DualQuaternionError, Result};
use crate::operand::Operand;
use crate::quaternion::QuaternionExt;

/// Default tolerance for [`DualQuaternion::approx_eq`].
pub const DEFAULT_DELTA: f64 = 1e-8;

const ZERO: DQuat = DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0);

/// A rotation and translation expressed as a pair of quaternions.
///
/// The real part is scaled to unit norm whenever a value is constructed; the
/// dual part is kept as given. All operations return new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualQuaternion {
    /// Rotation part, unit norm.
    real: DQuat,
    /// Translation-encoding part.
    dual: DQuat,
}

impl DualQuaternion {
    /// Creates a dual quaternion, normalizing `real` to unit norm.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuaternionError::DomainError`] if `real` has zero or
    /// non-finite norm.
    pub fn new(real: DQuat, dual: DQuat) -> Result<Self> {
        Ok(Self {
            real: real.unit()?,
            dual,
        })
    }

    /// Builds a value whose real part is known to be non-zero.
    fn from_nonzero(real: DQuat, dual: DQuat) -> Self {
        Self {
            real: real.normalize(),
            dual,
        }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            real: DQuat::IDENTITY,
            dual: ZERO,
        }
    }

    /// A pure translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            real: DQuat::IDENTITY,
            dual: DQuat::from_translation(translation),
        }
    }

    /// A rotation followed by a translation.
    ///
    /// The dual part is `from_translation(translation) * rotation`, so
    /// [`translation`](Self::translation) returns `translation` unchanged.
    pub fn from_rotation_translation(rotation: DQuat, translation: DVec3) -> Result<Self> {
        let real = rotation.unit()?;
        Ok(Self {
            real,
            dual: DQuat::from_translation(translation) * real,
        })
    }

    /// Embeds a point as `1 + ε(0, p)` for use in a sandwich product.
    pub fn from_point(point: DVec3) -> Self {
        Self {
            real: DQuat::IDENTITY,
            dual: DQuat::from_xyzw(point.x, point.y, point.z, 0.0),
        }
    }

    /// Returns the rotation part.
    pub fn real(&self) -> DQuat {
        self.real
    }

    /// Returns the translation-encoding part.
    pub fn dual(&self) -> DQuat {
        self.dual
    }

    /// Dot product of the real parts. The dual parts do not contribute.
    pub fn dot(&self, other: &Self) -> f64 {
        self.real.dot(other.real)
    }

    /// Multiplies by a scalar or another dual quaternion.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuaternionError::InvalidOperandType`] for operands other
    /// than scalars and dual quaternions, and
    /// [`DualQuaternionError::DomainError`] when scaling by zero.
    pub fn multiply(&self, rhs: impl Into<Operand>) -> Result<Self> {
        match rhs.into() {
            Operand::Scalar(factor) => self.scale(factor),
            Operand::DualQuaternion(other) => Ok(self.compose(&other)),
            operand @ Operand::Quaternion(_) => {
                log::warn!("rejected multiplication of a dual quaternion by {}", operand.kind());
                Err(DualQuaternionError::InvalidOperandType(operand.kind()))
            }
        }
    }

    /// Scales both parts by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuaternionError::DomainError`] if `factor` is zero or not
    /// finite.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        Self::new(self.real * factor, self.dual * factor)
    }

    /// Dual-number product `(a + εb)(c + εd) = ac + ε(bc + ad)`.
    ///
    /// Quaternion products keep their operand order: the dual part is
    /// `self.dual * other.real + self.real * other.dual`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::from_nonzero(
            self.real * other.real,
            self.dual * other.real + self.real * other.dual,
        )
    }

    /// Divides both parts by the squared norm of the real part.
    ///
    /// The real part of a constructed value already has unit norm, so this
    /// only removes accumulated rounding.
    pub fn normalize(&self) -> Self {
        let norm = self.real.dot(self.real);
        log::trace!("normalizing dual quaternion by {norm}");
        Self::from_nonzero(self.real / norm, self.dual / norm)
    }

    /// Componentwise sum of the real and dual parts.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuaternionError::DomainError`] if the real parts cancel.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::new(self.real + other.real, self.dual + other.dual)
    }

    /// Conjugates both parts: `(real*, dual*)`.
    ///
    /// Reverses products: `(a * b).conjugate_reverse() ==
    /// b.conjugate_reverse() * a.conjugate_reverse()`.
    pub fn conjugate_reverse(&self) -> Self {
        Self::from_nonzero(self.real.conjugate(), self.dual.conjugate())
    }

    /// Conjugates both parts and negates the dual part: `(real*, -dual*)`.
    ///
    /// `q * p * q.conjugate_transform()` applies `q` to the point `p`.
    pub fn conjugate_transform(&self) -> Self {
        Self::from_nonzero(self.real.conjugate(), -self.dual.conjugate())
    }

    /// Negates the dual part only: `(real, -dual)`.
    pub fn conjugate_dual(&self) -> Self {
        Self::from_nonzero(self.real, -self.dual)
    }

    /// Returns the translation encoded in the dual part,
    /// the vector part of `2 * dual * real*`.
    pub fn translation(&self) -> DVec3 {
        ((self.dual * 2.0) * self.real.conjugate()).xyz()
    }

    /// Returns the 4x4 homogeneous transformation matrix.
    pub fn transformation_matrix(&self) -> DMat4 {
        let rotation = self.real.rotation_matrix();
        DMat4::from_cols(
            rotation.x_axis.extend(0.0),
            rotation.y_axis.extend(0.0),
            rotation.z_axis.extend(0.0),
            self.translation().extend(1.0),
        )
    }

    /// Applies this transform to a point with the sandwich product.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        (*self * Self::from_point(point) * self.conjugate_transform())
            .dual
            .xyz()
    }

    /// Compares all eight components with an absolute tolerance.
    pub fn almost_equal(&self, other: &Self, delta: f64) -> bool {
        self.real.almost_equal(&other.real, delta) && self.dual.almost_equal(&other.dual, delta)
    }

    /// [`almost_equal`](Self::almost_equal) with [`DEFAULT_DELTA`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.almost_equal(other, DEFAULT_DELTA)
    }
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real:\t{}\t\tDual:\t{}", self.real, self.dual)
    }
}

impl std::ops::Mul for DualQuaternion {
    type Output = DualQuaternion;

    fn mul(self, rhs: DualQuaternion) -> DualQuaternion {
        self.compose(&rhs)
    }
}

impl std::ops::Mul<f64> for DualQuaternion {
    type Output = Result<DualQuaternion>;

    fn mul(self, rhs: f64) -> Result<DualQuaternion> {
        self.scale(rhs)
    }
}

impl std::ops::Add for DualQuaternion {
    type Output = Result<DualQuaternion>;

    fn add(self, rhs: DualQuaternion) -> Result<DualQuaternion> {
        DualQuaternion::add(&self, &rhs)
    }
}
