//! Right-hand operands accepted by [`DualQuaternion::multiply`].

use glam::DQuat;

use crate::dual_quaternion::DualQuaternion;

/// A right-hand operand for dual quaternion multiplication.
///
/// Scalars scale both parts uniformly and dual quaternions compose. A plain
/// quaternion is representable so that callers can route arbitrary values
/// through [`DualQuaternion::multiply`], but it is rejected there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A real number.
    Scalar(f64),
    /// Another dual quaternion.
    DualQuaternion(DualQuaternion),
    /// A plain quaternion (not supported as a multiplication operand).
    Quaternion(DQuat),
}

impl Operand {
    /// Returns a short human-readable name of the operand's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "a scalar",
            Operand::DualQuaternion(_) => "a dual quaternion",
            Operand::Quaternion(_) => "a quaternion",
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<DualQuaternion> for Operand {
    fn from(value: DualQuaternion) -> Self {
        Operand::DualQuaternion(value)
    }
}

impl From<&DualQuaternion> for Operand {
    fn from(value: &DualQuaternion) -> Self {
        Operand::DualQuaternion(*value)
    }
}

impl From<DQuat> for Operand {
    fn from(value: DQuat) -> Self {
        Operand::Quaternion(value)
    }
}
