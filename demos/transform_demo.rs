//! Dual quaternion demonstration: a three-link planar arm.
//!
//! This demo shows:
//! - Building joint transforms from rotations and link offsets
//! - Composing them into a single dual quaternion
//! - Extracting the end-effector translation and homogeneous matrix
//! - Moving points with the sandwich product
//!
//! Run with: `RUST_LOG=info cargo run --example transform_demo`

use dual_quaternions::{DQuat, DVec3, DualQuaternion, Result};

/// Joint angles (radians) and link lengths of the arm.
const JOINTS: [(f64, f64); 3] = [(0.4, 1.0), (-0.9, 0.75), (0.3, 0.5)];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut arm = DualQuaternion::identity();
    for (i, &(angle, length)) in JOINTS.iter().enumerate() {
        let joint = DualQuaternion::from_rotation_translation(DQuat::from_rotation_z(angle), DVec3::ZERO)?;
        let link = DualQuaternion::from_translation(DVec3::new(length, 0.0, 0.0));
        arm = arm * joint * link;
        log::info!("joint {} at {:.4}", i + 1, arm.translation());
    }

    log::info!("end effector: {arm}");
    log::info!("transformation matrix: {:.4}", arm.transformation_matrix());

    let tool_tip = DVec3::new(0.1, 0.0, 0.0);
    let by_sandwich = arm.transform_point(tool_tip);
    let by_matrix = arm.transformation_matrix().transform_point3(tool_tip);
    log::info!("tool tip via sandwich product: {by_sandwich:.4}");
    log::info!("tool tip via matrix:           {by_matrix:.4}");

    let total_angle: f64 = JOINTS.iter().map(|(angle, _)| angle).sum();
    log::info!("heading {:.4} rad over {} joints", total_angle, JOINTS.len());

    Ok(())
}
