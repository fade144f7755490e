//! Node construction: one placement node per emitter.

use crate::error::Result;
use crate::types::{Node, Range};

use super::fields::Fields;
use super::RotationConvention;

/// Convert the three source angles (degrees) into `(yaw, pitch, roll)`
/// radians. Yaw comes from `RotateAboutUp`, pitch from `RotateAboutForward`
/// and roll from `RotateAboutCross`.
pub fn convert_angles(
    convention: RotationConvention,
    about_up: f64,
    about_forward: f64,
    about_cross: f64,
) -> (f64, f64, f64) {
    match convention {
        RotationConvention::Wrapped => {
            let wrap = |r: f64| (r - 180.0).rem_euclid(360.0) - 180.0;
            let (yaw, pitch, roll) = (wrap(about_up), wrap(about_forward), wrap(about_cross));
            let yaw = if yaw < 0.0 { yaw } else { -yaw };
            (yaw.to_radians(), (-pitch).to_radians(), (-roll).to_radians())
        }
        RotationConvention::Negated => (
            (-about_up).to_radians(),
            (-about_forward).to_radians(),
            (-about_cross).to_radians(),
        ),
    }
}

pub fn build_node(id: usize, fields: &Fields<'_>, convention: RotationConvention) -> Result<Node> {
    let position = fields.vec3("Position")?;
    let (yaw, pitch, roll) = convert_angles(
        convention,
        fields.f64("RotateAboutUp")?,
        fields.f64("RotateAboutForward")?,
        fields.f64("RotateAboutCross")?,
    );

    Ok(Node {
        id,
        name: fields.text("Name")?,
        x: Range::splat(position.x),
        y: Range::splat(position.y),
        z: Range::splat(position.z),
        yaw: Range::splat(yaw),
        pitch: Range::splat(pitch),
        roll: Range::splat(roll),
    })
}
