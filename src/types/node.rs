//! Spatial placement nodes.

use serde::Serialize;

use super::range::Range;

/// Placement of one emitter. Every range is degenerate: source placement is
/// fixed, not randomized. Angles are in radians.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    pub name: String,
    pub x: Range,
    pub y: Range,
    pub z: Range,
    pub yaw: Range,
    pub pitch: Range,
    pub roll: Range,
}
