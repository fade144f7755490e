//! Emitter target schema.
//!
//! An emitter carries the particle appearance record, emission timing and
//! the geometry of its spawn shape. Geometry fields exist only on the shape
//! variant they belong to, so a point emitter can never carry ring radii.

use serde::Serialize;

use super::range::Range;

/// Number of texture slots on a billboard.
pub const TEXTURE_SLOTS: usize = 2;

/// Spawn shape kind, as named in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterKind {
    Point,
    Ring,
    Sphere,
}

impl EmitterKind {
    /// Parse a source emitter type (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "POINT" => Some(EmitterKind::Point),
            "RING" => Some(EmitterKind::Ring),
            "SPHERE" => Some(EmitterKind::Sphere),
            _ => None,
        }
    }
}

/// Which way billboards face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingType {
    #[default]
    FaceCamera,
    FaceCameraByRotatingOnParticleDirection,
    FaceParticleDirection,
}

impl FacingType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(FacingType::FaceCamera),
            1 => Some(FacingType::FaceCameraByRotatingOnParticleDirection),
            2 => Some(FacingType::FaceParticleDirection),
            _ => None,
        }
    }
}

/// Billboard anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Center,
    CenterLeft,
    CenterRight,
    TopLeft,
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
}

impl Anchor {
    pub fn from_code(code: i64) -> Option<Self> {
        let anchor = match code {
            0 => Anchor::Center,
            1 => Anchor::CenterLeft,
            2 => Anchor::CenterRight,
            3 => Anchor::TopLeft,
            4 => Anchor::Top,
            5 => Anchor::TopRight,
            6 => Anchor::BottomRight,
            7 => Anchor::Bottom,
            8 => Anchor::BottomLeft,
            _ => return None,
        };
        Some(anchor)
    }
}

/// Spin direction of rotating particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
    Random,
}

impl RotationDirection {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RotationDirection::Clockwise),
            1 => Some(RotationDirection::CounterClockwise),
            2 => Some(RotationDirection::Random),
            _ => None,
        }
    }

    /// Re-sign a rotation speed range for this direction.
    ///
    /// Clockwise keeps magnitudes non-negative, counter-clockwise makes them
    /// non-positive, random spans the largest magnitude in both directions.
    /// Bounds stay ordered `min <= max`.
    pub fn apply(self, speed: Range) -> Range {
        let (a, b) = (speed.min.abs(), speed.max.abs());
        let (low, high) = (a.min(b), a.max(b));
        match self {
            RotationDirection::Clockwise => Range::new(low, high),
            RotationDirection::CounterClockwise => Range::new(-high, -low),
            RotationDirection::Random => Range::new(-high, high),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleType {
    Billboard,
    Mesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshShader {
    Basic,
    Ship,
    PlanetSurface,
}

/// Frame a particle's texture animation starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureAnimationFirstFrame {
    First,
    Sequential,
    #[default]
    Random,
}

impl TextureAnimationFirstFrame {
    /// Parse a source `textureAnimationSpawnType` name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FirstFrame" => Some(TextureAnimationFirstFrame::First),
            "SequentialFrames" => Some(TextureAnimationFirstFrame::Sequential),
            "RandomFrames" => Some(TextureAnimationFirstFrame::Random),
            _ => None,
        }
    }
}

/// How a texture animation advances after the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureAnimationNextFrame {
    SequentialLoop,
    SequentialNoLoop,
    #[default]
    Random,
    PingPongLoop,
}

/// Where along the ring's angle range particles spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleRangeBehavior {
    Random,
    SequenceLoop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicConstants {
    pub emissive_factor: f64,
    pub alpha_ramp_steepness: f64,
    pub alpha_ramp_growth_delay: f64,
}

impl Default for BasicConstants {
    fn default() -> Self {
        Self {
            emissive_factor: 1.0,
            alpha_ramp_steepness: 1.0,
            alpha_ramp_growth_delay: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UberConstants {
    pub basic_constants: BasicConstants,
}

/// Billboard rendering settings. `facing_type` and `anchor` are omitted when
/// they hold the engine default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Billboard {
    pub uber_constants: UberConstants,
    pub rotation: Range,
    pub rotation_speed: Range,
    pub render_with_additive_blending: bool,
    pub width: Range,
    pub height: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_animation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_animation_fps: Option<Range>,
    pub texture_animation_first_frame: TextureAnimationFirstFrame,
    pub texture_animation_next_frame: TextureAnimationNextFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facing_type: Option<FacingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
}

impl Billboard {
    pub fn new(width: Range, height: Range) -> Self {
        Self {
            uber_constants: UberConstants::default(),
            rotation: Range::zero(),
            rotation_speed: Range::zero(),
            render_with_additive_blending: true,
            width,
            height,
            texture_0: None,
            texture_1: None,
            texture_animation: None,
            texture_animation_fps: None,
            texture_animation_first_frame: TextureAnimationFirstFrame::default(),
            texture_animation_next_frame: TextureAnimationNextFrame::default(),
            facing_type: None,
            anchor: None,
        }
    }

    /// Record a facing type; the default is stored as absent.
    pub fn set_facing_type(&mut self, facing: FacingType) {
        self.facing_type = (facing != FacingType::default()).then_some(facing);
    }

    /// Record an anchor; the default is stored as absent.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = (anchor != Anchor::default()).then_some(anchor);
    }

    /// Fill texture slot `slot`. Returns false when the slot does not exist.
    pub fn set_texture(&mut self, slot: usize, name: impl Into<String>) -> bool {
        let target = match slot {
            0 => &mut self.texture_0,
            1 => &mut self.texture_1,
            _ => return false,
        };
        *target = Some(name.into());
        true
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Mesh {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shader: Option<MeshShader>,
}

/// Appearance of individual particles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    #[serde(rename = "type")]
    pub particle_type: ParticleType,
    pub billboard: Billboard,
    pub mesh: Mesh,
    pub render_layer: u32,
    pub color: String,
    pub mass: Range,
    pub max_duration: Range,
    pub fade_in_time: Range,
    pub fade_out_time: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmitRate {
    pub primary_emit_rate: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointShape {
    pub forward_velocity: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingShape {
    pub radius_x: Range,
    pub radius_y: Range,
    pub angle_range: Range,
    pub tangential_velocity: Range,
    pub use_edge: bool,
    pub normal_offset: Range,
    pub normal_velocity: Range,
    pub radial_velocity: Range,
    pub angle_range_behavior: AngleRangeBehavior,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_range_sequence_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereShape {
    pub radius_x: Range,
    pub radius_y: Range,
    pub radius_z: Range,
    pub azimuthal_tangential_velocity: Range,
    pub polar_tangential_velocity: Range,
    pub latitude_angle_range: Range,
    pub longitude_angle_range: Range,
    pub radial_velocity: Range,
    pub use_surface: bool,
}

/// Spawn geometry, tagged by `type` in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmitterShape {
    Point(PointShape),
    Ring(RingShape),
    Sphere(SphereShape),
}

impl EmitterShape {
    pub fn kind(&self) -> EmitterKind {
        match self {
            EmitterShape::Point(_) => EmitterKind::Point,
            EmitterShape::Ring(_) => EmitterKind::Ring,
            EmitterShape::Sphere(_) => EmitterKind::Sphere,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emitter {
    pub id: usize,
    pub name: String,
    pub particle: Particle,
    pub emit_rate: EmitRate,
    #[serde(flatten)]
    pub shape: EmitterShape,
    pub is_visible: bool,
    pub emit_start_delay: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_duration: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_max_particle_count: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_variance: Option<Range>,
}

impl Emitter {
    pub fn kind(&self) -> EmitterKind {
        self.shape.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_direction_policy() {
        let speed = Range::new(-5.0, 10.0);

        assert_eq!(RotationDirection::Clockwise.apply(speed), Range::new(5.0, 10.0));
        assert_eq!(
            RotationDirection::CounterClockwise.apply(speed),
            Range::new(-10.0, -5.0)
        );
        assert_eq!(RotationDirection::Random.apply(speed), Range::new(-10.0, 10.0));
    }

    #[test]
    fn test_codes() {
        assert_eq!(FacingType::from_code(1), Some(FacingType::FaceCameraByRotatingOnParticleDirection));
        assert_eq!(FacingType::from_code(3), None);
        assert_eq!(Anchor::from_code(8), Some(Anchor::BottomLeft));
        assert_eq!(Anchor::from_code(9), None);
        assert_eq!(RotationDirection::from_code(2), Some(RotationDirection::Random));
        assert_eq!(EmitterKind::parse("ring"), Some(EmitterKind::Ring));
        assert_eq!(EmitterKind::parse("Cone"), None);
        assert_eq!(
            TextureAnimationFirstFrame::parse("SequentialFrames"),
            Some(TextureAnimationFirstFrame::Sequential)
        );
    }

    #[test]
    fn test_default_variants_are_absent() {
        let mut billboard = Billboard::new(Range::splat(1.0), Range::splat(1.0));

        billboard.set_facing_type(FacingType::FaceCamera);
        billboard.set_anchor(Anchor::Center);
        assert_eq!(billboard.facing_type, None);
        assert_eq!(billboard.anchor, None);

        billboard.set_anchor(Anchor::TopLeft);
        assert_eq!(billboard.anchor, Some(Anchor::TopLeft));

        let json = serde_json::to_value(&billboard).unwrap();
        assert_eq!(json["anchor"], "top_left");
        assert!(json.get("facing_type").is_none());
    }

    #[test]
    fn test_texture_slots() {
        let mut billboard = Billboard::new(Range::zero(), Range::zero());

        assert!(billboard.set_texture(0, "a_clr"));
        assert!(billboard.set_texture(1, "b_clr"));
        assert!(!billboard.set_texture(TEXTURE_SLOTS, "c_clr"));
        assert_eq!(billboard.texture_1.as_deref(), Some("b_clr"));
    }

    #[test]
    fn test_shape_is_tagged_by_type() {
        let shape = EmitterShape::Point(PointShape {
            forward_velocity: Range::new(1.0, 2.0),
        });
        let json = serde_json::to_value(&shape).unwrap();

        assert_eq!(json["type"], "point");
        assert_eq!(json["forward_velocity"], serde_json::json!([1.0, 2.0]));
    }
}
