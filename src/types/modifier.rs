//! Modifier target schema.
//!
//! The source names eleven affector types; the target knows six modifier
//! kinds. [`AffectorKind`] is the source side and [`ModifierKind`] carries the
//! payload of the target side.

use serde::Serialize;

use super::range::{Range, Vec3};

/// Affector type as named in a `.particle` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffectorKind {
    LinearForceToPoint,
    LinearForceInDirection,
    Jitter,
    LinearInflate,
    SizeOscillator,
    LinearBoundedInflate,
    Fade,
    ColorOscillator,
    RotateAboutAxis,
    KillParticlesNearPoint,
    Drag,
}

impl AffectorKind {
    pub fn parse(s: &str) -> Option<Self> {
        let kind = match s.trim() {
            "LinearForceToPoint" => AffectorKind::LinearForceToPoint,
            "LinearForceInDirection" => AffectorKind::LinearForceInDirection,
            "Jitter" => AffectorKind::Jitter,
            "LinearInflate" => AffectorKind::LinearInflate,
            "SizeOscillator" => AffectorKind::SizeOscillator,
            "LinearBoundedInflate" => AffectorKind::LinearBoundedInflate,
            "Fade" => AffectorKind::Fade,
            "ColorOscillator" => AffectorKind::ColorOscillator,
            "RotateAboutAxis" => AffectorKind::RotateAboutAxis,
            "KillParticlesNearPoint" => AffectorKind::KillParticlesNearPoint,
            "Drag" => AffectorKind::Drag,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AffectorKind::LinearForceToPoint => "LinearForceToPoint",
            AffectorKind::LinearForceInDirection => "LinearForceInDirection",
            AffectorKind::Jitter => "Jitter",
            AffectorKind::LinearInflate => "LinearInflate",
            AffectorKind::SizeOscillator => "SizeOscillator",
            AffectorKind::LinearBoundedInflate => "LinearBoundedInflate",
            AffectorKind::Fade => "Fade",
            AffectorKind::ColorOscillator => "ColorOscillator",
            AffectorKind::RotateAboutAxis => "RotateAboutAxis",
            AffectorKind::KillParticlesNearPoint => "KillParticlesNearPoint",
            AffectorKind::Drag => "Drag",
        }
    }

    /// Fade affectors only feed emitter fade times and never become modifiers.
    pub fn is_fade(&self) -> bool {
        matches!(self, AffectorKind::Fade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    RandomJitter,
    ToPointInEffectSpace,
    AroundAxis,
    NearPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceType {
    Random,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDurationContext {
    ParticleTimeElapsed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Force {
    pub range: Range,
    #[serde(rename = "type")]
    pub force_type: ForceType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientGenerator {
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotatePayload {
    pub op: Op,
    pub axis_of_rotation: Vec3,
    pub axis_origin: Vec3,
    pub radius: Range,
    pub angular_velocity: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushPayload {
    pub op: Op,
    pub force: Force,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_random_jitter_shared: Option<bool>,
}

/// Size change, either by rate or by start/stop bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SizePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_change_rate: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_change_rate: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_stop: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_stop: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorPayload {
    pub begin_color: String,
    pub end_color: String,
    pub will_oscillate: bool,
    pub change_duration: Range,
    pub change_duration_context: ChangeDurationContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragPayload {
    pub coefficient_generator: CoefficientGenerator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KillPayload {
    pub op: Op,
    pub point: Vec3,
    pub tolerance: Range,
}

/// Target modifier kind with its payload, tagged by `type` in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModifierKind {
    Rotate(RotatePayload),
    Push(PushPayload),
    Size(SizePayload),
    Color(ColorPayload),
    Drag(DragPayload),
    Kill(KillPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modifier {
    pub id: usize,
    pub name: String,
    #[serde(flatten)]
    pub kind: ModifierKind,
    pub start_delay: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_time_offset: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_time_duration: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Range>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_affector_kind_roundtrip_names() {
        for name in [
            "LinearForceToPoint",
            "LinearForceInDirection",
            "Jitter",
            "LinearInflate",
            "SizeOscillator",
            "LinearBoundedInflate",
            "Fade",
            "ColorOscillator",
            "RotateAboutAxis",
            "KillParticlesNearPoint",
            "Drag",
        ] {
            let kind = AffectorKind::parse(name).unwrap();
            assert_eq!(kind.as_str(), name);
        }
        assert_eq!(AffectorKind::parse("Vortex"), None);
        assert!(AffectorKind::Fade.is_fade());
    }

    #[test]
    fn test_modifier_flattens_kind() {
        let modifier = Modifier {
            id: 3,
            name: "Pull".into(),
            kind: ModifierKind::Push(PushPayload {
                op: Op::ToPointInEffectSpace,
                force: Force {
                    range: Range::new(2.0, 4.0),
                    force_type: ForceType::Constant,
                },
                direction: None,
                point: Some(Vec3::new(0.0, 1.0, 0.0)),
                is_random_jitter_shared: None,
            }),
            start_delay: Range::zero(),
            particle_time_offset: None,
            particle_time_duration: Some(Range::splat(2.0)),
            duration: None,
        };

        let value = serde_json::to_value(&modifier).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Pull",
                "type": "push",
                "op": "to_point_in_effect_space",
                "force": { "range": [2.0, 4.0], "type": "constant" },
                "point": [0.0, 1.0, 0.0],
                "start_delay": [0.0, 0.0],
                "particle_time_duration": [2.0, 2.0]
            })
        );
    }
}
