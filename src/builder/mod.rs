//! Semantic builder: staging model to target documents.
//!
//! Runs after parsing is complete. Attachments are resolved first so that
//! fade affectors can feed emitter fade times; then nodes, emitters and
//! modifiers are built in declaration order.
//!
//! # Usage
//!
//! ```ignore
//! use sinsfx::builder::{build_effect, BuildOptions};
//! use sinsfx::parser::parse_particle;
//! use sinsfx::validation::Diagnostics;
//!
//! let simulation = parse_particle(&source)?;
//! let mut diagnostics = Diagnostics::new();
//! let effect = build_effect(&simulation, &BuildOptions::default(), &mut diagnostics)?;
//! ```

mod attach;
mod emitter;
mod fields;
mod modifier;
mod node;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::{Simulation, StagedRecord};
use crate::types::{Attacher, ParticleEffect, TextureAnimation, EFFECT_VERSION};
use crate::validation::{Diagnostic, Diagnostics};

pub use attach::{resolve_attachments, Attachments, FadeDescriptor};
pub use emitter::build_emitter;
pub use fields::Fields;
pub use modifier::{affector_kind, build_modifier};
pub use node::{build_node, convert_angles};

/// How source rotation angles map onto node yaw, pitch and roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RotationConvention {
    /// Wrap into [-180, 180), force yaw non-positive, negate pitch and roll
    #[default]
    Wrapped,
    /// Negate all three angles
    Negated,
}

/// Tunables for the semantic builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Node rotation convention.
    pub rotation: RotationConvention,

    /// Divisor applied to linear force ranges.
    pub force_divisor: f64,

    /// Finite emitter durations below this are clamped to one second.
    pub min_emit_duration: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            rotation: RotationConvention::default(),
            force_divisor: 25.0,
            min_emit_duration: 0.02,
        }
    }
}

/// Build a particle effect from a parsed simulation.
pub fn build_effect(
    simulation: &Simulation,
    options: &BuildOptions,
    diagnostics: &mut Diagnostics,
) -> Result<ParticleEffect> {
    let emitter_count = simulation.emitters.len();

    if let Some(declared) = simulation.declared_emitter_count() {
        if declared != emitter_count as i64 {
            diagnostics.push(
                Diagnostic::warning(
                    "sinsfx::effect::emitter-count",
                    format!(
                        "NumEmitters is {} but {} emitters are declared",
                        declared, emitter_count
                    ),
                )
                .with_help("Attachments are built from the emitters actually present"),
            );
        }
    }

    let attachments =
        resolve_attachments(&simulation.emitters, &simulation.affectors, diagnostics)?;

    let mut nodes = Vec::with_capacity(emitter_count);
    let mut emitters = Vec::with_capacity(emitter_count);

    for (id, record) in simulation.emitters.iter().enumerate() {
        nodes.push(build_node(id, &Fields::new(record), options.rotation)?);

        let fade = attachments.fade_for(record.name().unwrap_or_default());
        emitters.push(build_emitter(id, record, fade, options, diagnostics)?);
    }

    let mut modifiers = Vec::new();
    for (id, record) in simulation.affectors.iter().enumerate() {
        let kind = affector_kind(record)?;
        if kind.is_fade() {
            continue;
        }
        modifiers.push(build_modifier(id, kind, record, options)?);
    }

    Ok(ParticleEffect {
        version: EFFECT_VERSION,
        nodes,
        emitters,
        modifiers,
        emitter_to_node_attachments: (0..emitter_count).map(|i| Attacher::new(i, i)).collect(),
        modifier_to_emitter_attachments: attachments.modifier_to_emitter,
    })
}

/// Build a texture animation from a parsed `.texanim` record. Unknown keys
/// are ignored and absent keys stay absent.
pub fn build_texture_animation(record: &StagedRecord) -> Result<TextureAnimation> {
    let fields = Fields::new(record);
    let list = |key: &str| -> Result<Option<Vec<i64>>> {
        if record.contains(key) {
            fields.integers(key).map(Some)
        } else {
            Ok(None)
        }
    };

    Ok(TextureAnimation {
        texture: fields.opt_text("textureFileName")?,
        total_frame_count: fields.opt_i64("numFrames")?,
        column_frame_count: fields.opt_i64("numFramesPerRow")?,
        start_top_left: list("startTopLeft")?,
        frame_size: list("frameSize")?,
        frame_stride: list("frameStride")?,
    })
}
