//! Emitter construction.

use crate::error::{FxError, Result};
use crate::parser::StagedRecord;
use crate::types::{
    Anchor, AngleRangeBehavior, Billboard, EmitRate, Emitter, EmitterKind, EmitterShape,
    FacingType, Mesh, MeshShader, Particle, ParticleType, PointShape, Range, RingShape,
    RotationDirection, SphereShape, TextureAnimationFirstFrame, TEXTURE_SLOTS,
};
use crate::validation::{Diagnostic, Diagnostics};

use super::attach::FadeDescriptor;
use super::fields::Fields;
use super::BuildOptions;

/// Fade time used when no fade affector enables a direction.
const DEFAULT_FADE_TIME: f64 = 1.0;

/// Emit duration substituted for finite durations too short to play.
const CLAMPED_EMIT_DURATION: f64 = 1.0;

pub fn build_emitter(
    id: usize,
    record: &StagedRecord,
    fade: FadeDescriptor,
    options: &BuildOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Emitter> {
    let fields = Fields::new(record);
    let kind = EmitterKind::parse(&record.kind.value).ok_or_else(|| FxError::UnknownKind {
        what: "emitter type",
        value: record.kind.value.clone(),
        line: record.kind.line,
    })?;
    let name = fields.text("Name")?;

    let emit_max_particle_count = if fields.bool("HasInfiniteEmitCount")? {
        None
    } else {
        Some(fields.splat("MaxEmitCount")?)
    };

    Ok(Emitter {
        id,
        particle: build_particle(&fields, &name, fade, diagnostics)?,
        emit_rate: EmitRate {
            primary_emit_rate: fields.splat("EmitRate")?,
        },
        shape: build_shape(kind, &fields)?,
        is_visible: fields.bool("Enabled")?,
        emit_start_delay: fields.splat("StartTime")?,
        emit_duration: emit_duration(&fields, &name, options, diagnostics)?,
        emit_max_particle_count,
        angle_variance: fields.opt_splat("AngleVariance")?,
        name,
    })
}

fn emit_duration(
    fields: &Fields<'_>,
    name: &str,
    options: &BuildOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Range>> {
    if fields.bool("HasInfiniteLifeTime")? {
        return Ok(None);
    }

    let total = fields.f64("TotalLifeTime")?;
    let line = fields.line_of("TotalLifeTime");

    if total <= 0.0 {
        diagnostics.push(
            Diagnostic::warning(
                "sinsfx::emitter::non-positive-duration",
                format!("{} 'TotalLifeTime' is {} in line {}", name, total, line),
            )
            .with_help("TotalLifeTime must be > 0 when HasInfiniteLifeTime is FALSE"),
        );
    } else if total < options.min_emit_duration {
        diagnostics.info(
            "sinsfx::emitter::clamped-duration",
            format!(
                "{} 'TotalLifeTime' {} in line {} is too short to play, using {}",
                name, total, line, CLAMPED_EMIT_DURATION
            ),
        );
        return Ok(Some(Range::splat(CLAMPED_EMIT_DURATION)));
    }

    Ok(Some(Range::splat(total)))
}

fn build_particle(
    fields: &Fields<'_>,
    name: &str,
    fade: FadeDescriptor,
    diagnostics: &mut Diagnostics,
) -> Result<Particle> {
    let mesh_name = fields.opt_text("MeshName")?.filter(|m| !m.is_empty());
    let (particle_type, mesh) = match mesh_name {
        Some(mesh) => (
            ParticleType::Mesh,
            Mesh {
                mesh: Some(mesh),
                shader: Some(MeshShader::Ship),
            },
        ),
        None => (ParticleType::Billboard, Mesh::default()),
    };

    let default_fade = Range::splat(DEFAULT_FADE_TIME);

    Ok(Particle {
        particle_type,
        billboard: build_billboard(fields, name, diagnostics)?,
        mesh,
        render_layer: 0,
        color: fields.color("ParticleStartColor")?,
        mass: fields.splat("ParticleStartMass")?,
        max_duration: fields.splat("ParticleLifeTime")?,
        fade_in_time: fade.fade_in_time(default_fade),
        fade_out_time: fade.fade_out_time(default_fade),
    })
}

fn build_billboard(
    fields: &Fields<'_>,
    name: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Billboard> {
    let mut billboard = Billboard::new(
        fields.splat("ParticleWidth")?,
        fields.splat("ParticleHeight")?,
    );

    billboard.set_facing_type(fields.code("ParticleFacing", "facing type", FacingType::from_code)?);
    billboard.set_anchor(fields.code("BillboardAnchor", "billboard anchor", Anchor::from_code)?);

    if fields.bool("ParticlesRotate")? {
        let direction = fields.code(
            "RotationDirectionType",
            "rotation direction",
            RotationDirection::from_code,
        )?;
        billboard.rotation = fields.range("ParticleMinStartRotation", "ParticleMaxStartRotation")?;
        billboard.rotation_speed = direction.apply(
            fields.range("ParticleMinStartAngularSpeed", "ParticleMaxStartAngularSpeed")?,
        );
    }

    let record = fields.record();
    for (slot, texture) in record.textures.iter().enumerate() {
        if texture.is_empty() {
            continue;
        }
        if !billboard.set_texture(slot, texture.as_str()) {
            diagnostics.warning(
                "sinsfx::emitter::dropped-texture",
                format!(
                    "{} texture \"{}\" dropped, only {} texture slots are available",
                    name, texture, TEXTURE_SLOTS
                ),
            );
        }
    }

    billboard.texture_animation = fields
        .opt_text("textureAnimationName")?
        .filter(|path| !path.is_empty());
    billboard.texture_animation_fps = fields.opt_splat("textureAnimationOnParticleFPS")?;

    if let Some(spawn_type) = fields.opt_text("textureAnimationSpawnType")? {
        billboard.texture_animation_first_frame = TextureAnimationFirstFrame::parse(&spawn_type)
            .ok_or_else(|| FxError::UnknownKind {
                what: "texture animation spawn type",
                value: spawn_type.clone(),
                line: fields.line_of("textureAnimationSpawnType"),
            })?;
    }

    Ok(billboard)
}

fn build_shape(kind: EmitterKind, fields: &Fields<'_>) -> Result<EmitterShape> {
    let linear_speed = || fields.range("ParticleMinStartLinearSpeed", "ParticleMaxStartLinearSpeed");

    let shape = match kind {
        EmitterKind::Point => EmitterShape::Point(PointShape {
            forward_velocity: linear_speed()?,
        }),
        EmitterKind::Ring => {
            let (angle_range_behavior, angle_range_sequence_size) =
                if fields.bool("isSpawnAngleRandom")? {
                    (AngleRangeBehavior::Random, None)
                } else {
                    (
                        AngleRangeBehavior::SequenceLoop,
                        fields.opt_i64("nonRandomSpawnLoopEmittedParticleCount")?,
                    )
                };

            EmitterShape::Ring(RingShape {
                radius_x: fields.range("RingRadiusXMin", "RingRadiusXMax")?,
                radius_y: fields.range("RingRadiusYMin", "RingRadiusYMax")?,
                angle_range: fields.range("SpawnAngleStart", "SpawnAngleStop")?,
                tangential_velocity: fields.splat("ParticleMaxStartSpeedTangential")?,
                use_edge: false,
                normal_offset: Range::zero(),
                normal_velocity: fields.splat("ParticleMaxStartSpeedRingNormal")?,
                radial_velocity: linear_speed()?,
                angle_range_behavior,
                angle_range_sequence_size,
            })
        }
        EmitterKind::Sphere => EmitterShape::Sphere(SphereShape {
            radius_x: fields.range("SphereRadiusXMin", "SphereRadiusXMax")?,
            radius_y: fields.range("SphereRadiusYMin", "SphereRadiusYMax")?,
            radius_z: fields.range("SphereRadiusZMin", "SphereRadiusZMax")?,
            azimuthal_tangential_velocity: fields
                .splat("ParticleMaxStartSpeedAzimuthalTangential")?,
            polar_tangential_velocity: fields.splat("ParticleMaxStartSpeedPolarTangential")?,
            latitude_angle_range: fields
                .range("SpawnAngleLatitudinalStart", "SpawnAngleLatitudinalStop")?,
            longitude_angle_range: fields
                .range("SpawnAngleLongitudinalStart", "SpawnAngleLongitudinalStop")?,
            radial_velocity: linear_speed()?,
            use_surface: false,
        }),
    };

    Ok(shape)
}
