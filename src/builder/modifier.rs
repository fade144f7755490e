//! Modifier construction.
//!
//! Several source affector types are rewritten into a more general target
//! kind: forces and jitter become pushes, oscillators and bounded inflates
//! become size changes with stops instead of rates.

use crate::error::{FxError, Result};
use crate::parser::StagedRecord;
use crate::types::{
    AffectorKind, ChangeDurationContext, CoefficientGenerator, ColorPayload, DragPayload, Force,
    ForceType, KillPayload, Modifier, ModifierKind, Op, PushPayload, Range, RotatePayload,
    SizePayload,
};

use super::fields::Fields;
use super::BuildOptions;

/// Change rate used by `LinearInflate` affectors that omit their rates.
const DEFAULT_INFLATE_RATE: f64 = 100.0;

/// Parse the affector type of a staged record.
pub fn affector_kind(record: &StagedRecord) -> Result<AffectorKind> {
    AffectorKind::parse(&record.kind.value).ok_or_else(|| FxError::UnknownKind {
        what: "affector type",
        value: record.kind.value.clone(),
        line: record.kind.line,
    })
}

/// Build the modifier for a non-fade affector. `id` is the affector's index
/// among all affectors in the file.
pub fn build_modifier(
    id: usize,
    kind: AffectorKind,
    record: &StagedRecord,
    options: &BuildOptions,
) -> Result<Modifier> {
    let fields = Fields::new(record);

    let name = fields
        .opt_text("Name")?
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| kind.as_str().to_string());

    let infinite = fields.bool("HasInfiniteLifeTime")?;
    let duration = if infinite {
        None
    } else {
        Some(fields.splat("TotalLifeTime")?)
    };

    let particle_time_offset = if fields.bool("UseOldParticleAffectThreshold")? {
        Some(fields.splat("OldParticleAffectThreshold")?)
    } else {
        None
    };

    let particle_time_duration = if fields.bool("UseYoungParticleAffectThreshold")? {
        Some(fields.splat("YoungParticleAffectThreshold")?)
    } else {
        duration
    };

    Ok(Modifier {
        id,
        name,
        kind: build_kind(kind, &fields, options)?,
        start_delay: fields.splat("StartTime")?,
        particle_time_offset,
        particle_time_duration,
        duration,
    })
}

fn force(range: Range, force_type: ForceType) -> Force {
    Force { range, force_type }
}

fn build_kind(
    kind: AffectorKind,
    fields: &Fields<'_>,
    options: &BuildOptions,
) -> Result<ModifierKind> {
    let modifier = match kind {
        AffectorKind::LinearForceToPoint => ModifierKind::Push(PushPayload {
            op: Op::ToPointInEffectSpace,
            force: force(
                fields
                    .range("MinForce", "MaxForce")?
                    .divided_by(options.force_divisor),
                ForceType::Constant,
            ),
            direction: None,
            point: fields.opt_vec3("Point")?,
            is_random_jitter_shared: None,
        }),
        AffectorKind::LinearForceInDirection => ModifierKind::Push(PushPayload {
            op: Op::ToPointInEffectSpace,
            force: force(
                fields
                    .range("MinForce", "MaxForce")?
                    .divided_by(options.force_divisor),
                ForceType::Constant,
            ),
            direction: Some(fields.vec3("Direction")?),
            point: fields.opt_vec3("Point")?,
            is_random_jitter_shared: None,
        }),
        AffectorKind::Jitter => ModifierKind::Push(PushPayload {
            op: Op::RandomJitter,
            force: force(fields.splat("JitterForce")?, ForceType::Random),
            direction: None,
            point: None,
            is_random_jitter_shared: fields.bool("UseCommonForce")?.then_some(true),
        }),
        AffectorKind::LinearInflate => {
            let rates = match (
                fields.opt_splat("WidthInflateRate")?,
                fields.opt_splat("HeightInflateRate")?,
            ) {
                (Some(width), Some(height)) => (width, height),
                _ => (
                    Range::splat(DEFAULT_INFLATE_RATE),
                    Range::splat(DEFAULT_INFLATE_RATE),
                ),
            };
            ModifierKind::Size(SizePayload {
                width_change_rate: Some(rates.0),
                height_change_rate: Some(rates.1),
                ..Default::default()
            })
        }
        AffectorKind::SizeOscillator => ModifierKind::Size(SizePayload {
            width_stop: Some(fields.range("BeginSizeX", "EndSizeX")?),
            height_stop: Some(fields.range("BeginSizeY", "EndSizeY")?),
            ..Default::default()
        }),
        AffectorKind::LinearBoundedInflate => ModifierKind::Size(SizePayload {
            width_stop: Some(fields.range("MinWidth", "MaxWidth")?),
            height_stop: Some(fields.range("MinHeight", "MaxHeight")?),
            ..Default::default()
        }),
        AffectorKind::ColorOscillator => ModifierKind::Color(ColorPayload {
            begin_color: fields.color("StartColor")?,
            end_color: fields.color("EndColor")?,
            will_oscillate: true,
            change_duration: fields.splat("TransitionPeriod")?,
            change_duration_context: ChangeDurationContext::ParticleTimeElapsed,
        }),
        AffectorKind::RotateAboutAxis => ModifierKind::Rotate(RotatePayload {
            op: Op::AroundAxis,
            axis_of_rotation: fields.vec3("AxisOfRotation")?,
            axis_origin: fields.vec3("AxisOrigin")?,
            radius: fields.splat("Radius")?,
            angular_velocity: fields.splat("AngularVelocity")?,
        }),
        AffectorKind::KillParticlesNearPoint => ModifierKind::Kill(KillPayload {
            op: Op::NearPoint,
            point: fields.vec3("Point")?,
            tolerance: fields.splat("Distance")?,
        }),
        AffectorKind::Drag => ModifierKind::Drag(DragPayload {
            coefficient_generator: CoefficientGenerator {
                range: fields.splat("DragCoefficient")?,
            },
        }),
        AffectorKind::Fade => {
            return Err(FxError::Build {
                message: format!(
                    "{} (line {}) feeds fade times and has no modifier form",
                    fields.record().label(),
                    fields.record().kind.line
                ),
                help: None,
            })
        }
    };

    Ok(modifier)
}
