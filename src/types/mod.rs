//! Target schema for converted documents.
//!
//! This module contains the strongly-typed output graph:
//! - `Range` / `Vec3` - numeric primitives serialized as arrays
//! - `Node` - spatial placement of one emitter
//! - `Emitter` - particle source with its spawn shape
//! - `Modifier` - force or property change applied to particles
//! - `ParticleEffect` / `TextureAnimation` - the two document kinds

mod effect;
mod emitter;
mod modifier;
mod node;
mod range;

pub use effect::{Attacher, Document, ParticleEffect, TextureAnimation, EFFECT_VERSION};
pub use emitter::{
    Anchor, AngleRangeBehavior, BasicConstants, Billboard, EmitRate, Emitter, EmitterKind,
    EmitterShape, FacingType, Mesh, MeshShader, Particle, ParticleType, PointShape, RingShape,
    RotationDirection, SphereShape, TextureAnimationFirstFrame, TextureAnimationNextFrame,
    UberConstants, TEXTURE_SLOTS,
};
pub use modifier::{
    AffectorKind, ChangeDurationContext, CoefficientGenerator, ColorPayload, DragPayload, Force,
    ForceType, KillPayload, Modifier, ModifierKind, Op, PushPayload, RotatePayload, SizePayload,
};
pub use node::Node;
pub use range::{Range, Vec3};
