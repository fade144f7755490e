//! sinsfx - Legacy particle effect converter
//!
//! A library for converting indentation-delimited `.particle` and `.texanim`
//! text files into the JSON particle effect and texture animation documents
//! used by the newer engine.

pub mod builder;
pub mod cli;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use builder::{build_effect, build_texture_animation, BuildOptions, RotationConvention};
pub use convert::{convert_bytes, convert_file, output_path, Conversion};
pub use discovery::{detect_input_kind, resolve_manifest, scan_paths, InputKind, Manifest, ScanResult};
pub use error::{FxError, Result};
pub use parser::{parse_particle, parse_texanim, Simulation, StagedRecord, Value};
pub use render::{to_json_string, to_value, write_document};
pub use types::{
    Attacher, Document, Emitter, EmitterKind, Modifier, ModifierKind, Node, ParticleEffect, Range,
    TextureAnimation, Vec3,
};
pub use validation::{validate_effect, Diagnostic, Diagnostics, Severity};
