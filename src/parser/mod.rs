//! Parsers for legacy text particle files.
//!
//! This module turns raw `.particle` and `.texanim` text into the staging
//! model: untyped records keyed by source field name, with every value
//! coerced once at read time.
//!
//! # Structure
//!
//! - Line 1 must contain `TXT`; an optional `SinsArchiveVersion` line follows
//! - Blocks nest by indentation, four columns (or one tab) per level
//! - `EmitterType` / `AffectorType` lines open emitter and affector blocks
//!
//! # Usage
//!
//! ```ignore
//! use sinsfx::parser::parse_particle;
//!
//! let source = std::fs::read_to_string("Ability_CombatNanites.particle")?;
//! let simulation = parse_particle(&source)?;
//!
//! for emitter in &simulation.emitters {
//!     println!("Found: {}", emitter.label());
//! }
//! ```

mod cursor;
mod header;
pub mod names;
mod particle;
pub mod span;
mod texanim;
pub mod types;
mod value;

// Re-export main entry points
pub use cursor::{depth, split_key_value, LineCursor, INDENT_WIDTH};
pub use header::{check_signature, read_header, Header, BINARY_SIGNATURE, TEXT_MAGIC};
pub use names::{normalize_texture_name, texture_animation_path};
pub use particle::{parse_particle, NUM_EMITTERS, SIMULATION_ROOT};
pub use span::Spanned;
pub use texanim::{parse_texanim, TEXANIM_FIELD_COUNT, TEXANIM_KIND};
pub use types::{Matrix3, Simulation, StagedRecord};
pub use value::{coerce, Value};
