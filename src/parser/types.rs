//! Staging model: the untyped tree produced by the parsers.

use indexmap::IndexMap;

use super::span::Spanned;
use super::value::Value;

/// A 3x3 orientation matrix, one row per source line.
pub type Matrix3 = [[f64; 3]; 3];

/// One emitter or affector block as read from the source.
///
/// Fields are keyed by their source name and keep their source order. The
/// counted sub-lists and the orientation block get their own slots since they
/// span several lines.
#[derive(Debug, Clone, Default)]
pub struct StagedRecord {
    /// Introducer value (`Point`, `Ring`, `Fade`, ...)
    pub kind: Spanned<String>,

    /// Scalar and vector fields
    pub fields: IndexMap<String, Spanned<Value>>,

    /// Normalized texture names, in declaration order (empty names kept)
    pub textures: Vec<String>,

    /// Names listed after `numAttachedEmitters`
    pub attached_emitters: Vec<String>,

    /// The `Orientation` block, if present
    pub orientation: Option<Spanned<Matrix3>>,
}

impl StagedRecord {
    pub fn new(kind: impl Into<String>, line: usize) -> Self {
        Self {
            kind: Spanned::new(kind.into(), line),
            ..Default::default()
        }
    }

    /// Store a field. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value, line: usize) {
        self.fields.insert(key.into(), Spanned::new(value, line));
    }

    pub fn get(&self, key: &str) -> Option<&Spanned<Value>> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The record's `Name` field, if it is text.
    pub fn name(&self) -> Option<&str> {
        self.get("Name").and_then(|v| v.value.as_str())
    }

    /// Human-readable label for error messages: `Ring "sparks 5"`.
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) if !name.is_empty() => format!("{} \"{}\"", self.kind.value, name),
            _ => self.kind.value.clone(),
        }
    }
}

/// The parsed `ParticleSimulation` block.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    /// `SinsArchiveVersion` header line, if the file has one
    pub archive_version: Option<String>,

    /// Top-level fields (`NumEmitters`, ...)
    pub fields: IndexMap<String, Spanned<Value>>,

    /// Emitter blocks in declaration order
    pub emitters: Vec<StagedRecord>,

    /// Affector blocks in declaration order
    pub affectors: Vec<StagedRecord>,
}

impl Simulation {
    /// The declared `NumEmitters` count.
    pub fn declared_emitter_count(&self) -> Option<i64> {
        self.fields.get("NumEmitters").and_then(|v| v.value.as_i64())
    }
}
