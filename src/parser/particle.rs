//! `.particle` file parser.
//!
//! Blocks are delimited by indentation alone. The parser walks the file once
//! with a single line of lookahead and produces a [`Simulation`]:
//!
//! ```text
//! TXT
//! SinsArchiveVersion 194
//! ParticleSimulation
//!     hasInfiniteLifeTime TRUE
//!     totalLifeTime 0.000000
//!     NumEmitters 1
//!     EmitterType "Point"
//!     EmitterContents
//!         Name "half1"
//!         Orientation
//!             [ 1.000000 0.000000 0.000000 ]
//!             [ 0.000000 1.000000 0.000000 ]
//!             [ 0.000000 0.000000 1.000000 ]
//!         numTextures 1
//!         textureName "Particle_Cloud.dds"
//! ```

use crate::error::{FxError, Result};

use super::cursor::{split_key_value, LineCursor};
use super::header::read_header;
use super::names::{normalize_texture_name, texture_animation_path};
use super::span::Spanned;
use super::types::{Matrix3, Simulation, StagedRecord};
use super::value::{coerce, Value};

/// Name of the root block.
pub const SIMULATION_ROOT: &str = "ParticleSimulation";

/// Top-level emitter count field.
pub const NUM_EMITTERS: &str = "NumEmitters";

/// Line (not counting the archive version tag) that must declare `NumEmitters`.
const NUM_EMITTERS_LINE: usize = 5;

/// Depth of the orientation matrix rows.
const ORIENTATION_DEPTH: usize = 3;

const ORIENTATION: &str = "Orientation";

/// Keys that open a nested emitter or affector block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Introducer {
    Emitter,
    Affector,
}

impl Introducer {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "EmitterType" => Some(Introducer::Emitter),
            "AffectorType" => Some(Introducer::Affector),
            _ => None,
        }
    }

    /// Marker the line after the introducer must contain.
    fn contents_marker(self) -> &'static str {
        match self {
            Introducer::Emitter => "EmitterContents",
            Introducer::Affector => "AffectorContents",
        }
    }
}

/// Keys inside a contents block that need more than plain coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    TextureCount,
    AttachedEmitterCount,
    TextureAnimationName,
    Plain,
}

impl FieldKey {
    fn classify(key: &str) -> Self {
        match key {
            "numTextures" => FieldKey::TextureCount,
            "numAttachedEmitters" => FieldKey::AttachedEmitterCount,
            "textureAnimationName" => FieldKey::TextureAnimationName,
            _ => FieldKey::Plain,
        }
    }
}

/// Parse a `.particle` source into its staging model.
pub fn parse_particle(source: &str) -> Result<Simulation> {
    BlockParser::new(source).parse()
}

struct BlockParser<'a> {
    cursor: LineCursor<'a>,
    header_lines: usize,
}

impl<'a> BlockParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(source),
            header_lines: 0,
        }
    }

    fn parse(mut self) -> Result<Simulation> {
        let header = read_header(&mut self.cursor)?;
        self.header_lines = header.extra_lines();

        let root = self.cursor.advance().unwrap_or_default();
        if !root.contains(SIMULATION_ROOT) {
            return Err(FxError::expected(SIMULATION_ROOT, self.cursor.line_number()));
        }

        let mut simulation = Simulation {
            archive_version: header.archive_version,
            ..Default::default()
        };
        self.parse_object(1, &mut simulation)?;

        Ok(simulation)
    }

    /// Read `key value` lines at exactly `depth`, descending into emitter and
    /// affector blocks as they are introduced.
    fn parse_object(&mut self, depth: usize, simulation: &mut Simulation) -> Result<()> {
        self.cursor.advance();

        while let Some(line) = self.cursor.current() {
            if self.cursor.current_depth() != Some(depth) {
                break;
            }

            let line_number = self.cursor.line_number();
            if line_number.saturating_sub(self.header_lines) == NUM_EMITTERS_LINE
                && !line.contains(NUM_EMITTERS)
            {
                return Err(FxError::expected(NUM_EMITTERS, line_number));
            }

            let (key, raw) = split_key_value(line);

            if let Some(introducer) = Introducer::from_key(key) {
                let kind = match coerce(raw) {
                    Value::Text(kind) => kind,
                    other => other.to_string(),
                };
                let mut record = StagedRecord::new(kind, line_number);

                let marker = introducer.contents_marker();
                let contents = self.cursor.advance().unwrap_or_default();
                if !contents.contains(marker) {
                    return Err(FxError::expected(marker, self.cursor.line_number()));
                }

                self.parse_contents(&mut record, depth + 1)?;

                match introducer {
                    Introducer::Emitter => simulation.emitters.push(record),
                    Introducer::Affector => simulation.affectors.push(record),
                }
                continue;
            }

            simulation
                .fields
                .insert(key.to_string(), Spanned::new(coerce(raw), line_number));
            self.cursor.advance();
        }

        Ok(())
    }

    /// Read a contents block. Stops at the first line shallower than `depth`,
    /// a blank line, or end of input; that line is left current.
    fn parse_contents(&mut self, record: &mut StagedRecord, depth: usize) -> Result<()> {
        self.cursor.advance();

        while let Some(line) = self.cursor.current() {
            let current_depth = self.cursor.current_depth();
            if current_depth.is_none() {
                break;
            }

            if self.cursor.peek_depth() == Some(ORIENTATION_DEPTH) {
                self.parse_orientation(record)?;
                continue;
            }

            if current_depth < Some(depth) {
                break;
            }

            let line_number = self.cursor.line_number();
            let (key, raw) = split_key_value(line);
            let mut value = coerce(raw);

            match FieldKey::classify(key) {
                FieldKey::TextureCount => {
                    let count = count_of(&value, key, line_number)?;
                    for _ in 0..count {
                        let item = self.next_item("textureName")?;
                        record.textures.push(normalize_texture_name(item));
                    }
                }
                FieldKey::AttachedEmitterCount => {
                    let count = count_of(&value, key, line_number)?;
                    for _ in 0..count {
                        let item = self.next_item("emitterName")?;
                        record
                            .attached_emitters
                            .push(item.trim_matches('"').to_string());
                    }
                }
                FieldKey::TextureAnimationName => {
                    if let Value::Text(name) = &value {
                        if !name.is_empty() {
                            value = Value::Text(texture_animation_path(name));
                        }
                    }
                }
                FieldKey::Plain => {}
            }

            record.insert(key, value, line_number);
            self.cursor.advance();
        }

        Ok(())
    }

    /// The current line is `Orientation`; its rows follow one level deeper.
    fn parse_orientation(&mut self, record: &mut StagedRecord) -> Result<()> {
        let line_number = self.cursor.line_number();
        let line = self.cursor.current().unwrap_or_default();
        if !line.contains(ORIENTATION) {
            return Err(FxError::expected(ORIENTATION, line_number));
        }

        let mut rows = Vec::with_capacity(3);
        self.cursor.advance();
        while self.cursor.current_depth() >= Some(ORIENTATION_DEPTH) {
            let row = self.cursor.current().unwrap_or_default();
            rows.push(parse_row(row, self.cursor.line_number())?);
            self.cursor.advance();
        }

        let matrix: Matrix3 = rows.try_into().map_err(|_| FxError::InvalidValue {
            field: ORIENTATION.to_string(),
            expected: "3 rows".to_string(),
            line: line_number,
        })?;
        record.orientation = Some(Spanned::new(matrix, line_number));

        Ok(())
    }

    /// Advance to the next counted-list entry and return its raw value.
    fn next_item(&mut self, expected: &str) -> Result<&'a str> {
        match self.cursor.advance() {
            Some(line) if !line.trim().is_empty() => Ok(split_key_value(line).1),
            _ => Err(FxError::expected(expected, self.cursor.line_number())),
        }
    }
}

/// Declared length of a counted list.
fn count_of(value: &Value, key: &str, line: usize) -> Result<usize> {
    value
        .as_i64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| FxError::InvalidValue {
            field: key.to_string(),
            expected: "a non-negative count".to_string(),
            line,
        })
}

/// One orientation row: `[ 1.000000 0.000000 0.000000 ]`.
fn parse_row(line: &str, line_number: usize) -> Result<[f64; 3]> {
    coerce(line)
        .as_numbers()
        .and_then(|numbers| <[f64; 3]>::try_from(numbers).ok())
        .ok_or_else(|| FxError::InvalidValue {
            field: ORIENTATION.to_string(),
            expected: "a row of 3 numbers".to_string(),
            line: line_number,
        })
}
