//! `.texanim` file parser.
//!
//! A texture animation is a flat list of six fields after the header:
//!
//! ```text
//! TXT
//! textureFileName "Explosion.dds"
//! numFrames 16
//! numFramesPerRow 4
//! startTopLeft [0, 0]
//! frameSize [64, 64]
//! frameStride [64, 64]
//! ```

use crate::error::{FxError, Result};

use super::cursor::{split_key_value, LineCursor};
use super::header::read_header;
use super::types::StagedRecord;
use super::value::coerce;

/// Number of field lines in a texture animation.
pub const TEXANIM_FIELD_COUNT: usize = 6;

/// Kind tag given to the staged texture animation record.
pub const TEXANIM_KIND: &str = "TextureAnimation";

/// Parse a `.texanim` source into a flat staged record.
pub fn parse_texanim(source: &str) -> Result<StagedRecord> {
    let mut cursor = LineCursor::new(source);
    read_header(&mut cursor)?;

    let mut record = StagedRecord::new(TEXANIM_KIND, cursor.line_number() + 1);

    for _ in 0..TEXANIM_FIELD_COUNT {
        let line = match cursor.advance() {
            Some(line) if !line.trim().is_empty() => line,
            _ => {
                return Err(FxError::expected(
                    "texture animation field",
                    cursor.line_number(),
                ))
            }
        };

        let (key, raw) = split_key_value(line);
        record.insert(key, coerce(raw), cursor.line_number());
    }

    Ok(record)
}
