//! Per-file conversion pipeline.
//!
//! Bytes in, document and diagnostics out. Each file is converted on its
//! own; nothing is shared between conversions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::{build_effect, build_texture_animation, BuildOptions};
use crate::discovery::InputKind;
use crate::error::{FxError, Result};
use crate::parser::{check_signature, parse_particle, parse_texanim};
use crate::types::Document;
use crate::validation::{validate_effect, Diagnostics};

/// A converted document with the findings gathered while building it.
#[derive(Debug)]
pub struct Conversion {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

/// Convert the raw contents of one input file.
pub fn convert_bytes(kind: InputKind, bytes: &[u8], options: &BuildOptions) -> Result<Conversion> {
    check_signature(bytes)?;

    let source = std::str::from_utf8(bytes).map_err(|e| FxError::Build {
        message: format!("Input is not valid UTF-8: {}", e),
        help: Some("Save the file as UTF-8 text".to_string()),
    })?;

    let mut diagnostics = Diagnostics::new();
    let document = match kind {
        InputKind::Particle => {
            let simulation = parse_particle(source)?;
            let effect = build_effect(&simulation, options, &mut diagnostics)?;
            diagnostics.merge(validate_effect(&effect));
            Document::Effect(effect)
        }
        InputKind::TextureAnimation => {
            let record = parse_texanim(source)?;
            Document::TextureAnimation(build_texture_animation(&record)?)
        }
    };

    Ok(Conversion {
        document,
        diagnostics,
    })
}

/// Read and convert one input file.
pub fn convert_file(path: &Path, kind: InputKind, options: &BuildOptions) -> Result<Conversion> {
    let bytes = fs::read(path).map_err(|e| FxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    convert_bytes(kind, &bytes, options)
}

/// File name up to its first `.`: `Explosion.big.particle` gives `Explosion`.
pub fn output_stem(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

/// Where the document converted from `input` is written under `output`.
pub fn output_path(output: &Path, input: &Path, document: &Document) -> PathBuf {
    output
        .join(document.subdirectory())
        .join(format!("{}.{}", output_stem(input), document.extension()))
}
