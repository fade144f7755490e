//! Convert command implementation.
//!
//! Converts `.particle` and `.texanim` files into JSON documents. A file that
//! fails is reported and skipped; the rest of the batch still runs.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::builder::{BuildOptions, RotationConvention};
use crate::convert::{convert_file, output_path};
use crate::discovery::{resolve_manifest, scan_paths, ScanResult};
use crate::error::{FxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::write_document;

use super::print_diagnostics;

/// Convert particle and texture animation files to JSON
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input files or directories to process
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output directory (default: from sinsfx.yaml, else "out")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest file (default: ./sinsfx.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Node rotation convention
    #[arg(long, value_enum)]
    pub rotation: Option<RotationConvention>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let mut manifest = resolve_manifest(args.config.as_deref(), Path::new("."))?;
    if let Some(output) = args.output {
        manifest.output = output;
    }
    if let Some(rotation) = args.rotation {
        manifest.build.rotation = rotation;
    }

    let scan = scan_paths(&args.paths);
    process(&scan, &manifest.build, Some(&manifest.output), printer)
}

/// Convert every scanned input, writing under `output` when given.
///
/// Returns an error once the whole batch has run if any file failed.
pub(crate) fn process(
    scan: &ScanResult,
    options: &BuildOptions,
    output: Option<&Path>,
    printer: &Printer,
) -> Result<()> {
    for skipped in &scan.skipped {
        printer.warning("Skipping", &display_path(skipped));
    }

    printer.info(
        "Found",
        &format!(
            "{}, {}",
            plural(scan.particles.len(), "particle file", "particle files"),
            plural(
                scan.texture_animations.len(),
                "texture animation",
                "texture animations"
            )
        ),
    );

    let mut failed = 0;

    for (path, kind) in scan.inputs() {
        let result = convert_file(path, kind, options).and_then(|conversion| {
            let written = match output {
                Some(dir) => {
                    let target = output_path(dir, path, &conversion.document);
                    write_document(&conversion.document, &target)?;
                    Some(target)
                }
                None => None,
            };
            Ok((conversion, written))
        });

        match result {
            Ok((conversion, Some(target))) => {
                printer.status(
                    "Converted",
                    &format!("{} -> {}", display_path(path), display_path(&target)),
                );
                print_diagnostics(printer, &conversion.diagnostics);
            }
            Ok((conversion, None)) => {
                printer.status("Checked", &display_path(path));
                print_diagnostics(printer, &conversion.diagnostics);
            }
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", display_path(path), e));
                failed += 1;
            }
        }
    }

    let total = scan.total();
    if failed > 0 {
        return Err(FxError::Build {
            message: format!("{} of {} failed", failed, plural(total, "file", "files")),
            help: Some("See the messages above for each failing file".to_string()),
        });
    }

    printer.success("Finished", &printer.bold(&plural(total, "file", "files")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TEXANIM: &str = "TXT
textureFileName \"Fire.dds\"
numFrames 8
numFramesPerRow 4
startTopLeft [0, 0]
frameSize [32, 32]
frameStride [32, 32]
";

    fn args(paths: Vec<PathBuf>, output: &Path) -> ConvertArgs {
        ConvertArgs {
            paths,
            output: Some(output.to_path_buf()),
            config: None,
            rotation: None,
        }
    }

    #[test]
    fn test_convert_writes_into_subdirectory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Fire.texanim");
        fs::write(&input, TEXANIM).unwrap();
        let out = dir.path().join("out");

        run(args(vec![input], &out), &Printer::new()).unwrap();

        let written = out.join("texture_animations").join("Fire.texture_animation");
        let content = fs::read_to_string(written).unwrap();
        assert!(content.contains("\"total_frame_count\": 8"));
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("Broken.texanim");
        let good = dir.path().join("Good.texanim");
        fs::write(&broken, "TXT\nnumFrames 1\n").unwrap();
        fs::write(&good, TEXANIM).unwrap();
        let out = dir.path().join("out");

        let result = run(args(vec![broken, good], &out), &Printer::new());

        assert!(matches!(result, Err(FxError::Build { .. })));
        assert!(out.join("texture_animations/Good.texture_animation").exists());
        assert!(!out.join("texture_animations/Broken.texture_animation").exists());
    }

    #[test]
    fn test_unknown_extension_skipped() {
        let dir = tempdir().unwrap();
        let other = dir.path().join("notes.txt");
        fs::write(&other, "hello").unwrap();
        let out = dir.path().join("out");

        run(args(vec![other], &out), &Printer::new()).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_binary_input_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Binary.particle");
        fs::write(&input, b"BIN\x01\x02\x03").unwrap();
        let out = dir.path().join("out");

        let result = run(args(vec![input], &out), &Printer::new());
        assert!(result.is_err());
    }
}
