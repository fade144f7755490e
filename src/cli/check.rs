//! Check command implementation.
//!
//! Parses and builds inputs without writing anything, reporting errors and
//! diagnostics.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::builder::RotationConvention;
use crate::discovery::{resolve_manifest, scan_paths};
use crate::error::Result;
use crate::output::Printer;

use super::convert::process;

/// Parse and build inputs without writing output
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Manifest file (default: ./sinsfx.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Node rotation convention
    #[arg(long, value_enum)]
    pub rotation: Option<RotationConvention>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let mut manifest = resolve_manifest(args.config.as_deref(), Path::new("."))?;
    if let Some(rotation) = args.rotation {
        manifest.build.rotation = rotation;
    }

    let scan = scan_paths(&args.paths);
    process(&scan, &manifest.build, None, printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Fire.texanim");
        fs::write(
            &input,
            "TXT\ntextureFileName \"Fire.dds\"\nnumFrames 8\nnumFramesPerRow 4\nstartTopLeft [0, 0]\nframeSize [32, 32]\nframeStride [32, 32]\n",
        )
        .unwrap();

        let args = CheckArgs {
            paths: vec![dir.path().to_path_buf()],
            config: None,
            rotation: None,
        };
        run(args, &Printer::new()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_check_reports_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Broken.particle");
        fs::write(&input, "TXT\nParticleSystem\n").unwrap();

        let args = CheckArgs {
            paths: vec![input],
            config: None,
            rotation: None,
        };
        assert!(run(args, &Printer::new()).is_err());
    }
}
