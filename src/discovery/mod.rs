//! Input discovery and project configuration.
//!
//! This module finds `.particle` and `.texanim` files among the paths given
//! on the command line and loads the `sinsfx.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use sinsfx::discovery::{resolve_manifest, scan_paths};
//!
//! let manifest = resolve_manifest(None, Path::new("."))?;
//! let scan = scan_paths(&[PathBuf::from("Particle")]);
//! println!("Found {} inputs", scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::Path;

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{detect_input_kind, scan_directory, scan_paths, InputKind, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "sinsfx.yaml";

/// Load the manifest for a run.
///
/// An explicit `config` path must exist. Otherwise `root/sinsfx.yaml` is
/// used when present, and defaults apply when it is not.
pub fn resolve_manifest(config: Option<&Path>, root: &Path) -> Result<Manifest> {
    if let Some(path) = config {
        return Manifest::load(path);
    }

    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Manifest::load(&manifest_path)
    } else {
        Ok(Manifest::default())
    }
}
