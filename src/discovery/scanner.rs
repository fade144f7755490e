//! File system scanner for conversion inputs.
//!
//! Recursively scans directories to find `.particle` and `.texanim` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The two convertible source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `.particle`: a particle simulation
    Particle,
    /// `.texanim`: a texture animation
    TextureAnimation,
}

/// Detect the input kind from a file path based on its extension.
pub fn detect_input_kind(path: &Path) -> Option<InputKind> {
    match path.extension()?.to_str()? {
        "particle" => Some(InputKind::Particle),
        "texanim" => Some(InputKind::TextureAnimation),
        _ => None,
    }
}

/// Result of scanning paths for inputs.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered `.particle` files.
    pub particles: Vec<PathBuf>,
    /// Discovered `.texanim` files.
    pub texture_animations: Vec<PathBuf>,
    /// Explicitly named files with an unrecognised extension.
    pub skipped: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of convertible files.
    pub fn total(&self) -> usize {
        self.particles.len() + self.texture_animations.len()
    }

    /// Check if no convertible files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get files of a specific input kind.
    pub fn files_of_kind(&self, kind: InputKind) -> &[PathBuf] {
        match kind {
            InputKind::Particle => &self.particles,
            InputKind::TextureAnimation => &self.texture_animations,
        }
    }

    /// Every convertible file with its kind, particles first.
    pub fn inputs(&self) -> impl Iterator<Item = (&Path, InputKind)> {
        self.particles
            .iter()
            .map(|p| (p.as_path(), InputKind::Particle))
            .chain(
                self.texture_animations
                    .iter()
                    .map(|p| (p.as_path(), InputKind::TextureAnimation)),
            )
    }

    fn add(&mut self, path: PathBuf, kind: InputKind) {
        match kind {
            InputKind::Particle => self.particles.push(path),
            InputKind::TextureAnimation => self.texture_animations.push(path),
        }
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.particles.extend(other.particles);
        self.texture_animations.extend(other.texture_animations);
        self.skipped.extend(other.skipped);
    }
}

/// Scan a directory for input files.
///
/// Files with other extensions are ignored; entries are visited in file
/// name order so output is stable.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if let Some(kind) = detect_input_kind(path) {
            result.add(path.to_path_buf(), kind);
        }
    }

    result
}

/// Scan a list of files and directories.
///
/// Explicit files with an unknown extension land in `skipped` so the caller
/// can report them.
pub fn scan_paths(paths: &[PathBuf]) -> ScanResult {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            result.merge(scan_directory(path));
        } else {
            match detect_input_kind(path) {
                Some(kind) => result.add(path.clone(), kind),
                None => result.skipped.push(path.clone()),
            }
        }
    }

    result
}
