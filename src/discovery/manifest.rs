//! Project manifest (sinsfx.yaml) parsing.
//!
//! The manifest sets the output directory and the builder options for a
//! batch of conversions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::BuildOptions;
use crate::error::{FxError, Result};

/// Project manifest loaded from sinsfx.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory; documents go into `effects/` and
    /// `texture_animations/` below it.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Builder options, written inline at the top level.
    #[serde(flatten)]
    pub build: BuildOptions,
}

fn default_output() -> PathBuf {
    PathBuf::from("out")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            build: BuildOptions::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a sinsfx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| FxError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check sinsfx.yaml syntax".to_string()),
        })?;
        manifest.check()?;
        Ok(manifest)
    }

    fn check(&self) -> Result<()> {
        if !(self.build.force_divisor.is_finite() && self.build.force_divisor != 0.0) {
            return Err(FxError::Config {
                message: format!("force_divisor must be non-zero, got {}", self.build.force_divisor),
                help: Some("The default is 25".to_string()),
            });
        }
        if self.build.min_emit_duration.is_nan() || self.build.min_emit_duration < 0.0 {
            return Err(FxError::Config {
                message: format!(
                    "min_emit_duration must not be negative, got {}",
                    self.build.min_emit_duration
                ),
                help: Some("The default is 0.02".to_string()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RotationConvention;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.build, BuildOptions::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: converted
rotation: negated
force_divisor: 10
min_emit_duration: 0.05
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("converted"));
        assert_eq!(manifest.build.rotation, RotationConvention::Negated);
        assert_eq!(manifest.build.force_divisor, 10.0);
        assert_eq!(manifest.build.min_emit_duration, 0.05);
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();
        assert_eq!(manifest.output, PathBuf::from("out"));
    }

    #[test]
    fn test_invalid_rotation() {
        let result = Manifest::parse("rotation: sideways");
        assert!(matches!(result, Err(FxError::Config { .. })));
    }

    #[test]
    fn test_zero_force_divisor() {
        let result = Manifest::parse("force_divisor: 0");
        assert!(matches!(result, Err(FxError::Config { .. })));
    }

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sinsfx.yaml");
        std::fs::write(&path, "output: dist\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));

        let missing = Manifest::load(&dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(FxError::Io { .. })));
    }
}
