//! Asset name normalization for texture references.

/// Suffix appended to every normalized colour texture name.
pub const TEXTURE_SUFFIX: &str = "_clr";

/// Extension of converted texture animation documents.
pub const TEXTURE_ANIMATION_EXTENSION: &str = "texture_animation";

/// Image extensions stripped from texture names.
const IMAGE_EXTENSIONS: [&str; 2] = [".tga", ".dds"];

/// Normalize a texture file reference to an asset name.
///
/// `"Some/Path/Tex-1.DDS"` becomes `tex_1_clr`. An empty reference stays
/// empty and gets no suffix.
pub fn normalize_texture_name(raw: &str) -> String {
    let mut name = raw.trim().trim_matches('"').to_lowercase();
    for ext in IMAGE_EXTENSIONS {
        name = name.replace(ext, "");
    }
    let name = name.replace('-', "_");

    let base = name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    if base.is_empty() {
        String::new()
    } else {
        format!("{}{}", base, TEXTURE_SUFFIX)
    }
}

/// Derive the converted asset path of a texture animation reference.
///
/// `"Explosion_Ring.texanim"` becomes `explosion_ring.texture_animation`.
pub fn texture_animation_path(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stem = lowered.split('.').next().unwrap_or_default();
    format!("{}.{}", stem, TEXTURE_ANIMATION_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_texture_name() {
        assert_eq!(normalize_texture_name("\"Some/Path/Tex-1.DDS\""), "tex_1_clr");
        assert_eq!(normalize_texture_name("Particle_Cloud.tga"), "particle_cloud_clr");
        assert_eq!(normalize_texture_name("Textures\\Spark-Blue.dds"), "spark_blue_clr");
    }

    #[test]
    fn test_normalize_empty_texture_name() {
        assert_eq!(normalize_texture_name("\"\""), "");
        assert_eq!(normalize_texture_name(""), "");
    }

    #[test]
    fn test_texture_animation_path() {
        assert_eq!(
            texture_animation_path("Explosion_Ring.texanim"),
            "explosion_ring.texture_animation"
        );
        assert_eq!(texture_animation_path("Smoke"), "smoke.texture_animation");
    }
}
