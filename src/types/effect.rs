//! Top-level output documents.

use serde::Serialize;

use super::emitter::Emitter;
use super::modifier::Modifier;
use super::node::Node;

/// Target format version written into every particle effect.
pub const EFFECT_VERSION: u32 = 2;

/// An ordered "A applies to B" index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attacher {
    pub attacher_id: usize,
    pub attachee_id: usize,
}

impl Attacher {
    pub fn new(attacher_id: usize, attachee_id: usize) -> Self {
        Self {
            attacher_id,
            attachee_id,
        }
    }
}

/// A converted `.particle` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleEffect {
    pub version: u32,
    pub nodes: Vec<Node>,
    pub emitters: Vec<Emitter>,
    pub modifiers: Vec<Modifier>,
    pub emitter_to_node_attachments: Vec<Attacher>,
    pub modifier_to_emitter_attachments: Vec<Attacher>,
}

impl Default for ParticleEffect {
    fn default() -> Self {
        Self {
            version: EFFECT_VERSION,
            nodes: Vec::new(),
            emitters: Vec::new(),
            modifiers: Vec::new(),
            emitter_to_node_attachments: Vec::new(),
            modifier_to_emitter_attachments: Vec::new(),
        }
    }
}

/// A converted `.texanim` file. Fields absent from the source are omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextureAnimation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_frame_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_frame_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_top_left: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_size: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_stride: Option<Vec<i64>>,
}

/// Either kind of converted document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Effect(ParticleEffect),
    TextureAnimation(TextureAnimation),
}

impl Document {
    /// Output file extension for this document.
    pub fn extension(&self) -> &'static str {
        match self {
            Document::Effect(_) => "particle_effect",
            Document::TextureAnimation(_) => "texture_animation",
        }
    }

    /// Output subdirectory for this document.
    pub fn subdirectory(&self) -> &'static str {
        match self {
            Document::Effect(_) => "effects",
            Document::TextureAnimation(_) => "texture_animations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_effect() {
        let value = serde_json::to_value(Document::Effect(ParticleEffect::default())).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 2,
                "nodes": [],
                "emitters": [],
                "modifiers": [],
                "emitter_to_node_attachments": [],
                "modifier_to_emitter_attachments": []
            })
        );
    }

    #[test]
    fn test_texture_animation_omits_absent() {
        let animation = TextureAnimation {
            texture: Some("Explosion.dds".into()),
            total_frame_count: Some(16),
            ..Default::default()
        };
        let value = serde_json::to_value(Document::TextureAnimation(animation)).unwrap();
        assert_eq!(value, json!({ "texture": "Explosion.dds", "total_frame_count": 16 }));
    }

    #[test]
    fn test_attacher_fields() {
        let value = serde_json::to_value(Attacher::new(4, 1)).unwrap();
        assert_eq!(value, json!({ "attacher_id": 4, "attachee_id": 1 }));
    }
}
