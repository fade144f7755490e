//! Structural checks for a built particle effect.
//!
//! Each check takes a `&ParticleEffect` and returns `Diagnostics`.

use crate::types::ParticleEffect;

use super::warning::{Diagnostic, Diagnostics};

/// Nodes, emitters and node attachments must line up one to one.
pub fn check_counts(effect: &ParticleEffect) -> Diagnostics {
    let mut result = Diagnostics::new();

    let nodes = effect.nodes.len();
    let emitters = effect.emitters.len();
    let attachments = effect.emitter_to_node_attachments.len();

    if nodes != emitters || emitters != attachments {
        result.push(
            Diagnostic::error(
                "sinsfx::validate::count-mismatch",
                format!(
                    "{} nodes, {} emitters and {} node attachments do not match",
                    nodes, emitters, attachments
                ),
            )
            .with_help("Every emitter needs exactly one node and one node attachment"),
        );
    }

    result
}

/// Emitter `i` must be attached to node `i`, in order.
pub fn check_node_attachments(effect: &ParticleEffect) -> Diagnostics {
    let mut result = Diagnostics::new();

    for (index, attacher) in effect.emitter_to_node_attachments.iter().enumerate() {
        if attacher.attacher_id != index || attacher.attachee_id != index {
            result.error(
                "sinsfx::validate::node-attachment",
                format!(
                    "Node attachment {} pairs {} with {}",
                    index, attacher.attacher_id, attacher.attachee_id
                ),
            );
        }
    }

    result
}

/// Modifier attachments must point at an existing modifier and emitter.
pub fn check_modifier_attachments(effect: &ParticleEffect) -> Diagnostics {
    let mut result = Diagnostics::new();

    for attacher in &effect.modifier_to_emitter_attachments {
        if attacher.attachee_id >= effect.emitters.len() {
            result.error(
                "sinsfx::validate::dangling-emitter",
                format!(
                    "Modifier {} is attached to emitter {}, which does not exist",
                    attacher.attacher_id, attacher.attachee_id
                ),
            );
        }

        if !effect.modifiers.iter().any(|m| m.id == attacher.attacher_id) {
            result.error(
                "sinsfx::validate::dangling-modifier",
                format!(
                    "Attachment names modifier {}, which does not exist",
                    attacher.attacher_id
                ),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attacher, Node, Range};

    fn node(id: usize) -> Node {
        Node {
            id,
            name: format!("node{}", id),
            x: Range::zero(),
            y: Range::zero(),
            z: Range::zero(),
            yaw: Range::zero(),
            pitch: Range::zero(),
            roll: Range::zero(),
        }
    }

    #[test]
    fn test_count_mismatch() {
        let effect = ParticleEffect {
            nodes: vec![node(0)],
            emitter_to_node_attachments: vec![Attacher::new(0, 0)],
            ..Default::default()
        };
        let result = check_counts(&effect);
        assert_eq!(result.count(crate::validation::Severity::Error), 1);
    }

    #[test]
    fn test_node_attachment_order() {
        let effect = ParticleEffect {
            emitter_to_node_attachments: vec![Attacher::new(0, 0), Attacher::new(2, 1)],
            ..Default::default()
        };
        let result = check_node_attachments(&effect);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_dangling_modifier_attachment() {
        let effect = ParticleEffect {
            modifier_to_emitter_attachments: vec![Attacher::new(0, 3)],
            ..Default::default()
        };
        let result = check_modifier_attachments(&effect);
        assert_eq!(result.with_code("sinsfx::validate::dangling-emitter").count(), 1);
        assert_eq!(result.with_code("sinsfx::validate::dangling-modifier").count(), 1);
    }
}
