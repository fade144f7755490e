//! Attachment resolution between affectors and emitters.
//!
//! Affectors name the emitters they apply to. Fade affectors are folded into
//! per-emitter [`FadeDescriptor`]s instead of producing attachments.

use std::collections::HashMap;

use crate::error::Result;
use crate::parser::StagedRecord;
use crate::types::{AffectorKind, Attacher, Range};
use crate::validation::{Diagnostic, Diagnostics};

use super::fields::Fields;

/// Fade timing for one emitter. `None` leaves that direction at its default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FadeDescriptor {
    pub fade_in: Option<f64>,
    pub fade_out: Option<f64>,
}

impl FadeDescriptor {
    /// Overlay `other` onto `self`; each enabled direction wins.
    pub fn merge(&mut self, other: FadeDescriptor) {
        if other.fade_in.is_some() {
            self.fade_in = other.fade_in;
        }
        if other.fade_out.is_some() {
            self.fade_out = other.fade_out;
        }
    }

    pub fn fade_in_time(&self, default: Range) -> Range {
        self.fade_in.map(Range::splat).unwrap_or(default)
    }

    pub fn fade_out_time(&self, default: Range) -> Range {
        self.fade_out.map(Range::splat).unwrap_or(default)
    }
}

/// Resolved relations between affectors and emitters.
#[derive(Debug, Default)]
pub struct Attachments {
    /// `(affector index, emitter index)` for every non-fade name match
    pub modifier_to_emitter: Vec<Attacher>,
    /// Fade timing keyed by emitter name
    pub fades: HashMap<String, FadeDescriptor>,
}

impl Attachments {
    pub fn fade_for(&self, emitter_name: &str) -> FadeDescriptor {
        self.fades.get(emitter_name).copied().unwrap_or_default()
    }
}

fn fade_descriptor(fields: &Fields<'_>) -> Result<FadeDescriptor> {
    let fade_in = if fields.bool("DoFadeIn")? {
        Some(fields.f64("FadeInTime")?)
    } else {
        None
    };
    let fade_out = if fields.bool("DoFadeOut")? {
        Some(fields.f64("FadeOutTime")?)
    } else {
        None
    };
    Ok(FadeDescriptor { fade_in, fade_out })
}

/// Match every affector's attached names against the emitter list.
///
/// A name matching several emitters attaches to each of them. A name
/// matching none is reported as a warning.
pub fn resolve_attachments(
    emitters: &[StagedRecord],
    affectors: &[StagedRecord],
    diagnostics: &mut Diagnostics,
) -> Result<Attachments> {
    let mut attachments = Attachments::default();

    for (attacher_id, affector) in affectors.iter().enumerate() {
        if affector.attached_emitters.is_empty() {
            continue;
        }

        let is_fade = AffectorKind::parse(&affector.kind.value)
            .map(|kind| kind.is_fade())
            .unwrap_or(false);
        let fade = if is_fade {
            Some(fade_descriptor(&Fields::new(affector))?)
        } else {
            None
        };

        for attached in &affector.attached_emitters {
            let matches: Vec<usize> = emitters
                .iter()
                .enumerate()
                .filter(|(_, emitter)| emitter.name() == Some(attached.as_str()))
                .map(|(index, _)| index)
                .collect();

            if matches.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "sinsfx::attach::unresolved",
                        format!(
                            "{} (line {}) is attached to \"{}\", which names no emitter",
                            affector.label(),
                            affector.kind.line,
                            attached
                        ),
                    )
                    .with_help("Check the emitterName entries against the emitter Name fields"),
                );
            }

            match fade {
                Some(descriptor) => attachments
                    .fades
                    .entry(attached.clone())
                    .or_default()
                    .merge(descriptor),
                None => attachments.modifier_to_emitter.extend(
                    matches
                        .into_iter()
                        .map(|attachee_id| Attacher::new(attacher_id, attachee_id)),
                ),
            }
        }
    }

    Ok(attachments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::coerce;
    use pretty_assertions::assert_eq;

    fn emitter(name: &str) -> StagedRecord {
        let mut record = StagedRecord::new("Point", 1);
        record.insert("Name", coerce(&format!("\"{}\"", name)), 2);
        record
    }

    fn affector(kind: &str, attached: &[&str]) -> StagedRecord {
        let mut record = StagedRecord::new(kind, 10);
        record.attached_emitters = attached.iter().map(|s| s.to_string()).collect();
        record
    }

    fn fade(attached: &[&str], fade_in: Option<&str>, fade_out: Option<&str>) -> StagedRecord {
        let mut record = affector("Fade", attached);
        record.insert("DoFadeIn", coerce(if fade_in.is_some() { "TRUE" } else { "FALSE" }), 11);
        record.insert("FadeInTime", coerce(fade_in.unwrap_or("0.000000")), 12);
        record.insert("DoFadeOut", coerce(if fade_out.is_some() { "TRUE" } else { "FALSE" }), 13);
        record.insert("FadeOutTime", coerce(fade_out.unwrap_or("0.000000")), 14);
        record
    }

    #[test]
    fn test_attach_by_name() {
        let emitters = vec![emitter("a"), emitter("b"), emitter("a")];
        let affectors = vec![affector("Drag", &["a"]), affector("Jitter", &["b", "a"])];
        let mut diagnostics = Diagnostics::new();

        let result = resolve_attachments(&emitters, &affectors, &mut diagnostics).unwrap();

        assert_eq!(
            result.modifier_to_emitter,
            vec![
                Attacher::new(0, 0),
                Attacher::new(0, 2),
                Attacher::new(1, 1),
                Attacher::new(1, 0),
                Attacher::new(1, 2),
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unresolved_name_warns() {
        let emitters = vec![emitter("a")];
        let affectors = vec![affector("Drag", &["ghost"])];
        let mut diagnostics = Diagnostics::new();

        let result = resolve_attachments(&emitters, &affectors, &mut diagnostics).unwrap();

        assert!(result.modifier_to_emitter.is_empty());
        assert_eq!(diagnostics.with_code("sinsfx::attach::unresolved").count(), 1);
    }

    #[test]
    fn test_fade_produces_descriptor_not_attachment() {
        let emitters = vec![emitter("a"), emitter("b")];
        let affectors = vec![
            affector("Drag", &["b"]),
            fade(&["a"], Some("2.000000"), None),
        ];
        let mut diagnostics = Diagnostics::new();

        let result = resolve_attachments(&emitters, &affectors, &mut diagnostics).unwrap();

        assert_eq!(result.modifier_to_emitter, vec![Attacher::new(0, 1)]);
        let descriptor = result.fade_for("a");
        assert_eq!(descriptor.fade_in, Some(2.0));
        assert_eq!(descriptor.fade_out, None);
        assert_eq!(result.fade_for("b"), FadeDescriptor::default());
    }

    #[test]
    fn test_fades_merge_per_direction() {
        let emitters = vec![emitter("a")];
        let affectors = vec![
            fade(&["a"], Some("2.000000"), Some("3.000000")),
            fade(&["a"], None, Some("5.000000")),
        ];
        let mut diagnostics = Diagnostics::new();

        let result = resolve_attachments(&emitters, &affectors, &mut diagnostics).unwrap();
        let descriptor = result.fade_for("a");

        assert_eq!(descriptor.fade_in_time(Range::splat(1.0)), Range::splat(2.0));
        assert_eq!(descriptor.fade_out_time(Range::splat(1.0)), Range::splat(5.0));
    }
}
