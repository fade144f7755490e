//! Diagnostics and post-build checks.
//!
//! The builder reports non-fatal findings as [`Diagnostic`] values rather
//! than printing them. [`validate_effect`] checks the structural invariants of
//! a finished particle effect. Used by both `sinsfx convert` and `sinsfx check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Diagnostics, Severity};

use crate::types::ParticleEffect;

/// Run all structural checks against a built effect.
pub fn validate_effect(effect: &ParticleEffect) -> Diagnostics {
    let mut result = Diagnostics::new();

    result.merge(checks::check_counts(effect));
    result.merge(checks::check_node_attachments(effect));
    result.merge(checks::check_modifier_attachments(effect));

    result
}
