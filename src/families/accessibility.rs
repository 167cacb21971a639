use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{NOT_SR_ONLY, SR_ONLY};

/// `.sr-only` and its inverse `.not-sr-only`.
pub struct Accessibility;

impl UtilityFamily for Accessibility {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        sheet.add(".sr-only", SR_ONLY.iter().copied(), importance);
        sheet.add(".not-sr-only", NOT_SR_ONLY.iter().copied(), importance);
    }
}
