//! Utility families: one generator per group of related classes.
//!
//! Every family can be emitted in both [`Importance`] variants with identical
//! property sets. Families only write to the sheet they are handed, so they
//! can be emitted independently and concatenated in registry order.

mod accessibility;
mod borders;
mod effects;
mod flex;
mod grid;
mod layout;
mod sizing;
mod spacing;
mod typography;

pub use accessibility::Accessibility;
pub use borders::Borders;
pub use effects::{Effects, Interaction, Transforms};
pub use flex::Flex;
pub use grid::FlexGridExtended;
pub use layout::{AspectRatio, Display, ObjectFit, Overflow, Position, ZIndex};
pub use sizing::{Sizing, SizingExtended};
pub use spacing::Spacing;
pub use typography::{Typography, TypographyExtended};

use crate::rule::{Importance, RuleSheet};

/// A named group of utility classes.
pub trait UtilityFamily: Sync {
    /// Stable identifier, used in logs, the manifest and `families` output.
    fn name(&self) -> &'static str;

    /// Append this family's rules for one variant to `sheet`.
    fn emit(&self, sheet: &mut RuleSheet, importance: Importance);

    /// Convenience wrapper returning a fresh sheet.
    fn rules(&self, importance: Importance) -> RuleSheet {
        let mut sheet = RuleSheet::new();
        self.emit(&mut sheet, importance);
        sheet
    }
}

static REGISTRY: [&dyn UtilityFamily; 18] = [
    &Spacing,
    &Display,
    &Position,
    &Flex,
    &Typography,
    &Sizing,
    &Borders,
    &Effects,
    &Overflow,
    &ZIndex,
    &ObjectFit,
    &AspectRatio,
    &TypographyExtended,
    &Interaction,
    &Transforms,
    &SizingExtended,
    &FlexGridExtended,
    &Accessibility,
];

/// All families in emission order.
pub fn registry() -> &'static [&'static dyn UtilityFamily] {
    &REGISTRY
}

/// Look a family up by name.
pub fn find(name: &str) -> Option<&'static dyn UtilityFamily> {
    registry().iter().copied().find(|family| family.name() == name)
}
