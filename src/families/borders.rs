use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{color_var, BORDER_VALUE, COLORS, RADII, SIDES};

/// Borders, border colors and radii.
pub struct Borders;

impl UtilityFamily for Borders {
    fn name(&self) -> &'static str {
        "borders"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        sheet.add_one(".border", "border", BORDER_VALUE, importance);
        for side in SIDES {
            sheet.add_one(format!(".border-{}", side), format!("border-{}", side), BORDER_VALUE, importance);
        }

        sheet.add_one(".border-0", "border", "0", importance);
        for side in SIDES {
            sheet.add_one(format!(".border-{}-0", side), format!("border-{}", side), "0", importance);
        }

        for color in COLORS {
            sheet.add_one(format!(".border-{}", color), "border-color", color_var(color), importance);
        }

        for (name, radius) in RADII {
            let selector = if name.is_empty() {
                ".rounded".to_string()
            } else {
                format!(".rounded-{}", name)
            };
            sheet.add_one(selector, "border-radius", *radius, importance);
        }
    }
}
