use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{MAX_HEIGHTS, MAX_WIDTHS, MIN_HEIGHTS, MIN_WIDTHS, PIXEL_SCALE, SIZE_PERCENTS};

/// Width and height: percent steps, `auto`, viewport units and 1-100px.
pub struct Sizing;

impl UtilityFamily for Sizing {
    fn name(&self) -> &'static str {
        "sizing"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        let steps = SIZE_PERCENTS
            .iter()
            .map(|pct| (pct.to_string(), format!("{}%", pct)))
            .chain(std::iter::once(("auto".to_string(), "auto".to_string())));
        for (name, value) in steps {
            sheet.add_one(format!(".w-{}", name), "width", value.as_str(), importance);
            sheet.add_one(format!(".h-{}", name), "height", value, importance);
        }

        sheet.add_one(".mw-100", "max-width", "100%", importance);
        sheet.add_one(".mh-100", "max-height", "100%", importance);
        sheet.add_one(".vw-100", "width", "100vw", importance);
        sheet.add_one(".vh-100", "height", "100vh", importance);

        for px in PIXEL_SCALE {
            sheet.add_one(format!(".w-{}px", px), "width", format!("{}px", px), importance);
            sheet.add_one(format!(".h-{}px", px), "height", format!("{}px", px), importance);
        }
    }
}

/// Min/max constraints with named container widths.
pub struct SizingExtended;

impl UtilityFamily for SizingExtended {
    fn name(&self) -> &'static str {
        "sizing-extended"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for (name, value) in MIN_WIDTHS {
            sheet.add_one(format!(".min-w-{}", name), "min-width", *value, importance);
        }
        for (name, value) in MIN_HEIGHTS {
            sheet.add_one(format!(".min-h-{}", name), "min-height", *value, importance);
        }
        for (name, value) in MAX_WIDTHS {
            sheet.add_one(format!(".max-w-{}", name), "max-width", *value, importance);
        }
        for (name, value) in MAX_HEIGHTS {
            sheet.add_one(format!(".max-h-{}", name), "max-height", *value, importance);
        }
    }
}
