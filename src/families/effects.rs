use super::UtilityFamily;
use crate::rule::{format_decimal, Importance, RuleSheet};
use crate::tables::{
    CURSORS, OPACITY_PERCENTS, OPACITY_STEP, POINTER_EVENTS, ROTATIONS, ROTATIONS_NEGATIVE, SCALES,
    TOUCH_ACTIONS, TRANSLATE_AXES, TRANSLATE_PERCENTS, TRANSLATE_PERCENTS_NEGATIVE, USER_SELECTS,
};

/// Opacity, cursor and visibility.
pub struct Effects;

impl UtilityFamily for Effects {
    fn name(&self) -> &'static str {
        "effects"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for pct in OPACITY_PERCENTS.step_by(OPACITY_STEP) {
            sheet.add_one(
                format!(".opacity-{}", pct),
                "opacity",
                format_decimal(f64::from(pct) / 100.0),
                importance,
            );
        }

        for cursor in CURSORS {
            sheet.add_one(format!(".cursor-{}", cursor), "cursor", *cursor, importance);
        }

        sheet.add_one(".visible", "visibility", "visible", importance);
        sheet.add_one(".invisible", "visibility", "hidden", importance);
    }
}

/// Pointer events, user-select and touch-action.
pub struct Interaction;

impl UtilityFamily for Interaction {
    fn name(&self) -> &'static str {
        "interaction"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for value in POINTER_EVENTS {
            sheet.add_one(format!(".pointer-events-{}", value), "pointer-events", *value, importance);
        }
        for value in USER_SELECTS {
            sheet.add_one(format!(".user-select-{}", value), "user-select", *value, importance);
        }
        for value in TOUCH_ACTIONS {
            sheet.add_one(format!(".touch-action-{}", value), "touch-action", *value, importance);
        }
    }
}

/// Translate, rotate and scale. Negative magnitudes are spelled `n{m}` in the
/// class name and `-{m}` in the value.
pub struct Transforms;

impl UtilityFamily for Transforms {
    fn name(&self) -> &'static str {
        "transforms"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for axis in TRANSLATE_AXES {
            let function = format!("translate{}", axis.to_uppercase());
            for pct in TRANSLATE_PERCENTS {
                sheet.add_one(
                    format!(".translate-{}-{}", axis, pct),
                    "transform",
                    format!("{}({}%)", function, pct),
                    importance,
                );
            }
            for pct in TRANSLATE_PERCENTS_NEGATIVE {
                sheet.add_one(
                    format!(".translate-{}-n{}", axis, pct),
                    "transform",
                    format!("{}(-{}%)", function, pct),
                    importance,
                );
            }
        }

        for deg in ROTATIONS {
            sheet.add_one(format!(".rotate-{}", deg), "transform", format!("rotate({}deg)", deg), importance);
        }
        for deg in ROTATIONS_NEGATIVE {
            sheet.add_one(format!(".rotate-n{}", deg), "transform", format!("rotate(-{}deg)", deg), importance);
        }

        for scale in SCALES {
            sheet.add_one(
                format!(".scale-{}", scale),
                "transform",
                format!("scale({})", format_decimal(f64::from(*scale) / 100.0)),
                importance,
            );
        }
    }
}
