use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{
    ASPECT_RATIOS, AXIS_OVERFLOWS, DISPLAYS, OBJECT_FITS, OBJECT_POSITIONS, OFFSETS, OVERFLOWS,
    POSITIONS, SIDES, Z_INDICES, Z_INDICES_NEGATIVE,
};

/// `.d-{keyword}`
pub struct Display;

impl UtilityFamily for Display {
    fn name(&self) -> &'static str {
        "display"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for display in DISPLAYS {
            sheet.add_one(format!(".d-{}", display), "display", *display, importance);
        }
    }
}

/// `.position-{keyword}` and percent offsets `.{side}-{0|50|100}`.
pub struct Position;

impl UtilityFamily for Position {
    fn name(&self) -> &'static str {
        "position"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for position in POSITIONS {
            sheet.add_one(format!(".position-{}", position), "position", *position, importance);
        }
        for side in SIDES {
            for offset in OFFSETS {
                sheet.add_one(format!(".{}-{}", side, offset), *side, format!("{}%", offset), importance);
            }
        }
    }
}

pub struct Overflow;

impl UtilityFamily for Overflow {
    fn name(&self) -> &'static str {
        "overflow"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for value in OVERFLOWS {
            sheet.add_one(format!(".overflow-{}", value), "overflow", *value, importance);
        }
        for (axis, value) in AXIS_OVERFLOWS {
            sheet.add_one(
                format!(".overflow-{}-{}", axis, value),
                format!("overflow-{}", axis),
                *value,
                importance,
            );
        }
    }
}

/// Stacking order, including `.z-n{m}` negatives.
pub struct ZIndex;

impl UtilityFamily for ZIndex {
    fn name(&self) -> &'static str {
        "z-index"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for z in Z_INDICES {
            sheet.add_one(format!(".z-{}", z), "z-index", z.to_string(), importance);
        }
        sheet.add_one(".z-auto", "z-index", "auto", importance);
        for z in Z_INDICES_NEGATIVE {
            sheet.add_one(format!(".z-n{}", z), "z-index", (-z).to_string(), importance);
        }
    }
}

/// `object-fit` and `object-position`.
pub struct ObjectFit;

impl UtilityFamily for ObjectFit {
    fn name(&self) -> &'static str {
        "object"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for fit in OBJECT_FITS {
            sheet.add_one(format!(".object-fit-{}", fit), "object-fit", *fit, importance);
        }
        for position in OBJECT_POSITIONS {
            sheet.add_one(
                format!(".object-position-{}", position),
                "object-position",
                position.replace('-', " "),
                importance,
            );
        }
    }
}

pub struct AspectRatio;

impl UtilityFamily for AspectRatio {
    fn name(&self) -> &'static str {
        "aspect-ratio"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for (name, ratio) in ASPECT_RATIOS {
            sheet.add_one(format!(".aspect-{}", name), "aspect-ratio", *ratio, importance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(sheet: &RuleSheet, selector: &str, property: &str) -> Option<String> {
        sheet.find(selector).and_then(|rule| rule.rendered_value(property))
    }

    #[test]
    fn test_display_keywords() {
        let sheet = Display.rules(Importance::Normal);
        assert_eq!(sheet.len(), DISPLAYS.len());
        assert_eq!(value(&sheet, ".d-inline-flex", "display").as_deref(), Some("inline-flex"));
    }

    #[test]
    fn test_position_offsets() {
        let sheet = Position.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".position-sticky", "position").as_deref(), Some("sticky"));
        assert_eq!(value(&sheet, ".left-50", "left").as_deref(), Some("50%"));
        assert_eq!(value(&sheet, ".bottom-0", "bottom").as_deref(), Some("0%"));
    }

    #[test]
    fn test_axis_overflow() {
        let sheet = Overflow.rules(Importance::Important);
        assert_eq!(
            value(&sheet, ".overflow-y-scroll-imp", "overflow-y").as_deref(),
            Some("scroll !important")
        );
    }

    #[test]
    fn test_negative_z_index() {
        let sheet = ZIndex.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".z-n10", "z-index").as_deref(), Some("-10"));
        assert_eq!(value(&sheet, ".z-n1", "z-index").as_deref(), Some("-1"));
        assert_eq!(value(&sheet, ".z-auto", "z-index").as_deref(), Some("auto"));
    }

    #[test]
    fn test_object_position_spaces() {
        let sheet = ObjectFit.rules(Importance::Normal);
        assert_eq!(
            value(&sheet, ".object-position-bottom-right", "object-position").as_deref(),
            Some("bottom right")
        );
    }

    #[test]
    fn test_aspect_ratio_snapshot() {
        let css: String = AspectRatio.rules(Importance::Normal).iter().map(|r| r.to_string()).collect();
        insta::assert_snapshot!(css, @".aspect-square {aspect-ratio: 1 / 1;}.aspect-video {aspect-ratio: 16 / 9;}.aspect-4-3 {aspect-ratio: 4 / 3;}.aspect-3-2 {aspect-ratio: 3 / 2;}.aspect-16-9 {aspect-ratio: 16 / 9;}.aspect-21-9 {aspect-ratio: 21 / 9;}.aspect-1 {aspect-ratio: 1 / 1;}");
    }
}
