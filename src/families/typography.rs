use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{
    color_var, COLORS, FONT_FAMILIES, FONT_SIZES, FONT_WEIGHT_KEYWORDS, FONT_WEIGHT_NUMERIC,
    LETTER_SPACINGS, LINE_CLAMPS, LINE_HEIGHTS, TEXT_ALIGNS, TEXT_DECORATIONS, TEXT_TRANSFORMS,
    TEXT_WRAPS, TRUNCATE_CLASSES, WHITE_SPACES,
};

/// Text alignment, transform, decoration, weight, size and the color pairs.
///
/// `text-align` keeps `start`/`end` untouched, unlike the flex family.
pub struct Typography;

impl UtilityFamily for Typography {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for align in TEXT_ALIGNS {
            sheet.add_one(format!(".text-{}", align), "text-align", *align, importance);
        }
        for transform in TEXT_TRANSFORMS {
            sheet.add_one(format!(".text-{}", transform), "text-transform", *transform, importance);
        }
        for decoration in TEXT_DECORATIONS {
            sheet.add_one(
                format!(".text-decoration-{}", decoration),
                "text-decoration",
                *decoration,
                importance,
            );
        }
        for (name, white_space) in TEXT_WRAPS {
            sheet.add_one(format!(".text-{}", name), "white-space", *white_space, importance);
        }

        for weight in FONT_WEIGHT_KEYWORDS {
            sheet.add_one(format!(".fw-{}", weight), "font-weight", *weight, importance);
        }
        for weight in FONT_WEIGHT_NUMERIC {
            sheet.add_one(format!(".fw-{}", weight), "font-weight", weight.to_string(), importance);
        }

        for (level, size) in FONT_SIZES {
            sheet.add_one(format!(".fs-{}", level), "font-size", *size, importance);
        }

        for color in COLORS {
            sheet.add_one(format!(".text-{}", color), "color", color_var(color), importance);
            sheet.add_one(format!(".bg-{}", color), "background-color", color_var(color), importance);
        }
    }
}

/// Line height, letter spacing, font stacks, truncation, white-space and
/// multi-line clamping.
pub struct TypographyExtended;

impl UtilityFamily for TypographyExtended {
    fn name(&self) -> &'static str {
        "typography-extended"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for (name, height) in LINE_HEIGHTS {
            sheet.add_one(format!(".lh-{}", name), "line-height", *height, importance);
        }
        for (name, spacing) in LETTER_SPACINGS {
            sheet.add_one(format!(".ls-{}", name), "letter-spacing", *spacing, importance);
        }
        for (name, stack) in FONT_FAMILIES {
            sheet.add_one(format!(".font-{}", name), "font-family", *stack, importance);
        }

        for class in TRUNCATE_CLASSES {
            sheet.add(
                format!(".{}", class),
                [
                    ("overflow", "hidden"),
                    ("text-overflow", "ellipsis"),
                    ("white-space", "nowrap"),
                ],
                importance,
            );
        }

        for white_space in WHITE_SPACES {
            sheet.add_one(format!(".ws-{}", white_space), "white-space", *white_space, importance);
        }

        for lines in LINE_CLAMPS {
            sheet.add(
                format!(".line-clamp-{}", lines),
                [
                    ("display", "-webkit-box".to_string()),
                    ("-webkit-line-clamp", lines.to_string()),
                    ("-webkit-box-orient", "vertical".to_string()),
                    ("overflow", "hidden".to_string()),
                ],
                importance,
            );
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
    fn test_text_align_keeps_logical_keywords() {
        let sheet = Typography.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".text-start", "text-align").as_deref(), Some("start"));
        assert_eq!(value(&sheet, ".text-end", "text-align").as_deref(), Some("end"));
    }

    #[test]
    fn test_wrap_helpers() {
        let sheet = Typography.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".text-wrap", "white-space").as_deref(), Some("normal"));
        assert_eq!(value(&sheet, ".text-break", "white-space").as_deref(), Some("break-word"));
    }

    #[test]
    fn test_font_weights() {
        let sheet = Typography.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".fw-lighter", "font-weight").as_deref(), Some("lighter"));
        assert_eq!(value(&sheet, ".fw-100", "font-weight").as_deref(), Some("100"));
        assert_eq!(value(&sheet, ".fw-900", "font-weight").as_deref(), Some("900"));
        assert!(sheet.find(".fw-1000").is_none());
    }

    #[test]
    fn test_line_clamp_declarations() {
        let sheet = TypographyExtended.rules(Importance::Normal);
        let rule = sheet.find(".line-clamp-3").unwrap();
        let props: Vec<_> = rule.declarations.keys().map(String::as_str).collect();
        assert_eq!(
            props,
            vec!["display", "-webkit-line-clamp", "-webkit-box-orient", "overflow"]
        );
        assert_eq!(rule.declarations["-webkit-line-clamp"], "3");
        assert!(sheet.find(".line-clamp-7").is_none());
    }

    #[test]
    fn test_truncate_aliases_match() {
        let sheet = TypographyExtended.rules(Importance::Important);
        let a = sheet.find(".text-truncate-imp").unwrap();
        let b = sheet.find(".truncate-imp").unwrap();
        assert_eq!(a.declarations, b.declarations);
    }

    #[test]
    fn test_letter_spacing_negative_values() {
        let sheet = TypographyExtended.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".ls-tighter", "letter-spacing").as_deref(), Some("-0.05em"));
    }
}
