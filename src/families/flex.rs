use super::UtilityFamily;
use crate::rule::{format_decimal, Importance, RuleSheet};
use crate::tables::{
    flex_keyword, ALIGN_CONTENTS, ALIGN_ITEMS, ALIGN_SELFS, FLEX_DIRECTIONS, FLEX_FACTORS,
    FLEX_WRAPS, GAP_STEPS, GAP_STEP_REM, JUSTIFY_CONTENTS,
};

/// Flexbox direction, wrapping, alignment, grow/shrink and gap.
///
/// Alignment classes keep the logical `start`/`end` in their names but emit
/// `flex-start`/`flex-end`.
pub struct Flex;

impl UtilityFamily for Flex {
    fn name(&self) -> &'static str {
        "flex"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for direction in FLEX_DIRECTIONS {
            sheet.add_one(format!(".flex-{}", direction), "flex-direction", *direction, importance);
        }
        for wrap in FLEX_WRAPS {
            sheet.add_one(format!(".flex-{}", wrap), "flex-wrap", *wrap, importance);
        }

        let alignments: [(&str, &[&str]); 4] = [
            ("justify-content", JUSTIFY_CONTENTS),
            ("align-items", ALIGN_ITEMS),
            ("align-content", ALIGN_CONTENTS),
            ("align-self", ALIGN_SELFS),
        ];
        for (property, keywords) in alignments {
            for keyword in keywords {
                sheet.add_one(
                    format!(".{}-{}", property, keyword),
                    property,
                    flex_keyword(keyword),
                    importance,
                );
            }
        }

        for factor in FLEX_FACTORS {
            sheet.add_one(format!(".flex-grow-{}", factor), "flex-grow", factor.to_string(), importance);
            sheet.add_one(format!(".flex-shrink-{}", factor), "flex-shrink", factor.to_string(), importance);
        }

        sheet.add_one(".flex-fill", "flex", "1 1 auto", importance);

        for step in GAP_STEPS {
            let rem = format_decimal(step as f64 * GAP_STEP_REM);
            sheet.add_one(format!(".gap-{}", step), "gap", format!("{}rem", rem), importance);
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
    fn test_start_end_become_flex_keywords() {
        let sheet = Flex.rules(Importance::Normal);
        assert_eq!(
            value(&sheet, ".justify-content-start", "justify-content").as_deref(),
            Some("flex-start")
        );
        assert_eq!(value(&sheet, ".align-items-end", "align-items").as_deref(), Some("flex-end"));
        assert_eq!(
            value(&sheet, ".align-content-start", "align-content").as_deref(),
            Some("flex-start")
        );
        assert_eq!(value(&sheet, ".align-self-end", "align-self").as_deref(), Some("flex-end"));
        assert_eq!(value(&sheet, ".align-self-auto", "align-self").as_deref(), Some("auto"));
    }

    #[test]
    fn test_space_keywords_pass_through() {
        let sheet = Flex.rules(Importance::Normal);
        assert_eq!(
            value(&sheet, ".justify-content-space-between", "justify-content").as_deref(),
            Some("space-between")
        );
    }

    #[test]
    fn test_gap_scale() {
        let sheet = Flex.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".gap-0", "gap").as_deref(), Some("0.0rem"));
        assert_eq!(value(&sheet, ".gap-3", "gap").as_deref(), Some("0.75rem"));
        assert_eq!(value(&sheet, ".gap-4", "gap").as_deref(), Some("1.0rem"));
        assert_eq!(value(&sheet, ".gap-10", "gap").as_deref(), Some("2.5rem"));
        assert!(sheet.find(".gap-11").is_none());
    }

    #[test]
    fn test_grow_shrink_and_fill() {
        let sheet = Flex.rules(Importance::Important);
        assert_eq!(value(&sheet, ".flex-grow-1-imp", "flex-grow").as_deref(), Some("1 !important"));
        assert_eq!(value(&sheet, ".flex-shrink-0-imp", "flex-shrink").as_deref(), Some("0 !important"));
        assert_eq!(value(&sheet, ".flex-fill-imp", "flex").as_deref(), Some("1 1 auto !important"));
    }
}
