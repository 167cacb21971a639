use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{
    distribution_keyword, GRID_COLUMNS, GRID_ROWS, ORDER_KEYWORDS, ORDER_STEPS, PLACE_CONTENTS,
    PLACE_ITEMS, PLACE_SELFS,
};

/// Ordering, grid templates, spans and the `place-*` shorthands.
pub struct FlexGridExtended;

impl UtilityFamily for FlexGridExtended {
    fn name(&self) -> &'static str {
        "flexgrid-extended"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for step in ORDER_STEPS {
            sheet.add_one(format!(".order-{}", step), "order", step.to_string(), importance);
        }
        for (name, value) in ORDER_KEYWORDS {
            sheet.add_one(format!(".order-{}", name), "order", *value, importance);
        }

        emit_track(sheet, "cols", "col", "grid-template-columns", "grid-column", GRID_COLUMNS, importance);
        emit_track(sheet, "rows", "row", "grid-template-rows", "grid-row", GRID_ROWS, importance);

        for value in PLACE_ITEMS {
            sheet.add_one(format!(".place-items-{}", value), "place-items", *value, importance);
        }
        for value in PLACE_CONTENTS {
            sheet.add_one(
                format!(".place-content-{}", value),
                "place-content",
                distribution_keyword(value),
                importance,
            );
        }
        for value in PLACE_SELFS {
            sheet.add_one(format!(".place-self-{}", value), "place-self", *value, importance);
        }
    }
}

/// `.grid-{tracks}-{n}` templates followed by `.{span}-span-{n}` spans, each
/// closed by its `none` / `full` keyword.
fn emit_track(
    sheet: &mut RuleSheet,
    tracks: &str,
    span: &str,
    template_property: &str,
    span_property: &str,
    range: std::ops::RangeInclusive<u32>,
    importance: Importance,
) {
    for n in range.clone() {
        sheet.add_one(
            format!(".grid-{}-{}", tracks, n),
            template_property,
            format!("repeat({}, minmax(0, 1fr))", n),
            importance,
        );
    }
    sheet.add_one(format!(".grid-{}-none", tracks), template_property, "none", importance);

    for n in range {
        sheet.add_one(
            format!(".{}-span-{}", span, n),
            span_property,
            format!("span {} / span {}", n, n),
            importance,
        );
    }
    sheet.add_one(format!(".{}-span-full", span), span_property, "1 / -1", importance);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(sheet: &RuleSheet, selector: &str, property: &str) -> Option<String> {
        sheet.find(selector).and_then(|rule| rule.rendered_value(property))
    }

    #[test]
    fn test_order() {
        let sheet = FlexGridExtended.rules(Importance::Normal);
        assert_eq!(value(&sheet, ".order-12", "order").as_deref(), Some("12"));
        assert_eq!(value(&sheet, ".order-first", "order").as_deref(), Some("-9999"));
        assert_eq!(value(&sheet, ".order-none", "order").as_deref(), Some("0"));
        assert!(sheet.find(".order-13").is_none());
    }

    #[test]
    fn test_grid_templates_and_spans() {
        let sheet = FlexGridExtended.rules(Importance::Normal);
        assert_eq!(
            value(&sheet, ".grid-cols-12", "grid-template-columns").as_deref(),
            Some("repeat(12, minmax(0, 1fr))")
        );
        assert_eq!(value(&sheet, ".col-span-3", "grid-column").as_deref(), Some("span 3 / span 3"));
        assert_eq!(value(&sheet, ".row-span-full", "grid-row").as_deref(), Some("1 / -1"));
        assert!(sheet.find(".grid-rows-7").is_none());
        assert!(sheet.find(".grid-rows-6").is_some());
    }

    #[test]
    fn test_place_content_distribution() {
        let sheet = FlexGridExtended.rules(Importance::Normal);
        assert_eq!(
            value(&sheet, ".place-content-between", "place-content").as_deref(),
            Some("space-between")
        );
        assert_eq!(
            value(&sheet, ".place-content-evenly", "place-content").as_deref(),
            Some("space-evenly")
        );
        assert_eq!(value(&sheet, ".place-content-start", "place-content").as_deref(), Some("start"));
    }

    #[test]
    fn test_emission_order_of_tracks() {
        let sheet = FlexGridExtended.rules(Importance::Normal);
        let selectors: Vec<_> = sheet.iter().map(|r| r.selector.as_str()).collect();
        let cols_none = selectors.iter().position(|s| *s == ".grid-cols-none").unwrap();
        assert_eq!(selectors[cols_none + 1], ".col-span-1");
        let col_full = selectors.iter().position(|s| *s == ".col-span-full").unwrap();
        assert_eq!(selectors[col_full + 1], ".grid-rows-1");
    }
}
