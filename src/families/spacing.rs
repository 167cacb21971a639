use super::UtilityFamily;
use crate::rule::{Importance, RuleSheet};
use crate::tables::{PIXEL_SCALE, SPACING_DIRECTIONS, SPACING_LEVELS};

/// Padding and margin classes: `.p{dir}-{level}`, `.m{dir}-{px}px`, `.m{dir}-auto`.
///
/// A class only ever sets properties of its own kind; `.px-2` never touches
/// margins.
pub struct Spacing;

impl UtilityFamily for Spacing {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn emit(&self, sheet: &mut RuleSheet, importance: Importance) {
        for (level, value) in SPACING_LEVELS {
            emit_scale_step(sheet, &level.to_string(), value, importance);
        }

        for px in PIXEL_SCALE {
            emit_scale_step(sheet, &format!("{}px", px), &format!("{}px", px), importance);
        }

        for (code, props) in SPACING_DIRECTIONS {
            emit_kind(sheet, "m", "margin", code, props, "auto", "auto", importance);
        }
    }
}

fn emit_scale_step(sheet: &mut RuleSheet, suffix: &str, value: &str, importance: Importance) {
    for (code, props) in SPACING_DIRECTIONS {
        emit_kind(sheet, "p", "padding", code, props, suffix, value, importance);
        emit_kind(sheet, "m", "margin", code, props, suffix, value, importance);
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_kind(
    sheet: &mut RuleSheet,
    prefix: &str,
    kind: &str,
    code: &str,
    props: &[&str],
    suffix: &str,
    value: &str,
    importance: Importance,
) {
    let matching: Vec<_> = props.iter().filter(|p| p.starts_with(kind)).collect();
    if matching.is_empty() {
        return;
    }
    sheet.add(
        format!(".{}{}-{}", prefix, code, suffix),
        matching.into_iter().map(|p| (*p, value)),
        importance,
    );
}
