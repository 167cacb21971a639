//! Markdown reference for the generated classes.
//!
//! Every value list in the guide is joined from the same tables the families
//! emit from, so the document cannot list classes the stylesheet lacks.

use crate::tables::*;
use std::fmt::Display;
use std::fmt::Write as _;
use std::ops::RangeInclusive;

/// `a|b|c`
fn alt<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|item| item.to_string()).collect::<Vec<_>>().join("|")
}

/// `1-12`
fn span(range: &RangeInclusive<u32>) -> String {
    format!("{}-{}", range.start(), range.end())
}

fn names<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Iterator<Item = &'a str> + 'a {
    pairs.iter().map(|(name, _)| *name)
}

/// Distinct values in first-seen order.
fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self { title, lines: Vec::new() }
    }

    fn item(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

fn sections() -> Vec<Section> {
    let direction_codes = SPACING_DIRECTIONS
        .iter()
        .map(|(code, props)| {
            let label = match *code {
                "" => "all",
                "x" => "horiz",
                "y" => "vert",
                _ => props[0].trim_start_matches("padding-"),
            };
            format!("`{}` ({})", code, label)
        })
        .collect::<Vec<_>>()
        .join(", ");
    let levels = SPACING_LEVELS.iter().map(|(_, v)| *v).collect::<Vec<_>>().join(", ");
    let (first_level, last_level) = (SPACING_LEVELS[0].0, SPACING_LEVELS[SPACING_LEVELS.len() - 1].0);

    let overflow_axis_values = distinct(AXIS_OVERFLOWS.iter().map(|(_, value)| *value));
    let radius_names = RADII.iter().filter(|(name, _)| !name.is_empty()).map(|(name, _)| *name);

    vec![
        Section::new("Spacing")
            .item("**Padding:** `.p{side}-{level}` or `.p{side}-{px}px`")
            .item("**Margin:** `.m{side}-{level}` or `.m{side}-{px}px` or `.m{side}-auto`")
            .item(format!("  - Sides: {}", direction_codes))
            .item(format!("  - Levels: {}-{} ({})", first_level, last_level, levels))
            .item(format!("  - Pixels: {}px", span(&PIXEL_SCALE))),
        Section::new("Display & Position")
            .item(format!("`.d-{{{}}}`", alt(DISPLAYS)))
            .item(format!("`.position-{{{}}}`", alt(POSITIONS)))
            .item(format!("`.{{{}}}-{{{}}}`", alt(SIDES), alt(OFFSETS))),
        Section::new("Overflow")
            .item(format!("`.overflow-{{{}}}`", alt(OVERFLOWS)))
            .item(format!(
                "`.overflow-x-{{{0}}}`, `.overflow-y-{{{0}}}`",
                alt(&overflow_axis_values)
            )),
        Section::new("Z-Index")
            .item(format!("`.z-{{{}|auto}}`", alt(Z_INDICES)))
            .item(format!("`.z-n{{{}}}` (negative)", alt(Z_INDICES_NEGATIVE))),
        Section::new("Object Fit & Position")
            .item(format!("`.object-fit-{{{}}}`", alt(OBJECT_FITS)))
            .item(format!("`.object-position-{{{}}}`", alt(OBJECT_POSITIONS))),
        Section::new("Aspect Ratio").item(format!("`.aspect-{{{}}}`", alt(names(ASPECT_RATIOS)))),
        Section::new("Flexbox")
            .item(format!("`.flex-{{{}}}`", alt(FLEX_DIRECTIONS)))
            .item(format!("`.flex-{{{}}}`", alt(FLEX_WRAPS)))
            .item(format!("`.justify-content-{{{}}}`", alt(JUSTIFY_CONTENTS)))
            .item(format!("`.align-items-{{{}}}`", alt(ALIGN_ITEMS)))
            .item(format!("`.align-content-{{{}}}`", alt(ALIGN_CONTENTS)))
            .item(format!("`.align-self-{{{}}}`", alt(ALIGN_SELFS)))
            .item(format!(
                "`.flex-grow-{{{0}}}`, `.flex-shrink-{{{0}}}`, `.flex-fill`",
                alt(FLEX_FACTORS)
            ))
            .item(format!("`.gap-{{{}}}` ({}rem steps)", span(&GAP_STEPS), GAP_STEP_REM))
            .item(format!(
                "`.order-{{{}|{}}}`",
                span(&ORDER_STEPS),
                alt(names(ORDER_KEYWORDS))
            )),
        Section::new("Grid")
            .item(format!("`.grid-cols-{{{}|none}}` (template columns)", span(&GRID_COLUMNS)))
            .item(format!("`.col-span-{{{}|full}}`", span(&GRID_COLUMNS)))
            .item(format!("`.grid-rows-{{{}|none}}` (template rows)", span(&GRID_ROWS)))
            .item(format!("`.row-span-{{{}|full}}`", span(&GRID_ROWS)))
            .item(format!("`.place-items-{{{}}}`", alt(PLACE_ITEMS)))
            .item(format!("`.place-content-{{{}}}`", alt(PLACE_CONTENTS)))
            .item(format!("`.place-self-{{{}}}`", alt(PLACE_SELFS))),
        Section::new("Typography")
            .item(format!("`.text-{{{}}}`", alt(TEXT_ALIGNS)))
            .item(format!("`.text-{{{}}}`", alt(TEXT_TRANSFORMS)))
            .item(format!("`.text-decoration-{{{}}}`", alt(TEXT_DECORATIONS)))
            .item(format!("`.text-{{{}}}`", alt(names(TEXT_WRAPS))))
            .item(format!(
                "`.fw-{{{}|{}-{}}}`",
                alt(FONT_WEIGHT_KEYWORDS),
                FONT_WEIGHT_NUMERIC[0],
                FONT_WEIGHT_NUMERIC[FONT_WEIGHT_NUMERIC.len() - 1]
            ))
            .item(format!("`.fs-{{1-{}}}` (headings scale)", FONT_SIZES.len()))
            .item("`.text-{color}`, `.bg-{color}` (using `var(--color-{name})`)")
            .item(format!("  - Colors: {}", COLORS.join(", ")))
            .item(format!("`.lh-{{{}}}` (line-height)", alt(names(LINE_HEIGHTS))))
            .item(format!("`.ls-{{{}}}` (letter-spacing)", alt(names(LETTER_SPACINGS))))
            .item(format!("`.font-{{{}}}`", alt(names(FONT_FAMILIES))))
            .item(format!("`.ws-{{{}}}` (white-space)", alt(WHITE_SPACES)))
            .item(format!(
                "{} (single line ellipsis)",
                TRUNCATE_CLASSES.iter().map(|c| format!("`.{}`", c)).collect::<Vec<_>>().join(", ")
            ))
            .item(format!("`.line-clamp-{{{}}}` (multi-line truncation)", span(&LINE_CLAMPS))),
        Section::new("Sizing")
            .item(format!("`.w-{{{0}|auto}}`, `.h-{{{0}|auto}}`", alt(SIZE_PERCENTS)))
            .item(format!("`.w-{{{0}}}px`, `.h-{{{0}}}px`", span(&PIXEL_SCALE)))
            .item("`.mw-100`, `.mh-100`, `.vw-100`, `.vh-100`")
            .item(format!(
                "`.min-w-{{{}}}`, `.min-h-{{{}}}`",
                alt(names(MIN_WIDTHS)),
                alt(names(MIN_HEIGHTS))
            ))
            .item(format!("`.max-w-{{{}}}`", alt(names(MAX_WIDTHS))))
            .item(format!("`.max-h-{{{}}}`", alt(names(MAX_HEIGHTS)))),
        Section::new("Borders")
            .item("`.border`, `.border-{side}`, `.border-0`, `.border-{side}-0`")
            .item(format!("  - Sides: {}", SIDES.join(", ")))
            .item("`.border-{color}`")
            .item(format!("`.rounded`, `.rounded-{{{}}}`", alt(radius_names))),
        Section::new("Effects")
            .item(format!("`.opacity-{{{}}}` (step {})", span(&OPACITY_PERCENTS), OPACITY_STEP))
            .item(format!("`.cursor-{{{}}}`", alt(CURSORS)))
            .item("`.visible`, `.invisible`"),
        Section::new("Transforms")
            .item(format!(
                "`.translate-{{{}}}-{{{}}}`",
                alt(TRANSLATE_AXES),
                alt(TRANSLATE_PERCENTS)
            ))
            .item(format!(
                "`.translate-{{{}}}-n{{{}}}` (negative)",
                alt(TRANSLATE_AXES),
                alt(TRANSLATE_PERCENTS_NEGATIVE)
            ))
            .item(format!(
                "`.rotate-{{{}}}`, `.rotate-n{{{}}}` (negative)",
                alt(ROTATIONS),
                alt(ROTATIONS_NEGATIVE)
            ))
            .item(format!("`.scale-{{{}}}`", alt(SCALES))),
        Section::new("Interaction")
            .item(format!("`.pointer-events-{{{}}}`", alt(POINTER_EVENTS)))
            .item(format!("`.user-select-{{{}}}`", alt(USER_SELECTS)))
            .item(format!("`.touch-action-{{{}}}`", alt(TOUCH_ACTIONS))),
        Section::new("Accessibility")
            .item("`.sr-only` (screen reader only)")
            .item("`.not-sr-only` (undo sr-only)"),
    ]
}

/// Render the full reference document.
pub fn render() -> String {
    let mut doc = String::from(
        "# CSS Utility Classes\n\n\
         This file is auto-generated. Do not edit manually.\n\n\
         ## Features\n\
         - **Suffix:** Add `-imp` to any class to apply `!important`.\n",
    );

    for section in sections() {
        let _ = write!(doc, "\n## {}\n", section.title);
        for line in section.lines {
            // Nested items carry their own indentation.
            if let Some(nested) = line.strip_prefix("  ") {
                let _ = writeln!(doc, "  {}", nested);
            } else {
                let _ = writeln!(doc, "- {}", line);
            }
        }
    }
    doc
}
