//! Static vocabularies the stylesheet is generated from.
//!
//! Everything here is fixed at compile time; changing the generated classes
//! means editing these tables. Order matters: it is the emission order.

/// Spacing direction codes and the properties each one controls.
/// `s`/`e` map to left/right (LTR).
pub const SPACING_DIRECTIONS: &[(&str, &[&str])] = &[
    ("", &["padding", "margin"]),
    ("t", &["padding-top", "margin-top"]),
    ("b", &["padding-bottom", "margin-bottom"]),
    ("s", &["padding-left", "margin-left"]),
    ("e", &["padding-right", "margin-right"]),
    ("x", &["padding-left", "padding-right", "margin-left", "margin-right"]),
    ("y", &["padding-top", "padding-bottom", "margin-top", "margin-bottom"]),
];

/// Spacing levels 0-6.
pub const SPACING_LEVELS: &[(u8, &str)] = &[
    (0, "0"),
    (1, "0.25rem"),
    (2, "0.5rem"),
    (3, "1rem"),
    (4, "1.5rem"),
    (5, "3rem"),
    (6, "4rem"),
];

/// Inclusive range of the pixel spacing and sizing scales.
pub const PIXEL_SCALE: std::ops::RangeInclusive<u32> = 1..=100;

/// Color tokens, each backed by `var(--color-{name})`.
pub const COLORS: &[&str] = &[
    "primary", "secondary", "success", "danger", "warning", "info", "light", "dark", "white",
    "black", "muted", "body", "surface",
];

pub const DISPLAYS: &[&str] = &[
    "none",
    "inline",
    "inline-block",
    "block",
    "grid",
    "table",
    "flex",
    "inline-flex",
];

pub const POSITIONS: &[&str] = &["static", "relative", "absolute", "fixed", "sticky"];

pub const SIDES: &[&str] = &["top", "bottom", "left", "right"];

/// Percent offsets for `.top-*`, `.left-*`, ...
pub const OFFSETS: &[u32] = &[0, 50, 100];

pub const FLEX_DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
pub const FLEX_WRAPS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

pub const JUSTIFY_CONTENTS: &[&str] = &[
    "start",
    "end",
    "center",
    "space-between",
    "space-around",
    "space-evenly",
];
pub const ALIGN_ITEMS: &[&str] = &["start", "end", "center", "baseline", "stretch"];
pub const ALIGN_CONTENTS: &[&str] = &[
    "start",
    "end",
    "center",
    "space-between",
    "space-around",
    "stretch",
];
pub const ALIGN_SELFS: &[&str] = &["auto", "start", "end", "center", "baseline", "stretch"];

pub const FLEX_FACTORS: &[u8] = &[0, 1];

/// Gap steps; each step is 0.25rem.
pub const GAP_STEPS: std::ops::RangeInclusive<u32> = 0..=10;
pub const GAP_STEP_REM: f64 = 0.25;

pub const TEXT_ALIGNS: &[&str] = &["start", "end", "center", "justify"];
pub const TEXT_TRANSFORMS: &[&str] = &["lowercase", "uppercase", "capitalize"];
pub const TEXT_DECORATIONS: &[&str] = &["none", "underline", "line-through"];

/// `.text-{name}` wrap helpers and the white-space value they set.
pub const TEXT_WRAPS: &[(&str, &str)] = &[
    ("wrap", "normal"),
    ("nowrap", "nowrap"),
    ("break", "break-word"),
];

pub const FONT_WEIGHT_KEYWORDS: &[&str] = &["light", "lighter", "normal", "bold", "bolder"];
pub const FONT_WEIGHT_NUMERIC: &[u32] = &[100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Heading scale, `fs-1` is the largest.
pub const FONT_SIZES: &[(u8, &str)] = &[
    (1, "2.5rem"),
    (2, "2rem"),
    (3, "1.75rem"),
    (4, "1.5rem"),
    (5, "1.25rem"),
    (6, "1rem"),
];

/// Percent sizes for `.w-*` / `.h-*`; `auto` is handled separately.
pub const SIZE_PERCENTS: &[u32] = &[25, 50, 75, 100];

pub const BORDER_VALUE: &str = "1px solid var(--border-default)";

pub const RADII: &[(&str, &str)] = &[
    ("", "var(--radius-md)"),
    ("0", "0"),
    ("circle", "50%"),
    ("pill", "50rem"),
    ("sm", "var(--radius-sm)"),
    ("lg", "var(--radius-lg)"),
    ("xl", "var(--radius-xl)"),
];

/// Opacity percentages, walked in steps of [`OPACITY_STEP`].
pub const OPACITY_PERCENTS: std::ops::RangeInclusive<u32> = 0..=100;
pub const OPACITY_STEP: usize = 5;

pub const CURSORS: &[&str] = &["auto", "default", "pointer", "text", "wait", "move", "not-allowed"];

pub const OVERFLOWS: &[&str] = &["hidden", "scroll", "auto", "visible"];

/// Per-axis overflow classes, in emission order.
pub const AXIS_OVERFLOWS: &[(&str, &str)] = &[
    ("x", "auto"),
    ("y", "auto"),
    ("x", "hidden"),
    ("y", "hidden"),
    ("x", "scroll"),
    ("y", "scroll"),
];

pub const Z_INDICES: &[i32] = &[0, 10, 20, 30, 40, 50];
pub const Z_INDICES_NEGATIVE: &[i32] = &[1, 10];

pub const OBJECT_FITS: &[&str] = &["cover", "contain", "fill", "none", "scale-down"];
pub const OBJECT_POSITIONS: &[&str] = &[
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "top-left",
    "top-right",
    "bottom-left",
    "bottom-right",
];

pub const ASPECT_RATIOS: &[(&str, &str)] = &[
    ("square", "1 / 1"),
    ("video", "16 / 9"),
    ("4-3", "4 / 3"),
    ("3-2", "3 / 2"),
    ("16-9", "16 / 9"),
    ("21-9", "21 / 9"),
    ("1", "1 / 1"),
];

pub const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("1", "1"),
    ("sm", "1.25"),
    ("base", "1.5"),
    ("lg", "1.75"),
    ("xl", "2"),
];

pub const LETTER_SPACINGS: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("sans", "var(--font-sans, system-ui, -apple-system, sans-serif)"),
    ("serif", "var(--font-serif, Georgia, serif)"),
    ("mono", "var(--font-mono, ui-monospace, monospace)"),
];

/// Single-line ellipsis helpers; both names share one declaration set.
pub const TRUNCATE_CLASSES: &[&str] = &["text-truncate", "truncate"];

pub const WHITE_SPACES: &[&str] = &["normal", "nowrap", "pre", "pre-wrap", "pre-line", "break-spaces"];

pub const LINE_CLAMPS: std::ops::RangeInclusive<u32> = 1..=6;

pub const POINTER_EVENTS: &[&str] = &["none", "auto"];
pub const USER_SELECTS: &[&str] = &["none", "text", "all", "auto"];
pub const TOUCH_ACTIONS: &[&str] = &["none", "pan-x", "pan-y", "manipulation", "auto"];

pub const TRANSLATE_AXES: &[&str] = &["x", "y"];
pub const TRANSLATE_PERCENTS: &[u32] = &[0, 25, 50, 100];
pub const TRANSLATE_PERCENTS_NEGATIVE: &[u32] = &[25, 50, 100];

pub const ROTATIONS: &[u32] = &[0, 45, 90, 180, 270];
pub const ROTATIONS_NEGATIVE: &[u32] = &[45, 90, 180];

/// Scale percentages; the value is the percentage over 100.
pub const SCALES: &[u32] = &[0, 50, 75, 90, 95, 100, 105, 110, 125, 150];

pub const MIN_WIDTHS: &[(&str, &str)] = &[("0", "0"), ("full", "100%")];
pub const MIN_HEIGHTS: &[(&str, &str)] = &[("0", "0"), ("full", "100%"), ("screen", "100vh")];

/// Container widths for `.max-w-*`.
pub const MAX_WIDTHS: &[(&str, &str)] = &[
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("prose", "65ch"),
    ("screen-sm", "640px"),
    ("screen-md", "768px"),
    ("screen-lg", "1024px"),
    ("screen-xl", "1280px"),
];

pub const MAX_HEIGHTS: &[(&str, &str)] = &[("full", "100%"), ("screen", "100vh")];

pub const ORDER_STEPS: std::ops::RangeInclusive<u32> = 0..=12;
pub const ORDER_KEYWORDS: &[(&str, &str)] = &[("first", "-9999"), ("last", "9999"), ("none", "0")];

pub const GRID_COLUMNS: std::ops::RangeInclusive<u32> = 1..=12;
pub const GRID_ROWS: std::ops::RangeInclusive<u32> = 1..=6;

pub const PLACE_ITEMS: &[&str] = &["center", "start", "end", "stretch"];
pub const PLACE_CONTENTS: &[&str] = &["center", "start", "end", "stretch", "between", "around", "evenly"];
pub const PLACE_SELFS: &[&str] = &["center", "start", "end", "stretch", "auto"];

pub const SR_ONLY: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("width", "1px"),
    ("height", "1px"),
    ("padding", "0"),
    ("margin", "-1px"),
    ("overflow", "hidden"),
    ("clip", "rect(0, 0, 0, 0)"),
    ("white-space", "nowrap"),
    ("border-width", "0"),
];

pub const NOT_SR_ONLY: &[(&str, &str)] = &[
    ("position", "static"),
    ("width", "auto"),
    ("height", "auto"),
    ("padding", "0"),
    ("margin", "0"),
    ("overflow", "visible"),
    ("clip", "auto"),
    ("white-space", "normal"),
];

/// CSS custom property backing a color token.
pub fn color_var(name: &str) -> String {
    format!("var(--color-{})", name)
}

/// Translate logical `start`/`end` to the flexbox keywords.
/// Only used for the justify/align families; `text-align` keeps them as-is.
pub fn flex_keyword(keyword: &str) -> String {
    match keyword {
        "start" | "end" => format!("flex-{}", keyword),
        other => other.to_string(),
    }
}

/// Translate the short distribution keywords to their `space-*` form.
pub fn distribution_keyword(keyword: &str) -> String {
    match keyword {
        "between" | "around" | "evenly" => format!("space-{}", keyword),
        other => other.to_string(),
    }
}
