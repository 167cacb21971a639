//! Turns a [`RuleSheet`] into stylesheet text.
//!
//! Minification is a plain textual pass, not a CSS minifier: it only strips
//! the spaces after `:` and `;`, before `{` and after `}`.

use crate::rule::RuleSheet;

/// Ordered `(from, to)` replacements applied by [`minify`].
const MINIFY_REPLACEMENTS: [(&str, &str); 4] = [(": ", ":"), ("; ", ";"), (" {", "{"), ("} ", "}")];

/// Concatenate every rule, without separators, in sheet order.
pub fn concatenate(sheet: &RuleSheet) -> String {
    sheet.iter().map(|rule| rule.to_string()).collect()
}

/// Apply the four whitespace replacements, in order.
pub fn minify(css: &str) -> String {
    MINIFY_REPLACEMENTS
        .iter()
        .fold(css.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

/// Render the sheet as minified text, or one rule per line when `pretty`.
pub fn serialize(sheet: &RuleSheet, pretty: bool) -> String {
    if pretty {
        let mut out = sheet.iter().map(|rule| rule.to_string()).collect::<Vec<_>>().join("\n");
        out.push('\n');
        out
    } else {
        minify(&concatenate(sheet))
    }
}
