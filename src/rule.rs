//! Rule model shared by every utility family.
//!
//! A [`Rule`] is one `selector { declarations }` block. Families append rules
//! to a [`RuleSheet`], which keeps them in emission order since later rules
//! with equal specificity override earlier ones.

use indexmap::IndexMap;
use std::fmt;

/// Whether a rule is emitted in its plain form or as the `-imp` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Importance {
    Normal,
    Important,
}

impl Importance {
    /// Both variants, in the order the pipeline emits them.
    pub const ALL: [Importance; 2] = [Importance::Normal, Importance::Important];

    pub fn is_important(self) -> bool {
        matches!(self, Importance::Important)
    }

    /// Class-name suffix for this variant.
    pub fn selector_suffix(self) -> &'static str {
        match self {
            Importance::Normal => "",
            Importance::Important => "-imp",
        }
    }

    /// Suffix appended to every declaration value.
    pub fn value_suffix(self) -> &'static str {
        match self {
            Importance::Normal => "",
            Importance::Important => " !important",
        }
    }
}

/// One generated CSS block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Base class selector, including the leading `.`
    pub selector: String,
    /// Ordered property -> value mapping
    pub declarations: IndexMap<String, String>,
    pub importance: Importance,
}

impl Rule {
    pub fn new(selector: impl Into<String>, importance: Importance) -> Self {
        Self {
            selector: selector.into(),
            declarations: IndexMap::new(),
            importance,
        }
    }

    /// Add a declaration, builder style.
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.insert(property.into(), value.into());
        self
    }

    /// Selector as it appears in the output, `-imp` suffix included.
    pub fn full_selector(&self) -> String {
        format!("{}{}", self.selector, self.importance.selector_suffix())
    }

    /// Declaration value as it appears in the output, `!important` included.
    pub fn rendered_value(&self, property: &str) -> Option<String> {
        self.declarations
            .get(property)
            .map(|value| format!("{}{}", value, self.importance.value_suffix()))
    }
}

impl fmt::Display for Rule {
    /// Renders `.sel {prop: value;prop: value;}` before minification.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.full_selector())?;
        for (property, value) in &self.declarations {
            write!(f, "{}: {}{};", property, value, self.importance.value_suffix())?;
        }
        f.write_str("}")
    }
}

/// Ordered sequence of generated rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSheet {
    rules: Vec<Rule>,
}

impl RuleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with the given declarations.
    pub fn add<P, V, I>(&mut self, selector: impl Into<String>, declarations: I, importance: Importance)
    where
        P: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (P, V)>,
    {
        let mut rule = Rule::new(selector, importance);
        for (property, value) in declarations {
            rule.declarations.insert(property.into(), value.into());
        }
        self.rules.push(rule);
    }

    /// Append a single-declaration rule.
    pub fn add_one(
        &mut self,
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
        importance: Importance,
    ) {
        self.rules.push(Rule::new(selector, importance).declare(property, value));
    }

    /// Move every rule of `other` to the end of this sheet.
    pub fn extend(&mut self, other: RuleSheet) {
        self.rules.extend(other.rules);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose rendered selector matches, e.g. `.p-1-imp`.
    pub fn find(&self, full_selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.full_selector() == full_selector)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Format a computed decimal the way the stylesheet has always carried them:
/// shortest round-trip digits, with integral values keeping a trailing `.0`.
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
