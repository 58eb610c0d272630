//! Computed-style seam between the engine and its host environment.
//!
//! Real hosts resolve properties against live page styles; headless hosts
//! and tests use the ordered-rule engine shipped here.

use indexmap::IndexMap;

use crate::dom::{Document, NodeId};

/// Resolves the computed value of a CSS property for one element.
pub trait StyleEngine {
    /// Computed value of `property` for `node`, or `None` when nothing
    /// applies. Inline styles take precedence over stylesheet rules.
    fn computed(&self, page: &Document, node: NodeId, property: &str) -> Option<String>;
}

/// One stylesheet rule: a simple selector plus its declarations.
///
/// Selectors cover the shapes the sampler relies on: `tag`, `.class`, and
/// `tag.class`.
#[derive(Debug, Clone)]
pub struct StyleRule {
    tag: Option<String>,
    class: Option<String>,
    declarations: IndexMap<String, String>,
}

impl StyleRule {
    #[must_use]
    pub fn new(selector: &str, declarations: &[(&str, &str)]) -> Self {
        let (tag, class) = match selector.split_once('.') {
            Some((tag, class)) => (non_empty(tag), non_empty(class)),
            None => (non_empty(selector), None),
        };
        Self {
            tag,
            class,
            declarations: declarations
                .iter()
                .map(|(property, value)| ((*property).to_owned(), (*value).to_owned()))
                .collect(),
        }
    }

    fn matches(&self, page: &Document, node: NodeId) -> bool {
        if self.tag.is_none() && self.class.is_none() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if page.tag(node) != tag {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !page.has_class(node, class) {
                return false;
            }
        }
        true
    }
}

fn non_empty(part: &str) -> Option<String> {
    let part = part.trim();
    (!part.is_empty()).then(|| part.to_ascii_lowercase())
}

/// Ordered-rule style engine: later rules win, inline style wins over all.
#[derive(Debug, Clone, Default)]
pub struct RuleStyleEngine {
    rules: Vec<StyleRule>,
}

impl RuleStyleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with_rule(mut self, selector: &str, declarations: &[(&str, &str)]) -> Self {
        self.push(StyleRule::new(selector, declarations));
        self
    }
}

impl StyleEngine for RuleStyleEngine {
    fn computed(&self, page: &Document, node: NodeId, property: &str) -> Option<String> {
        if let Some(value) = page.inline_style(node, property) {
            return Some(value.to_owned());
        }
        for rule in self.rules.iter().rev() {
            if rule.matches(page, node) {
                if let Some(value) = rule.declarations.get(property) {
                    return Some(value.clone());
                }
            }
        }
        None
    }
}
