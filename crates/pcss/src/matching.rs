//! Selector matching against element metadata.
//!
//! - [`ElementMeta`]: The facts about an element a selector can test
//!
//! ## Selector Matching
//!
//! - Type selectors match `element.tag` (ASCII case-insensitive)
//! - Class selectors match any class in `element.classes`
//! - ID selectors match `element.id`
//! - Attribute selectors match presence, or an exact value
//! - Child and descendant combinators traverse the ancestor chain
//! - Sibling combinators never match; elements carry no sibling context

use crate::parser::{Combinator, ComplexSelector, CompoundSelector, Selector, SelectorList};

/// Metadata about an element used for selector matching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementMeta {
    /// The element's tag name (e.g., "div", "section").
    pub tag: String,
    /// The element's unique ID, if set (e.g., "main").
    pub id: Option<String>,
    /// The element's classes (e.g., ["scroller", "active"]).
    pub classes: Vec<String>,
    /// Other attributes as `(name, value)` pairs.
    pub attributes: Vec<(String, String)>,
}

impl ElementMeta {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Checks if this element matches a simple selector.
    pub fn matches_selector(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Type(name) => self.tag.eq_ignore_ascii_case(name),
            Selector::Id(id) => self.id.as_ref() == Some(id),
            Selector::Class(class) => self.classes.contains(class),
            Selector::Universal => true,
            Selector::Attribute(name, expected) => match (self.attribute(name), expected) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
                (None, None) => name == "id" && self.id.is_some(),
                (None, Some(expected)) => name == "id" && self.id.as_ref() == Some(expected),
            },
        }
    }

    pub fn matches_compound(&self, compound: &CompoundSelector) -> bool {
        compound.selectors.iter().all(|s| self.matches_selector(s))
    }

    /// Checks if this element matches a complex selector given its ancestors.
    /// Ancestors should be ordered from immediate parent to root.
    pub fn matches_complex(&self, complex: &ComplexSelector, ancestors: &[ElementMeta]) -> bool {
        let Some(subject) = complex.subject() else {
            return false;
        };

        if !self.matches_compound(subject) {
            return false;
        }

        match complex.parts.len() {
            1 => true,
            len => matches_ancestors(complex, len - 2, ancestors),
        }
    }

    /// Checks if this element matches any selector in the list.
    pub fn matches_list(&self, list: &SelectorList, ancestors: &[ElementMeta]) -> bool {
        list.selectors
            .iter()
            .any(|complex| self.matches_complex(complex, ancestors))
    }
}

/// Matches `complex.parts[..=index]` against `ancestors`, where the part at
/// `index` is joined to the already-matched part after it by its combinator.
fn matches_ancestors(complex: &ComplexSelector, index: usize, ancestors: &[ElementMeta]) -> bool {
    let part = &complex.parts[index];

    let continue_from = |position: usize| {
        index == 0 || matches_ancestors(complex, index - 1, &ancestors[position + 1..])
    };

    match part.combinator {
        Combinator::Child => ancestors
            .first()
            .is_some_and(|parent| parent.matches_compound(&part.compound) && continue_from(0)),
        Combinator::Descendant | Combinator::None => ancestors
            .iter()
            .enumerate()
            .any(|(position, ancestor)| {
                ancestor.matches_compound(&part.compound) && continue_from(position)
            }),
        Combinator::AdjacentSibling | Combinator::GeneralSibling => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_selector;

    fn meta(tag: &str, id: Option<&str>, classes: &[&str]) -> ElementMeta {
        ElementMeta {
            tag: tag.to_string(),
            id: id.map(String::from),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: Vec::new(),
        }
    }

    fn matches(selector: &str, element: &ElementMeta, ancestors: &[ElementMeta]) -> bool {
        let list = parse_selector(selector).unwrap();
        element.matches_list(&list, ancestors)
    }

    #[test]
    fn test_type_selector_is_case_insensitive() {
        assert!(matches("DIV", &meta("div", None, &[]), &[]));
    }

    #[test]
    fn test_compound_requires_every_selector() {
        let element = meta("div", Some("main"), &["scroller"]);
        assert!(matches("div.scroller#main", &element, &[]));
        assert!(!matches("div.other#main", &element, &[]));
    }

    #[test]
    fn test_child_requires_direct_parent() {
        let element = meta("div", None, &["panel"]);
        let parent = meta("section", None, &[]);
        let grandparent = meta("main", None, &[]);

        assert!(matches("section > .panel", &element, &[parent.clone(), grandparent.clone()]));
        assert!(!matches("main > .panel", &element, &[parent.clone(), grandparent.clone()]));
        assert!(matches("main .panel", &element, &[parent, grandparent]));
    }

    #[test]
    fn test_descendant_backtracks_past_child_mismatch() {
        // `main > section .panel` where the first section ancestor is not under main
        let element = meta("div", None, &["panel"]);
        let ancestors = vec![
            meta("section", None, &[]),
            meta("article", None, &[]),
            meta("section", None, &[]),
            meta("main", None, &[]),
        ];
        assert!(matches("main > section .panel", &element, &ancestors));
    }

    #[test]
    fn test_sibling_combinators_never_match() {
        let element = meta("div", None, &[]);
        assert!(!matches("p + div", &element, &[meta("p", None, &[])]));
    }

    #[test]
    fn test_attribute_selectors() {
        let mut element = meta("div", None, &[]);
        element.attributes.push(("data-scroll".to_string(), "y".to_string()));

        assert!(matches("[data-scroll]", &element, &[]));
        assert!(matches("[data-scroll=y]", &element, &[]));
        assert!(!matches("[data-scroll=x]", &element, &[]));
        assert!(!matches("[role]", &element, &[]));
    }
}
