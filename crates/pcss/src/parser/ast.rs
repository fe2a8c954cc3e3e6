#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Type(String),
    Class(String),
    Id(String),
    Universal,
    /// `[name]` when the value is `None`, `[name=value]` otherwise.
    Attribute(String, Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }
}

/// Relationship between a selector part and the part that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    None,
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    pub combinator: Combinator,
}

impl SelectorPart {
    pub fn new(compound: CompoundSelector, combinator: Combinator) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    pub fn new(parts: Vec<SelectorPart>) -> Self {
        Self { parts }
    }

    /// The compound the matched element itself must satisfy.
    pub fn subject(&self) -> Option<&CompoundSelector> {
        self.parts.last().map(|part| &part.compound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn new(selectors: Vec<ComplexSelector>) -> Self {
        Self { selectors }
    }
}
