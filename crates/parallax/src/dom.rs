//! An in-memory [`Document`] for hosts without a browser.
//!
//! Elements live in an arena addressed by [`ElementId`]. Document order is a
//! pre-order walk from the root `body` element; selector lookups walk that
//! order with an ancestor stack so combinators can be matched.

use pcss::parser::parse_selector;
use pcss::types::to_kebab_case;
use pcss::{ElementMeta, PcssError};

use crate::document::{Document, ElementId, ListenerId, ScrollEvent, ScrollSource};

#[derive(Debug, Clone)]
struct Node {
    meta: ElementMeta,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Insertion-ordered so serialization is stable.
    styles: Vec<(String, String)>,
    scroll_top: f64,
}

impl Node {
    fn new(meta: ElementMeta, parent: Option<ElementId>) -> Self {
        Self {
            meta,
            parent,
            children: Vec::new(),
            styles: Vec::new(),
            scroll_top: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    viewport_scroll_y: f64,
    listeners: Vec<(ListenerId, ScrollSource)>,
    next_listener: usize,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Creates a document containing only the `body` element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ElementMeta::new("body"), None)],
            viewport_scroll_y: 0.0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn body(&self) -> ElementId {
        ElementId::new(0)
    }

    /// Appends a new element under `parent`.
    ///
    /// An unknown `parent` attaches the element to `body`.
    pub fn append_child(&mut self, parent: ElementId, meta: ElementMeta) -> ElementId {
        let parent = if parent.index() < self.nodes.len() {
            parent
        } else {
            self.body()
        };
        let id = ElementId::new(self.nodes.len());
        self.nodes.push(Node::new(meta, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn meta(&self, element: ElementId) -> Option<&ElementMeta> {
        self.nodes.get(element.index()).map(|node| &node.meta)
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(element.index()).and_then(|node| node.parent)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(element.index())
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Current value of a camelCase style property.
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.nodes.get(element.index()).and_then(|node| {
            node.styles
                .iter()
                .find(|(name, _)| name == property)
                .map(|(_, value)| value.as_str())
        })
    }

    /// Serializes inline styles as a `style` attribute would read.
    pub fn style_attribute(&self, element: ElementId) -> String {
        self.nodes
            .get(element.index())
            .map(|node| {
                node.styles
                    .iter()
                    .map(|(name, value)| format!("{}: {};", to_kebab_case(name), value))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Moves `source` to `offset` and returns the event a browser would fire.
    pub fn scroll_to(&mut self, source: ScrollSource, offset: f64) -> ScrollEvent {
        match source {
            ScrollSource::Viewport => self.viewport_scroll_y = offset,
            ScrollSource::Element(element) => {
                if let Some(node) = self.nodes.get_mut(element.index()) {
                    node.scroll_top = offset;
                }
            }
        }
        ScrollEvent::native(source)
    }

    /// Listeners registered on `source`, in registration order.
    pub fn listeners_for(&self, source: ScrollSource) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, registered)| *registered == source)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Pre-order walk from `body`.
    fn document_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.body()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// Ancestor metadata from immediate parent to root.
    fn ancestors(&self, element: ElementId) -> Vec<ElementMeta> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(element);
        while let Some(id) = current {
            ancestors.push(self.nodes[id.index()].meta.clone());
            current = self.parent(id);
        }
        ancestors
    }
}

impl Document for Dom {
    fn query_selector(&self, selector: &str) -> Result<Option<ElementId>, PcssError> {
        let list = parse_selector(selector)?;
        Ok(self.document_order().into_iter().find(|&id| {
            let ancestors = self.ancestors(id);
            self.nodes[id.index()].meta.matches_list(&list, &ancestors)
        }))
    }

    fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.document_order()
            .into_iter()
            .find(|element| self.nodes[element.index()].meta.id.as_deref() == Some(id))
    }

    fn scroll_offset(&self, source: ScrollSource) -> f64 {
        match source {
            ScrollSource::Viewport => self.viewport_scroll_y,
            ScrollSource::Element(element) => self
                .nodes
                .get(element.index())
                .map(|node| node.scroll_top)
                .unwrap_or_default(),
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(element.index()) else {
            return;
        };
        match node.styles.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.styles.push((property.to_string(), value.to_string())),
        }
    }

    fn add_scroll_listener(&mut self, source: ScrollSource) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, source));
        id
    }

    fn remove_scroll_listener(&mut self, listener: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != listener);
        self.listeners.len() != before
    }
}
