//! Host-side collaborators: element handles, scroll sources and the
//! [`Document`] trait the core reads from and writes to.
//!
//! The core never touches a real DOM. A host (a browser binding, a TUI, the
//! in-memory [`Dom`](crate::dom::Dom)) implements [`Document`] and forwards
//! scroll events to [`Parallax::on_scroll`](crate::Parallax::on_scroll).

use pcss::PcssError;

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// The thing whose scroll offset drives a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollSource {
    /// The global viewport (the window); its offset is `scrollY`.
    #[default]
    Viewport,
    /// A scrollable element; its offset is `scrollTop`.
    Element(ElementId),
}

/// Handle to a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A scroll notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub source: ScrollSource,
    pub bubbles: bool,
    pub cancelable: bool,
    /// True for the event dispatched right after (re)configuration.
    pub synthetic: bool,
}

impl ScrollEvent {
    /// An event produced by actual scrolling.
    pub fn native(source: ScrollSource) -> Self {
        Self {
            source,
            bubbles: false,
            cancelable: false,
            synthetic: false,
        }
    }

    /// The non-bubbling, cancelable event used to re-evaluate immediately.
    pub fn synthetic(source: ScrollSource) -> Self {
        Self {
            source,
            bubbles: false,
            cancelable: true,
            synthetic: true,
        }
    }
}

/// Read/write access to the host's element tree.
pub trait Document {
    /// First element in document order matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns a [`PcssError`] when `selector` is not a valid selector.
    fn query_selector(&self, selector: &str) -> Result<Option<ElementId>, PcssError>;

    fn get_element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Current offset of `source` (`scrollY` for the viewport, `scrollTop` for elements).
    fn scroll_offset(&self, source: ScrollSource) -> f64;

    /// Writes one camelCase style property on `element`.
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    fn add_scroll_listener(&mut self, source: ScrollSource) -> ListenerId;

    /// Returns false if the listener was not registered.
    fn remove_scroll_listener(&mut self, listener: ListenerId) -> bool;
}
