//! Lifecycle adapter.
//!
//! [`Parallax`] owns one effect's inputs and resolved configuration and
//! tracks whether a scroll listener is attached:
//!
//! ```text
//!   Idle --attach--> Tracking --set_inputs--> Tracking
//!                       |
//!                    detach (consumes the Parallax)
//! ```
//!
//! Hosts map their own lifecycle onto these calls: "view attached" to
//! [`attach`](Parallax::attach), "configuration changed" to
//! [`set_inputs`](Parallax::set_inputs), "scroll" to
//! [`on_scroll`](Parallax::on_scroll), "view detaching" to
//! [`detach`](Parallax::detach).

use tokio::sync::mpsc;

use crate::compute::evaluate;
use crate::config::ParallaxInputs;
use crate::diagnostic::Diagnostic;
use crate::document::{Document, ElementId, ListenerId, ScrollEvent, ScrollSource};
use crate::message::UpdateEvent;
use crate::resolver::{CanonicalConfig, resolve};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// No listener attached.
    #[default]
    Idle,
    /// Listener attached to `source`.
    Tracking {
        listener: ListenerId,
        source: ScrollSource,
    },
}

/// A scroll-driven style effect bound to one host element.
pub struct Parallax {
    host: ElementId,
    inputs: ParallaxInputs,
    config: Option<CanonicalConfig>,
    diagnostics: Vec<Diagnostic>,
    state: TrackingState,
    subscribers: Vec<mpsc::UnboundedSender<UpdateEvent>>,
}

impl Parallax {
    pub fn new(host: ElementId, inputs: ParallaxInputs) -> Self {
        Self {
            host,
            inputs,
            config: None,
            diagnostics: Vec::new(),
            state: TrackingState::Idle,
            subscribers: Vec::new(),
        }
    }

    pub fn host(&self) -> ElementId {
        self.host
    }

    pub fn inputs(&self) -> &ParallaxInputs {
        &self.inputs
    }

    /// The configuration from the latest resolution, if any.
    pub fn config(&self) -> Option<&CanonicalConfig> {
        self.config.as_ref()
    }

    /// Warnings from the latest resolution.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Tracking { .. })
    }

    pub fn listener(&self) -> Option<ListenerId> {
        match self.state {
            TrackingState::Tracking { listener, .. } => Some(listener),
            TrackingState::Idle => None,
        }
    }

    /// Returns a receiver for update notifications.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<UpdateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Resolves, attaches the scroll listener and evaluates immediately.
    ///
    /// Does nothing when already tracking.
    pub fn attach<D: Document + ?Sized>(&mut self, document: &mut D) {
        if self.is_tracking() {
            log::debug!("Parallax on {:?} is already tracking", self.host);
            return;
        }

        let source = self.reconfigure(document);
        let listener = document.add_scroll_listener(source);
        self.state = TrackingState::Tracking { listener, source };
        log::debug!(
            "Parallax on {:?}: Idle -> Tracking ({:?}, {:?})",
            self.host,
            source,
            listener
        );

        self.on_scroll(document, &ScrollEvent::synthetic(source));
    }

    /// Replaces the inputs.
    ///
    /// While tracking, the configuration is rebuilt and re-evaluated right
    /// away. The scroll source stays the one the listener was attached to.
    pub fn set_inputs<D: Document + ?Sized>(&mut self, inputs: ParallaxInputs, document: &mut D) {
        self.inputs = inputs;

        let TrackingState::Tracking { source: attached, .. } = self.state else {
            return;
        };

        let source = self.reconfigure(document);
        if source != attached {
            log::debug!(
                "Parallax on {:?}: ignoring scroll source {:?}; still tracking {:?}",
                self.host,
                source,
                attached
            );
            if let Some(config) = self.config.as_mut() {
                config.scroll_source = attached;
            }
        }
        self.on_scroll(document, &ScrollEvent::synthetic(attached));
    }

    /// Handles a scroll event from the host.
    ///
    /// Returns the value written to the target, or `None` when idle or disabled.
    pub fn on_scroll<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
        event: &ScrollEvent,
    ) -> Option<String> {
        if !self.is_tracking() {
            return None;
        }
        let config = self.config.as_ref()?;
        let value = evaluate(config, document, event)?;

        let update = UpdateEvent {
            event: *event,
            target: config.target_element,
            property: config.style_target.as_str().to_string(),
            value: value.clone(),
        };
        self.subscribers.retain(|tx| tx.send(update.clone()).is_ok());

        Some(value)
    }

    /// Removes the scroll listener. The effect cannot be reused afterwards.
    pub fn detach<D: Document + ?Sized>(self, document: &mut D) {
        if let TrackingState::Tracking { listener, .. } = self.state {
            if !document.remove_scroll_listener(listener) {
                log::debug!("Listener {:?} was already removed", listener);
            }
            log::debug!("Parallax on {:?}: Tracking -> Idle", self.host);
        }
    }

    /// Rebuilds the configuration and returns its scroll source.
    fn reconfigure<D: Document + ?Sized>(&mut self, document: &D) -> ScrollSource {
        let resolution = resolve(&self.inputs, self.host, document);
        let source = resolution.config.scroll_source;
        self.config = Some(resolution.config);
        self.diagnostics = resolution.diagnostics;
        source
    }
}
