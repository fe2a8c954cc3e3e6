//! Test utilities for driving effects against an in-memory document.
//!
//! [`Harness`] plays the host: it owns a [`Dom`], mounts [`Parallax`]
//! effects, and routes scroll events to the effects whose listener is
//! registered on the scrolled source.
//!
//! # Example
//!
//! ```
//! use parallax::testing::Harness;
//! use parallax::{ParallaxInputs, ScrollSource};
//! use pcss::ElementMeta;
//!
//! let mut harness = Harness::new();
//! let hero = harness.append(ElementMeta::new("div").with_id("hero"));
//! let effect = harness.mount(hero, ParallaxInputs::new().with_ratio(0.5));
//!
//! harness.scroll(ScrollSource::Viewport, 200.0);
//! assert_eq!(harness.dom().style(hero, "backgroundPosition"), Some("0 100px"));
//! assert_eq!(harness.updates(effect).len(), 2);
//! ```

use tokio::sync::mpsc;

use pcss::ElementMeta;

use crate::config::ParallaxInputs;
use crate::directive::Parallax;
use crate::document::{Document, ElementId, ScrollSource};
use crate::dom::Dom;
use crate::message::UpdateEvent;

/// Index of a mounted effect within a [`Harness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectId(usize);

struct Mounted {
    parallax: Option<Parallax>,
    updates: mpsc::UnboundedReceiver<UpdateEvent>,
}

pub struct Harness {
    dom: Dom,
    effects: Vec<Mounted>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_dom(Dom::new())
    }

    pub fn with_dom(dom: Dom) -> Self {
        Self {
            dom,
            effects: Vec::new(),
        }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// Appends an element under `body`.
    pub fn append(&mut self, meta: ElementMeta) -> ElementId {
        let body = self.dom.body();
        self.dom.append_child(body, meta)
    }

    /// Creates and attaches an effect on `host`.
    pub fn mount(&mut self, host: ElementId, inputs: ParallaxInputs) -> EffectId {
        let mut parallax = Parallax::new(host, inputs);
        let updates = parallax.subscribe();
        parallax.attach(&mut self.dom);

        self.effects.push(Mounted {
            parallax: Some(parallax),
            updates,
        });
        EffectId(self.effects.len() - 1)
    }

    pub fn parallax(&self, effect: EffectId) -> Option<&Parallax> {
        self.effects
            .get(effect.0)
            .and_then(|mounted| mounted.parallax.as_ref())
    }

    /// Delivers a configuration change.
    pub fn reconfigure(&mut self, effect: EffectId, inputs: ParallaxInputs) {
        if let Some(parallax) = self
            .effects
            .get_mut(effect.0)
            .and_then(|mounted| mounted.parallax.as_mut())
        {
            parallax.set_inputs(inputs, &mut self.dom);
        }
    }

    /// Scrolls `source` and dispatches the event to its listeners.
    pub fn scroll(&mut self, source: ScrollSource, offset: f64) {
        let event = self.dom.scroll_to(source, offset);
        let listeners = self.dom.listeners_for(source);

        for mounted in &mut self.effects {
            let Some(parallax) = mounted.parallax.as_mut() else {
                continue;
            };
            if parallax
                .listener()
                .is_some_and(|listener| listeners.contains(&listener))
            {
                parallax.on_scroll(&mut self.dom, &event);
            }
        }
    }

    /// Tears an effect down.
    pub fn unmount(&mut self, effect: EffectId) {
        if let Some(parallax) = self
            .effects
            .get_mut(effect.0)
            .and_then(|mounted| mounted.parallax.take())
        {
            parallax.detach(&mut self.dom);
        }
    }

    /// Drains the update notifications received so far.
    pub fn updates(&mut self, effect: EffectId) -> Vec<UpdateEvent> {
        let Some(mounted) = self.effects.get_mut(effect.0) else {
            return Vec::new();
        };
        let mut drained = Vec::new();
        while let Ok(update) = mounted.updates.try_recv() {
            drained.push(update);
        }
        drained
    }

    pub fn listener_count(&self) -> usize {
        self.dom.listener_count()
    }

    pub fn scroll_offset(&self, source: ScrollSource) -> f64 {
        self.dom.scroll_offset(source)
    }
}
