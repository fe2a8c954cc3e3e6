//! Integration tests for the effect lifecycle.
//!
//! Covers:
//! - Idle/Tracking transitions
//! - Immediate evaluation on attach and reconfiguration
//! - Disabled effects
//! - Listener teardown
//! - Update notifications

use parallax::testing::Harness;
use parallax::{
    Diagnostic, Document, Dom, Parallax, ParallaxConfig, ParallaxInputs, ScrollSource,
    TrackingState,
};
use pcss::ElementMeta;

// ============================================================================
// STATE TRANSITIONS
// ============================================================================

#[test]
fn test_new_effect_is_idle() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    let mut effect = Parallax::new(hero, ParallaxInputs::new());

    assert_eq!(effect.state(), TrackingState::Idle);
    assert!(effect.config().is_none());

    // Scroll before attach does nothing
    let event = dom.scroll_to(ScrollSource::Viewport, 100.0);
    assert_eq!(effect.on_scroll(&mut dom, &event), None);
    assert_eq!(dom.style(hero, "backgroundPosition"), None);
}

#[test]
fn test_attach_tracks_and_evaluates() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    dom.scroll_to(ScrollSource::Viewport, 100.0);

    let mut effect = Parallax::new(hero, ParallaxInputs::new().with_ratio(0.5));
    effect.attach(&mut dom);

    assert!(effect.is_tracking());
    assert!(matches!(
        effect.state(),
        TrackingState::Tracking {
            source: ScrollSource::Viewport,
            ..
        }
    ));
    assert_eq!(dom.listener_count(), 1);
    // Current offset applied without waiting for a scroll
    assert_eq!(dom.style(hero, "backgroundPosition"), Some("0 50px"));
}

#[test]
fn test_attach_twice_keeps_one_listener() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    let mut effect = Parallax::new(hero, ParallaxInputs::new());

    effect.attach(&mut dom);
    let listener = effect.listener();
    effect.attach(&mut dom);

    assert_eq!(dom.listener_count(), 1);
    assert_eq!(effect.listener(), listener);
}

#[test]
fn test_detach_removes_listener() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    let mut effect = Parallax::new(hero, ParallaxInputs::new());
    effect.attach(&mut dom);
    assert_eq!(dom.listener_count(), 1);

    effect.detach(&mut dom);
    assert_eq!(dom.listener_count(), 0);
    assert!(dom.listeners_for(ScrollSource::Viewport).is_empty());
}

#[test]
fn test_unmount_stops_updates() {
    let mut harness = Harness::new();
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(
        hero,
        ParallaxInputs::new()
            .with_style_property("top")
            .with_ratio(1),
    );

    harness.scroll(ScrollSource::Viewport, 10.0);
    harness.unmount(effect);
    harness.scroll(ScrollSource::Viewport, 80.0);

    assert_eq!(harness.dom().style(hero, "top"), Some("10px"));
    assert_eq!(harness.listener_count(), 0);
    assert!(harness.parallax(effect).is_none());
    assert_eq!(harness.updates(effect).len(), 2);
}

#[test]
fn test_unmount_only_removes_own_listener() {
    let mut harness = Harness::new();
    let first = harness.append(ElementMeta::new("div"));
    let second = harness.append(ElementMeta::new("div"));
    let a = harness.mount(first, ParallaxInputs::new().with_style_property("top"));
    let b = harness.mount(second, ParallaxInputs::new().with_style_property("top"));

    harness.unmount(a);
    assert_eq!(harness.listener_count(), 1);
    assert!(harness.parallax(b).is_some_and(Parallax::is_tracking));
}

// ============================================================================
// RECONFIGURATION
// ============================================================================

#[test]
fn test_reconfigure_reevaluates_immediately() {
    let mut harness = Harness::new();
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(hero, ParallaxInputs::new().with_ratio(1));
    harness.scroll(ScrollSource::Viewport, 20.0);
    assert_eq!(
        harness.dom().style(hero, "backgroundPosition"),
        Some("0 20px")
    );

    harness.reconfigure(effect, ParallaxInputs::new().with_ratio(2));
    assert_eq!(
        harness.dom().style(hero, "backgroundPosition"),
        Some("0 40px")
    );
    assert_eq!(harness.listener_count(), 1);

    let updates = harness.updates(effect);
    assert_eq!(updates.len(), 3);
    assert!(updates[0].event.synthetic);
    assert!(!updates[1].event.synthetic);
    assert!(updates[2].event.synthetic);
}

#[test]
fn test_set_inputs_while_idle_defers_resolution() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    let mut effect = Parallax::new(hero, ParallaxInputs::new());

    effect.set_inputs(ParallaxInputs::new().with_ratio(3), &mut dom);
    assert!(effect.config().is_none());
    assert_eq!(dom.style(hero, "backgroundPosition"), None);

    effect.attach(&mut dom);
    assert_eq!(effect.config().map(|config| config.ratio), Some(3.0));
}

#[test]
fn test_reconfigure_keeps_attached_scroll_source() {
    let mut harness = Harness::new();
    let scroller = harness.append(ElementMeta::new("div").with_id("scroller"));
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(
        hero,
        ParallaxInputs::new()
            .with_style_property("top")
            .with_ratio(1),
    );
    harness.scroll(ScrollSource::Element(scroller), 30.0);

    harness.reconfigure(
        effect,
        ParallaxInputs::new()
            .with_style_property("top")
            .with_ratio(1)
            .with_scroller_selector("#scroller"),
    );

    // The immediate evaluation still reads the viewport
    assert_eq!(harness.dom().style(hero, "top"), Some("0px"));
    assert!(matches!(
        harness.parallax(effect).map(Parallax::state),
        Some(TrackingState::Tracking {
            source: ScrollSource::Viewport,
            ..
        })
    ));
    assert_eq!(
        harness
            .parallax(effect)
            .and_then(Parallax::config)
            .map(|config| config.scroll_source),
        Some(ScrollSource::Viewport)
    );
    assert_eq!(harness.dom().listeners_for(ScrollSource::Viewport).len(), 1);
}

#[test]
fn test_scrolling_after_source_change_keeps_updating() {
    let mut harness = Harness::new();
    let scroller = harness.append(ElementMeta::new("div").with_id("scroller"));
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(
        hero,
        ParallaxInputs::new()
            .with_style_property("top")
            .with_ratio(1),
    );
    harness.scroll(ScrollSource::Element(scroller), 30.0);
    harness.reconfigure(
        effect,
        ParallaxInputs::new()
            .with_style_property("top")
            .with_ratio(1)
            .with_scroller_selector("#scroller"),
    );

    harness.scroll(ScrollSource::Viewport, 500.0);
    assert_eq!(harness.dom().style(hero, "top"), Some("500px"));

    // The element never had a listener
    harness.scroll(ScrollSource::Element(scroller), 90.0);
    assert_eq!(harness.dom().style(hero, "top"), Some("500px"));
}

#[test]
fn test_reconfigure_refreshes_diagnostics() {
    let mut harness = Harness::new();
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(
        hero,
        ParallaxInputs::new().with_scroller_selector("#missing"),
    );
    assert_eq!(
        harness.parallax(effect).map(|p| p.diagnostics().to_vec()),
        Some(vec![Diagnostic::SelectorNotFound("#missing".to_string())])
    );

    harness.reconfigure(effect, ParallaxInputs::new());
    assert_eq!(
        harness.parallax(effect).map(|p| p.diagnostics().len()),
        Some(0)
    );
}

// ============================================================================
// DISABLED
// ============================================================================

#[test]
fn test_disabled_effect_never_writes() {
    let mut harness = Harness::new();
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(hero, ParallaxInputs::new().with_disabled(true));

    harness.scroll(ScrollSource::Viewport, 100.0);
    assert_eq!(harness.dom().style(hero, "backgroundPosition"), None);
    assert!(harness.updates(effect).is_empty());
    // Still listening, so an enable takes effect on the next scroll
    assert_eq!(harness.listener_count(), 1);
}

#[test]
fn test_enabling_through_aggregate_resumes_updates() {
    let mut harness = Harness::new();
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(hero, ParallaxInputs::new().with_parallax_if(false));
    harness.scroll(ScrollSource::Viewport, 10.0);
    assert_eq!(harness.dom().style(hero, "backgroundPosition"), None);

    harness.reconfigure(
        effect,
        ParallaxInputs::new()
            .with_ratio(1)
            .with_config(ParallaxConfig::new().with("disabled", false)),
    );
    assert_eq!(
        harness.dom().style(hero, "backgroundPosition"),
        Some("0 10px")
    );
    assert_eq!(harness.updates(effect).len(), 1);
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[test]
fn test_update_event_carries_written_value() {
    let mut harness = Harness::new();
    let hero = harness.append(ElementMeta::new("div"));
    let effect = harness.mount(
        hero,
        ParallaxInputs::new()
            .with_style_property("opacity")
            .with_ratio(0.5)
            .with_css_unit(""),
    );
    harness.updates(effect);

    harness.scroll(ScrollSource::Viewport, 3.0);
    let updates = harness.updates(effect);

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].target, hero);
    assert_eq!(updates[0].property, "opacity");
    assert_eq!(updates[0].value, "1.5");
    assert_eq!(updates[0].event.source, ScrollSource::Viewport);
}

#[test]
fn test_dropped_subscriber_is_pruned() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    let mut effect = Parallax::new(hero, ParallaxInputs::new());
    let dropped = effect.subscribe();
    let mut kept = effect.subscribe();
    drop(dropped);

    effect.attach(&mut dom);
    let event = dom.scroll_to(ScrollSource::Viewport, 10.0);
    effect.on_scroll(&mut dom, &event);

    assert!(kept.try_recv().is_ok());
    assert!(kept.try_recv().is_ok());
    assert!(kept.try_recv().is_err());
}

#[test]
fn test_document_trait_object_drives_effect() {
    let mut dom = Dom::new();
    let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
    let document: &mut dyn Document = &mut dom;

    let mut effect = Parallax::new(hero, ParallaxInputs::new().with_ratio(1));
    effect.attach(document);
    effect.detach(document);

    assert_eq!(dom.listener_count(), 0);
    assert_eq!(dom.style(hero, "backgroundPosition"), Some("0 0px"));
}
