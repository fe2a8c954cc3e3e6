//! Scrolls a page with a few parallax sections and prints the inline styles.
//!
//! Run with `cargo run --example hero`; warnings and lifecycle transitions
//! are written to `parallax.log`.

use parallax_rs::parallax::log::LevelFilter;
use parallax_rs::prelude::*;

fn main() -> parallax_rs::Result<()> {
    parallax_rs::init_logger("parallax.log", LevelFilter::Debug)?;

    let mut harness = Harness::new();
    let banner = harness.append(ElementMeta::new("header").with_class("banner"));
    let logo = harness.append(ElementMeta::new("img").with_id("logo"));
    let fade = harness.append(ElementMeta::new("section").with_class("fade"));

    harness.mount(banner, ParallaxInputs::new());
    harness.mount(
        logo,
        ParallaxInputs::new().with_config(ParallaxConfig::parse(
            "styleProperty: transform:translateY; ratio: -0.25; minValue: -60",
        )?),
    );
    harness.mount(
        fade,
        ParallaxInputs::new()
            .with_style_property("opacity")
            .with_ratio(-0.004)
            .with_initial_value(1)
            .with_min_value(0.0)
            .with_css_unit("")
            // Deprecated spelling, logged as a warning
            .with_parallax_axis(Axis::Y),
    );

    for offset in [0.0, 80.0, 160.0, 240.0] {
        harness.scroll(ScrollSource::Viewport, offset);
        println!("scrollY = {offset}");
        for (name, element) in [("banner", banner), ("logo", logo), ("fade", fade)] {
            println!("  {name:<6} {}", harness.dom().style_attribute(element));
        }
    }

    Ok(())
}
