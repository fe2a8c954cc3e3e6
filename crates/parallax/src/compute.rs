//! Value computation for a scroll offset.

use pcss::types::{CssValue, ValueShape};

use crate::document::{Document, ScrollEvent};
use crate::resolver::CanonicalConfig;

/// Bounds `raw` by the configured limits.
///
/// The maximum is checked first and the minimum only when the maximum did
/// not apply, so with `min > max` a value at or above `max` lands on `max`.
pub fn clamp(raw: f64, min_value: Option<f64>, max_value: Option<f64>) -> f64 {
    match (max_value, min_value) {
        (Some(max), _) if raw >= max => max,
        (_, Some(min)) if raw <= min => min,
        _ => raw,
    }
}

/// Computes the CSS value for `offset`, or `None` when disabled.
pub fn compute(offset: f64, config: &CanonicalConfig) -> Option<CssValue> {
    if config.disabled {
        return None;
    }

    let raw = offset * config.ratio + config.initial_value;
    let number = clamp(raw, config.min_value, config.max_value);

    let shape = if config.style_target.is_background_position() {
        ValueShape::BackgroundPosition(config.axis)
    } else if let Some(function) = &config.special_function {
        ValueShape::Function(function.clone())
    } else {
        ValueShape::Plain
    };

    Some(CssValue::new(number, config.unit.clone(), shape))
}

/// Samples the scroll source and applies the computed value.
///
/// Invokes the legacy callback first, then writes the style property.
/// Returns the written value, or `None` when disabled.
pub fn evaluate<D: Document + ?Sized>(
    config: &CanonicalConfig,
    document: &mut D,
    event: &ScrollEvent,
) -> Option<String> {
    let offset = document.scroll_offset(config.scroll_source);
    let value = compute(offset, config)?.to_string();

    if let Some(binding) = &config.callback {
        binding.callback.call(&binding.context, event, &binding.args);
    }

    document.set_style(config.target_element, config.style_target.as_str(), &value);
    log::trace!(
        "Applied {}={} at offset {}",
        config.style_target.as_str(),
        value,
        offset
    );

    Some(value)
}
