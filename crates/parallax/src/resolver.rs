//! Configuration resolution.
//!
//! [`resolve`] folds the individually-bound fields, the aggregate
//! configuration object and the document into one [`CanonicalConfig`].
//!
//! ## Precedence
//!
//! 1. Aggregate entries overwrite bound fields (whitelisted keys only)
//! 2. Current names win over deprecated names (`ratio` over `parallaxRatio`)
//! 3. Explicit `axis`/`parallaxAxis` win over the axis inferred from
//!    `backgroundPositionX`/`backgroundPositionY`
//! 4. Scroll source: `scrollElement`, then `scrollerSelector`, then
//!    `scrollerId`, then the viewport
//!
//! Numeric options that coerce to `0` or `NaN` fall back to their defaults.

use pcss::types::{Axis, StyleProperty, StyleTarget};

use crate::config::{ConfigValue, LegacyCallback, ParallaxInputs};
use crate::diagnostic::Diagnostic;
use crate::document::{Document, ElementId, ScrollSource};

pub const DEFAULT_STYLE_PROPERTY: &str = "backgroundPositionY";
pub const DEFAULT_RATIO: f64 = -0.7;
pub const DEFAULT_INITIAL_VALUE: f64 = 0.0;
pub const DEFAULT_UNIT: &str = "px";

/// A legacy callback with everything needed to invoke it.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackBinding {
    pub callback: LegacyCallback,
    /// Configured context, or the target element.
    pub context: ConfigValue,
    pub args: Vec<ConfigValue>,
}

/// The resolved configuration every computation reads.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalConfig {
    pub style_target: StyleTarget,
    pub special_function: Option<String>,
    pub axis: Axis,
    pub ratio: f64,
    pub initial_value: f64,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub unit: String,
    pub disabled: bool,
    pub scroll_source: ScrollSource,
    pub target_element: ElementId,
    pub callback: Option<CallbackBinding>,
}

/// Output of [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: CanonicalConfig,
    /// Every warning emitted during this pass, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves `inputs` into a canonical configuration.
///
/// `host` is the element the effect is declared on and the default target.
/// Never fails: every problem degrades to a default and is reported as a
/// [`Diagnostic`].
pub fn resolve<D: Document + ?Sized>(
    inputs: &ParallaxInputs,
    host: ElementId,
    document: &D,
) -> Resolution {
    let mut diagnostics = Vec::new();
    let mut report = |diagnostic: Diagnostic| {
        log::warn!("{}", diagnostic);
        diagnostics.push(diagnostic);
    };

    let aggregate = inputs.config.clone().unwrap_or_default();

    let deprecated = inputs.bound_deprecated() | aggregate.truthy_deprecated();
    if !deprecated.is_empty() {
        report(Diagnostic::DeprecatedFields(deprecated.names()));
    }

    let mut working = inputs.clone();
    for (key, value) in aggregate.entries() {
        if let Err(diagnostic) = working.apply(*key, value) {
            report(diagnostic);
        }
    }

    let property = resolve_style_property(&working, &mut report);

    let ratio = coerce_or(
        working.ratio.as_ref(),
        working.parallax_ratio.as_ref(),
        DEFAULT_RATIO,
    );
    let initial_value = coerce_or(
        working.initial_value.as_ref(),
        working.parallax_init_val.as_ref(),
        DEFAULT_INITIAL_VALUE,
    );

    let target_element = working.parallax_element.unwrap_or(host);
    let scroll_source = resolve_scroll_source(&working, document, &mut report);

    let axis = working
        .axis
        .or(working.parallax_axis)
        .or(property.axis_hint)
        .unwrap_or_default();

    let disabled = working.disabled == Some(true) || working.parallax_if.is_some_and(|on| !on);

    let callback = working.cb.clone().map(|callback| CallbackBinding {
        callback,
        context: working
            .cb_context
            .clone()
            .filter(ConfigValue::is_truthy)
            .unwrap_or(ConfigValue::Element(target_element)),
        args: working.cb_args.clone().unwrap_or_default(),
    });

    let config = CanonicalConfig {
        style_target: property.target,
        special_function: property.function,
        axis,
        ratio,
        initial_value,
        min_value: working.min_value,
        max_value: working.max_value,
        unit: working.css_unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        disabled,
        scroll_source,
        target_element,
        callback,
    };

    log::debug!(
        "Resolved parallax config: target={} function={:?} axis={} ratio={} initial={} source={:?}",
        config.style_target.as_str(),
        config.special_function,
        config.axis,
        config.ratio,
        config.initial_value,
        config.scroll_source
    );

    Resolution {
        config,
        diagnostics,
    }
}

fn resolve_style_property(
    working: &ParallaxInputs,
    report: &mut impl FnMut(Diagnostic),
) -> StyleProperty {
    let descriptor = [&working.style_property, &working.parallax_css]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(String::as_str)
        .unwrap_or(DEFAULT_STYLE_PROPERTY);

    StyleProperty::parse(descriptor).unwrap_or_else(|error| {
        report(Diagnostic::InvalidStyleProperty(error));
        StyleProperty {
            target: StyleTarget::BackgroundPosition,
            function: None,
            axis_hint: Some(Axis::Y),
        }
    })
}

/// `current`, else `deprecated` when `current` is falsy, coerced to a number;
/// `0`/`NaN` results become `default`.
fn coerce_or(current: Option<&ConfigValue>, deprecated: Option<&ConfigValue>, default: f64) -> f64 {
    let number = current
        .filter(|value| value.is_truthy())
        .or(deprecated)
        .map(ConfigValue::to_number)
        .unwrap_or(default);

    if number == 0.0 || number.is_nan() {
        default
    } else {
        number
    }
}

fn resolve_scroll_source<D: Document + ?Sized>(
    working: &ParallaxInputs,
    document: &D,
    report: &mut impl FnMut(Diagnostic),
) -> ScrollSource {
    if let Some(source) = working.scroll_element {
        return source;
    }

    let selector = working.scroller_selector.as_deref().filter(|s| !s.is_empty());
    let id = working.scroller_id.as_deref().filter(|s| !s.is_empty());

    if let Some(selector) = selector {
        match document.query_selector(selector) {
            Ok(Some(element)) => return ScrollSource::Element(element),
            Ok(None) => report(Diagnostic::SelectorNotFound(selector.to_string())),
            Err(error) => report(Diagnostic::InvalidSelector {
                selector: selector.to_string(),
                error,
            }),
        }
    } else if let Some(id) = id {
        match document.get_element_by_id(id) {
            Some(element) => return ScrollSource::Element(element),
            None => report(Diagnostic::ElementIdNotFound(id.to_string())),
        }
    }

    ScrollSource::Viewport
}
