//! Configuration inputs.
//!
//! A parallax effect is configured two ways at once:
//!
//! - [`ParallaxInputs`]: individually-bound fields, one per option
//! - [`ParallaxConfig`]: an aggregate object of `key -> value` entries whose
//!   keys are restricted to a fixed whitelist ([`ConfigKey`])
//!
//! Both carry current and deprecated spellings of the same options. Nothing
//! here decides precedence; that is the [resolver](crate::resolver)'s job.

use std::fmt;
use std::rc::Rc;

use phf::phf_map;

use pcss::parser::{RawValue, parse_declarations};
use pcss::types::{Axis, format_number};

use crate::diagnostic::{DeprecatedFields, Diagnostic};
use crate::document::{ElementId, ScrollEvent, ScrollSource};
use crate::error::Result;

/// Function invoked before each style write.
///
/// Receives the bound context, the originating scroll event and the
/// configured extra arguments.
pub type CallbackFn = dyn Fn(&ConfigValue, &ScrollEvent, &[ConfigValue]);

/// A legacy scroll callback. Equality is identity.
#[derive(Clone)]
pub struct LegacyCallback(Rc<CallbackFn>);

impl LegacyCallback {
    pub fn new(f: impl Fn(&ConfigValue, &ScrollEvent, &[ConfigValue]) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, context: &ConfigValue, event: &ScrollEvent, args: &[ConfigValue]) {
        (self.0)(context, event, args)
    }
}

impl fmt::Debug for LegacyCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LegacyCallback(..)")
    }
}

impl PartialEq for LegacyCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A dynamically-typed configuration value.
///
/// Truthiness and numeric coercion follow browser rules so that loosely
/// typed configuration (strings for numbers, `0` for "unset") behaves the
/// same as it does in a page script.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Element(ElementId),
    Viewport,
    Callback(LegacyCallback),
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::Null => false,
            ConfigValue::Bool(b) => *b,
            ConfigValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ConfigValue::Text(s) => !s.is_empty(),
            ConfigValue::Element(_)
            | ConfigValue::Viewport
            | ConfigValue::Callback(_)
            | ConfigValue::List(_) => true,
        }
    }

    /// Numeric coercion; anything unrepresentable becomes `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            ConfigValue::Null => 0.0,
            ConfigValue::Bool(b) => f64::from(u8::from(*b)),
            ConfigValue::Number(n) => *n,
            ConfigValue::Text(s) => parse_numeric_text(s),
            ConfigValue::List(items) => match items.as_slice() {
                [] => 0.0,
                [single] => single.to_number(),
                _ => f64::NAN,
            },
            ConfigValue::Element(_) | ConfigValue::Viewport | ConfigValue::Callback(_) => f64::NAN,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "a boolean",
            ConfigValue::Number(_) => "a number",
            ConfigValue::Text(_) => "a string",
            ConfigValue::Element(_) => "an element",
            ConfigValue::Viewport => "the viewport",
            ConfigValue::Callback(_) => "a callback",
            ConfigValue::List(_) => "a list",
        }
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return i64::from_str_radix(hex, 16)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust also accepts "inf"/"nan" spellings that a browser would reject
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Number(f64::from(value))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<ElementId> for ConfigValue {
    fn from(value: ElementId) -> Self {
        ConfigValue::Element(value)
    }
}

impl From<ScrollSource> for ConfigValue {
    fn from(value: ScrollSource) -> Self {
        match value {
            ScrollSource::Viewport => ConfigValue::Viewport,
            ScrollSource::Element(element) => ConfigValue::Element(element),
        }
    }
}

impl From<LegacyCallback> for ConfigValue {
    fn from(value: LegacyCallback) -> Self {
        ConfigValue::Callback(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        ConfigValue::List(value)
    }
}

impl From<RawValue> for ConfigValue {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Null => ConfigValue::Null,
            RawValue::Bool(b) => ConfigValue::Bool(b),
            RawValue::Number(n) => ConfigValue::Number(n),
            RawValue::Text(s) => ConfigValue::Text(s),
        }
    }
}

/// Every key the aggregate configuration accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    // Deprecated
    ParallaxCss,
    ParallaxAxis,
    ParallaxRatio,
    ParallaxInitVal,
    ParallaxIf,
    ScrollerId,
    Cb,
    CbContext,
    CbArgs,
    // Current
    StyleProperty,
    Axis,
    Ratio,
    InitialValue,
    Disabled,
    ScrollerSelector,
    ScrollElement,
    MaxValue,
    MinValue,
    CssUnit,
    ParallaxElement,
}

static CONFIG_KEYS: phf::Map<&'static str, ConfigKey> = phf_map! {
    "parallaxCss" => ConfigKey::ParallaxCss,
    "parallaxAxis" => ConfigKey::ParallaxAxis,
    "parallaxRatio" => ConfigKey::ParallaxRatio,
    "parallaxInitVal" => ConfigKey::ParallaxInitVal,
    "parallaxIf" => ConfigKey::ParallaxIf,
    "scrollerId" => ConfigKey::ScrollerId,
    "cb" => ConfigKey::Cb,
    "cb_context" => ConfigKey::CbContext,
    "cb_args" => ConfigKey::CbArgs,
    "styleProperty" => ConfigKey::StyleProperty,
    "axis" => ConfigKey::Axis,
    "ratio" => ConfigKey::Ratio,
    "initialValue" => ConfigKey::InitialValue,
    "disabled" => ConfigKey::Disabled,
    "scrollerSelector" => ConfigKey::ScrollerSelector,
    "scrollElement" => ConfigKey::ScrollElement,
    "maxValue" => ConfigKey::MaxValue,
    "minValue" => ConfigKey::MinValue,
    "cssUnit" => ConfigKey::CssUnit,
    "parallaxElement" => ConfigKey::ParallaxElement,
};

impl ConfigKey {
    /// Deprecated keys, in the order warnings list them.
    pub const DEPRECATED: [ConfigKey; 9] = [
        ConfigKey::ParallaxCss,
        ConfigKey::ParallaxAxis,
        ConfigKey::ParallaxRatio,
        ConfigKey::ParallaxInitVal,
        ConfigKey::ParallaxIf,
        ConfigKey::ScrollerId,
        ConfigKey::Cb,
        ConfigKey::CbContext,
        ConfigKey::CbArgs,
    ];

    /// Looks up a whitelisted key by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        CONFIG_KEYS.get(name).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ParallaxCss => "parallaxCss",
            ConfigKey::ParallaxAxis => "parallaxAxis",
            ConfigKey::ParallaxRatio => "parallaxRatio",
            ConfigKey::ParallaxInitVal => "parallaxInitVal",
            ConfigKey::ParallaxIf => "parallaxIf",
            ConfigKey::ScrollerId => "scrollerId",
            ConfigKey::Cb => "cb",
            ConfigKey::CbContext => "cb_context",
            ConfigKey::CbArgs => "cb_args",
            ConfigKey::StyleProperty => "styleProperty",
            ConfigKey::Axis => "axis",
            ConfigKey::Ratio => "ratio",
            ConfigKey::InitialValue => "initialValue",
            ConfigKey::Disabled => "disabled",
            ConfigKey::ScrollerSelector => "scrollerSelector",
            ConfigKey::ScrollElement => "scrollElement",
            ConfigKey::MaxValue => "maxValue",
            ConfigKey::MinValue => "minValue",
            ConfigKey::CssUnit => "cssUnit",
            ConfigKey::ParallaxElement => "parallaxElement",
        }
    }

    /// The flag for a deprecated key, `None` for current keys.
    pub fn deprecated_flag(&self) -> Option<DeprecatedFields> {
        let flag = match self {
            ConfigKey::ParallaxCss => DeprecatedFields::PARALLAX_CSS,
            ConfigKey::ParallaxAxis => DeprecatedFields::PARALLAX_AXIS,
            ConfigKey::ParallaxRatio => DeprecatedFields::PARALLAX_RATIO,
            ConfigKey::ParallaxInitVal => DeprecatedFields::PARALLAX_INIT_VAL,
            ConfigKey::ParallaxIf => DeprecatedFields::PARALLAX_IF,
            ConfigKey::ScrollerId => DeprecatedFields::SCROLLER_ID,
            ConfigKey::Cb => DeprecatedFields::CB,
            ConfigKey::CbContext => DeprecatedFields::CB_CONTEXT,
            ConfigKey::CbArgs => DeprecatedFields::CB_ARGS,
            _ => return None,
        };
        Some(flag)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated_flag().is_some()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The aggregate configuration object.
///
/// Entries keep insertion order; a later entry for the same key wins when
/// applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParallaxConfig {
    entries: Vec<(ConfigKey, ConfigValue)>,
}

impl ParallaxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a declaration block such as `styleProperty: opacity:scale; ratio: 1`.
    ///
    /// Non-whitelisted keys are ignored like they are in [`set`](Self::set).
    pub fn parse(source: &str) -> Result<Self> {
        let mut config = Self::new();
        for declaration in parse_declarations(source)? {
            config.set(&declaration.name, declaration.value);
        }
        Ok(config)
    }

    /// Stores `value` under `name` if the name is whitelisted.
    ///
    /// Returns whether the entry was kept.
    pub fn set(&mut self, name: &str, value: impl Into<ConfigValue>) -> bool {
        match ConfigKey::from_name(name) {
            Some(key) => {
                self.entries.push((key, value.into()));
                true
            }
            None => {
                log::trace!("Ignoring non-whitelisted configuration key '{}'", name);
                false
            }
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<ConfigValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn entries(&self) -> &[(ConfigKey, ConfigValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The effective value for `key`.
    pub fn get(&self, key: ConfigKey) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Deprecated keys carrying a truthy value.
    pub fn truthy_deprecated(&self) -> DeprecatedFields {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_truthy())
            .filter_map(|(key, _)| key.deprecated_flag())
            .fold(DeprecatedFields::empty(), |acc, flag| acc | flag)
    }
}

/// Individually-bound configuration fields.
///
/// Every field is optional; `None` means "not bound". Numeric options keep
/// their raw [`ConfigValue`] so coercion happens during resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParallaxInputs {
    pub config: Option<ParallaxConfig>,

    pub style_property: Option<String>,
    /// Deprecated: use `style_property`.
    pub parallax_css: Option<String>,

    pub axis: Option<Axis>,
    /// Deprecated: use `axis`.
    pub parallax_axis: Option<Axis>,

    pub ratio: Option<ConfigValue>,
    /// Deprecated: use `ratio`.
    pub parallax_ratio: Option<ConfigValue>,

    pub initial_value: Option<ConfigValue>,
    /// Deprecated: use `initial_value`.
    pub parallax_init_val: Option<ConfigValue>,

    pub disabled: Option<bool>,
    /// Deprecated: the inverse of `disabled`.
    pub parallax_if: Option<bool>,

    pub scroller_selector: Option<String>,
    /// Deprecated: use `scroller_selector` with a `#` prefix.
    pub scroller_id: Option<String>,
    pub scroll_element: Option<ScrollSource>,

    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub css_unit: Option<String>,

    pub parallax_element: Option<ElementId>,

    /// Deprecated: subscribe to update notifications instead.
    pub cb: Option<LegacyCallback>,
    /// Deprecated.
    pub cb_context: Option<ConfigValue>,
    /// Deprecated.
    pub cb_args: Option<Vec<ConfigValue>>,
}

impl ParallaxInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ParallaxConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_style_property(mut self, value: impl Into<String>) -> Self {
        self.style_property = Some(value.into());
        self
    }

    pub fn with_parallax_css(mut self, value: impl Into<String>) -> Self {
        self.parallax_css = Some(value.into());
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with_parallax_axis(mut self, axis: Axis) -> Self {
        self.parallax_axis = Some(axis);
        self
    }

    pub fn with_ratio(mut self, value: impl Into<ConfigValue>) -> Self {
        self.ratio = Some(value.into());
        self
    }

    pub fn with_parallax_ratio(mut self, value: impl Into<ConfigValue>) -> Self {
        self.parallax_ratio = Some(value.into());
        self
    }

    pub fn with_initial_value(mut self, value: impl Into<ConfigValue>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn with_parallax_init_val(mut self, value: impl Into<ConfigValue>) -> Self {
        self.parallax_init_val = Some(value.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn with_parallax_if(mut self, enabled: bool) -> Self {
        self.parallax_if = Some(enabled);
        self
    }

    pub fn with_scroller_selector(mut self, selector: impl Into<String>) -> Self {
        self.scroller_selector = Some(selector.into());
        self
    }

    pub fn with_scroller_id(mut self, id: impl Into<String>) -> Self {
        self.scroller_id = Some(id.into());
        self
    }

    pub fn with_scroll_element(mut self, source: ScrollSource) -> Self {
        self.scroll_element = Some(source);
        self
    }

    pub fn with_max_value(mut self, value: f64) -> Self {
        self.max_value = Some(value);
        self
    }

    pub fn with_min_value(mut self, value: f64) -> Self {
        self.min_value = Some(value);
        self
    }

    pub fn with_css_unit(mut self, unit: impl Into<String>) -> Self {
        self.css_unit = Some(unit.into());
        self
    }

    pub fn with_parallax_element(mut self, element: ElementId) -> Self {
        self.parallax_element = Some(element);
        self
    }

    pub fn with_callback(mut self, callback: LegacyCallback) -> Self {
        self.cb = Some(callback);
        self
    }

    pub fn with_callback_context(mut self, context: impl Into<ConfigValue>) -> Self {
        self.cb_context = Some(context.into());
        self
    }

    pub fn with_callback_args(mut self, args: Vec<ConfigValue>) -> Self {
        self.cb_args = Some(args);
        self
    }

    /// Deprecated fields bound individually.
    pub fn bound_deprecated(&self) -> DeprecatedFields {
        let bound = [
            (self.parallax_css.is_some(), DeprecatedFields::PARALLAX_CSS),
            (self.parallax_axis.is_some(), DeprecatedFields::PARALLAX_AXIS),
            (self.parallax_ratio.is_some(), DeprecatedFields::PARALLAX_RATIO),
            (self.parallax_init_val.is_some(), DeprecatedFields::PARALLAX_INIT_VAL),
            (self.parallax_if.is_some(), DeprecatedFields::PARALLAX_IF),
            (self.scroller_id.is_some(), DeprecatedFields::SCROLLER_ID),
            (self.cb.is_some(), DeprecatedFields::CB),
            (self.cb_context.is_some(), DeprecatedFields::CB_CONTEXT),
            (self.cb_args.is_some(), DeprecatedFields::CB_ARGS),
        ];
        bound
            .into_iter()
            .filter(|(is_bound, _)| *is_bound)
            .fold(DeprecatedFields::empty(), |acc, (_, flag)| acc | flag)
    }

    /// Overwrites one field from an aggregate entry.
    ///
    /// `Null` unbinds the field. A value of the wrong kind leaves the field
    /// untouched.
    pub fn apply(
        &mut self,
        key: ConfigKey,
        value: &ConfigValue,
    ) -> std::result::Result<(), Diagnostic> {
        let invalid = |expected: &'static str| Diagnostic::InvalidValue {
            key,
            expected,
            found: value.kind(),
        };

        match key {
            ConfigKey::StyleProperty => {
                self.style_property = text(value).ok_or_else(|| invalid("a string"))?
            }
            ConfigKey::ParallaxCss => {
                self.parallax_css = text(value).ok_or_else(|| invalid("a string"))?
            }
            ConfigKey::ScrollerSelector => {
                self.scroller_selector = text(value).ok_or_else(|| invalid("a string"))?
            }
            ConfigKey::ScrollerId => {
                self.scroller_id = text(value).ok_or_else(|| invalid("a string"))?
            }
            ConfigKey::CssUnit => self.css_unit = text(value).ok_or_else(|| invalid("a string"))?,
            ConfigKey::Axis => self.axis = axis(value).ok_or_else(|| invalid("'X' or 'Y'"))?,
            ConfigKey::ParallaxAxis => {
                self.parallax_axis = axis(value).ok_or_else(|| invalid("'X' or 'Y'"))?
            }
            ConfigKey::Ratio => self.ratio = raw(value),
            ConfigKey::ParallaxRatio => self.parallax_ratio = raw(value),
            ConfigKey::InitialValue => self.initial_value = raw(value),
            ConfigKey::ParallaxInitVal => self.parallax_init_val = raw(value),
            ConfigKey::MaxValue => self.max_value = raw(value).map(|v| v.to_number()),
            ConfigKey::MinValue => self.min_value = raw(value).map(|v| v.to_number()),
            ConfigKey::Disabled => self.disabled = raw(value).map(|v| v.is_truthy()),
            ConfigKey::ParallaxIf => self.parallax_if = raw(value).map(|v| v.is_truthy()),
            ConfigKey::ScrollElement => {
                self.scroll_element = match value {
                    ConfigValue::Null => None,
                    ConfigValue::Viewport => Some(ScrollSource::Viewport),
                    ConfigValue::Element(element) => Some(ScrollSource::Element(*element)),
                    _ => return Err(invalid("an element or the viewport")),
                }
            }
            ConfigKey::ParallaxElement => {
                self.parallax_element = match value {
                    ConfigValue::Null => None,
                    ConfigValue::Element(element) => Some(*element),
                    _ => return Err(invalid("an element")),
                }
            }
            ConfigKey::Cb => {
                self.cb = match value {
                    ConfigValue::Null => None,
                    ConfigValue::Callback(callback) => Some(callback.clone()),
                    _ => return Err(invalid("a callback")),
                }
            }
            ConfigKey::CbContext => self.cb_context = raw(value),
            ConfigKey::CbArgs => {
                self.cb_args = match value {
                    ConfigValue::Null => None,
                    ConfigValue::List(items) => Some(items.clone()),
                    _ => return Err(invalid("a list")),
                }
            }
        }
        Ok(())
    }
}

/// `Some(None)` for `Null`, `Some(Some(text))` for strings and numbers.
fn text(value: &ConfigValue) -> Option<Option<String>> {
    match value {
        ConfigValue::Null => Some(None),
        ConfigValue::Text(s) => Some(Some(s.clone())),
        ConfigValue::Number(n) => Some(Some(format_number(*n))),
        _ => None,
    }
}

fn axis(value: &ConfigValue) -> Option<Option<Axis>> {
    match value {
        ConfigValue::Null => Some(None),
        ConfigValue::Text(s) => s.parse().ok().map(Some),
        _ => None,
    }
}

fn raw(value: &ConfigValue) -> Option<ConfigValue> {
    match value {
        ConfigValue::Null => None,
        other => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!ConfigValue::Null.is_truthy());
        assert!(!ConfigValue::Number(0.0).is_truthy());
        assert!(!ConfigValue::Number(f64::NAN).is_truthy());
        assert!(!ConfigValue::Text(String::new()).is_truthy());
        assert!(ConfigValue::Text("0".into()).is_truthy());
        assert!(ConfigValue::List(vec![]).is_truthy());
        assert!(ConfigValue::Viewport.is_truthy());
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(ConfigValue::from("0.5").to_number(), 0.5);
        assert_eq!(ConfigValue::from("  12 ").to_number(), 12.0);
        assert_eq!(ConfigValue::from("").to_number(), 0.0);
        assert_eq!(ConfigValue::from("0x10").to_number(), 16.0);
        assert_eq!(ConfigValue::from("-Infinity").to_number(), f64::NEG_INFINITY);
        assert_eq!(ConfigValue::from(true).to_number(), 1.0);
        assert!(ConfigValue::from("abc").to_number().is_nan());
        assert!(ConfigValue::from("inf").to_number().is_nan());
        assert!(ConfigValue::Viewport.to_number().is_nan());
        assert_eq!(ConfigValue::List(vec![ConfigValue::from("3")]).to_number(), 3.0);
    }

    #[test]
    fn test_whitelist_lookup() {
        assert_eq!(ConfigKey::from_name("ratio"), Some(ConfigKey::Ratio));
        assert_eq!(ConfigKey::from_name("cb_args"), Some(ConfigKey::CbArgs));
        assert_eq!(ConfigKey::from_name("cssKey"), None);
        assert_eq!(ConfigKey::from_name("Ratio"), None);
    }

    #[test]
    fn test_key_names_round_trip_through_the_whitelist() {
        for (name, key) in CONFIG_KEYS.entries() {
            assert_eq!(key.name(), *name);
        }
        assert_eq!(CONFIG_KEYS.len(), 20);
    }

    #[test]
    fn test_set_ignores_unknown_keys() {
        let mut config = ParallaxConfig::new();
        assert!(config.set("ratio", 0.5));
        assert!(!config.set("bogus", 1));
        assert_eq!(config.entries().len(), 1);
    }

    #[test]
    fn test_get_returns_last_entry() {
        let config = ParallaxConfig::new().with("ratio", 1).with("ratio", 2);
        assert_eq!(config.get(ConfigKey::Ratio), Some(&ConfigValue::Number(2.0)));
    }

    #[test]
    fn test_truthy_deprecated_skips_falsy_values() {
        let config = ParallaxConfig::new()
            .with("parallaxRatio", 0.9)
            .with("parallaxIf", false)
            .with("ratio", 1);
        assert_eq!(config.truthy_deprecated(), DeprecatedFields::PARALLAX_RATIO);
    }

    #[test]
    fn test_apply_null_unbinds() {
        let mut inputs = ParallaxInputs::new().with_css_unit("%");
        inputs.apply(ConfigKey::CssUnit, &ConfigValue::Null).unwrap();
        assert_eq!(inputs.css_unit, None);
    }

    #[test]
    fn test_apply_rejects_wrong_kind() {
        let mut inputs = ParallaxInputs::new().with_axis(Axis::X);
        let err = inputs
            .apply(ConfigKey::Axis, &ConfigValue::from("Z"))
            .unwrap_err();
        assert_eq!(
            err,
            Diagnostic::InvalidValue {
                key: ConfigKey::Axis,
                expected: "'X' or 'Y'",
                found: "a string",
            }
        );
        assert_eq!(inputs.axis, Some(Axis::X));
    }

    #[test]
    fn test_parse_block() {
        let config =
            ParallaxConfig::parse("styleProperty: opacity:scale; ratio: 1; nope: 3").unwrap();
        assert_eq!(
            config.get(ConfigKey::StyleProperty),
            Some(&ConfigValue::from("opacity:scale"))
        );
        assert_eq!(config.entries().len(), 2);
    }
}
