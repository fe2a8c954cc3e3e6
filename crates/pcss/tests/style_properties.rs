//! Integration tests for style-property descriptors and value formatting.

use pcss::types::{Axis, CssValue, StyleProperty, StyleTarget, ValueShape};

// ============================================================================
// BACKGROUND POSITION
// ============================================================================

#[test]
fn test_background_position_x_infers_axis() {
    let property = StyleProperty::parse("backgroundPositionX").unwrap();
    assert_eq!(property.target, StyleTarget::BackgroundPosition);
    assert_eq!(property.target.as_str(), "backgroundPosition");
    assert_eq!(property.axis_hint, Some(Axis::X));
    assert_eq!(property.function, None);
}

#[test]
fn test_background_position_y_infers_axis() {
    let property = StyleProperty::parse("backgroundPositionY").unwrap();
    assert_eq!(property.axis_hint, Some(Axis::Y));
}

#[test]
fn test_background_position_lowercase_letter() {
    let property = StyleProperty::parse("backgroundPositionx").unwrap();
    assert_eq!(property.axis_hint, Some(Axis::X));
}

#[test]
fn test_background_position_ignores_function_segment() {
    let property = StyleProperty::parse("backgroundPosition:calc").unwrap();
    assert_eq!(property.target, StyleTarget::BackgroundPosition);
    assert_eq!(property.function, None);
    assert_eq!(property.axis_hint, None);
}

// ============================================================================
// SPECIAL FUNCTIONS
// ============================================================================

#[test]
fn test_property_with_function() {
    let property = StyleProperty::parse("opacity:scale").unwrap();
    assert_eq!(property.target, StyleTarget::Property("opacity".to_string()));
    assert_eq!(property.function.as_deref(), Some("scale"));
}

#[test]
fn test_plain_property() {
    let property = StyleProperty::parse("opacity").unwrap();
    assert_eq!(property.target.as_str(), "opacity");
    assert_eq!(property.function, None);
    assert_eq!(property.axis_hint, None);
}

#[test]
fn test_trailing_axis_letter_not_special_outside_background_position() {
    let property = StyleProperty::parse("transform:translateX").unwrap();
    assert_eq!(property.axis_hint, None);
}

// ============================================================================
// FORMATTING
// ============================================================================

#[test]
fn test_function_value_with_unit() {
    let value = CssValue::new(-35.5, "px", ValueShape::Function("translateY".to_string()));
    assert_eq!(value.to_string(), "translateY(-35.5px)");
}

#[test]
fn test_percent_unit() {
    let value = CssValue::new(50.0, "%", ValueShape::BackgroundPosition(Axis::X));
    assert_eq!(value.to_string(), "50% 0");
}
