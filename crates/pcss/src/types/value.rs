use std::fmt;

use crate::types::Axis;

/// How a computed number is laid out in the final CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueShape {
    /// `"<n><unit> 0"` for X, `"0 <n><unit>"` for Y.
    BackgroundPosition(Axis),
    /// `"<function>(<n><unit>)"`.
    Function(String),
    /// `"<n><unit>"`.
    Plain,
}

/// A computed CSS value ready to be written to a style property.
#[derive(Debug, Clone, PartialEq)]
pub struct CssValue {
    pub number: f64,
    pub unit: String,
    pub shape: ValueShape,
}

impl CssValue {
    pub fn new(number: f64, unit: impl Into<String>, shape: ValueShape) -> Self {
        Self {
            number,
            unit: unit.into(),
            shape,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = format_number(self.number);
        let unit = &self.unit;
        match &self.shape {
            ValueShape::BackgroundPosition(Axis::X) => write!(f, "{number}{unit} 0"),
            ValueShape::BackgroundPosition(Axis::Y) => write!(f, "0 {number}{unit}"),
            ValueShape::Function(function) => write!(f, "{function}({number}{unit})"),
            ValueShape::Plain => write!(f, "{number}{unit}"),
        }
    }
}

/// Renders a number the way a browser stringifies it.
///
/// Integral values have no fraction, negative zero prints as `0`, and values
/// outside `[1e-6, 1e21)` use exponent notation with an explicit sign.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{value:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_matches_browser_output() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-70.0), "-70");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_shapes() {
        let x = CssValue::new(100.0, "px", ValueShape::BackgroundPosition(Axis::X));
        let y = CssValue::new(-70.0, "px", ValueShape::BackgroundPosition(Axis::Y));
        let function = CssValue::new(10.0, "", ValueShape::Function("scale".into()));
        let plain = CssValue::new(0.25, "", ValueShape::Plain);

        assert_eq!(x.to_string(), "100px 0");
        assert_eq!(y.to_string(), "0 -70px");
        assert_eq!(function.to_string(), "scale(10)");
        assert_eq!(plain.to_string(), "0.25");
    }
}
