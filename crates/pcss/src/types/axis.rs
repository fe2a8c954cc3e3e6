use std::fmt;
use std::str::FromStr;

use crate::PcssError;

/// Direction a background-position effect moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Axis {
    X,
    #[default]
    Y,
}

impl Axis {
    /// Maps `x`/`X` and `y`/`Y` to an axis.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }
}

impl FromStr for Axis {
    type Err = PcssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Axis::from_letter(letter).ok_or_else(|| PcssError::InvalidAxis(s.to_string()))
            }
            _ => Err(PcssError::InvalidAxis(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
