/// Places a tank can start from or drive to
///
/// A place is anything with 2D screen coordinates. Y grows downward.

use glam::DVec2;
use std::fmt;

/// A point on the battlefield with x/y coordinates
pub trait Place {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Coordinates as a glam vector
    fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.x(), self.y())
    }
}

impl<P: Place + ?Sized> Place for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl Place for DVec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// Plain place value for callers that don't carry their own point type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPlace {
    pub x: f64,
    pub y: f64,
}

impl GridPlace {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Place for GridPlace {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<DVec2> for GridPlace {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for GridPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", format_rounded(self.x), format_rounded(self.y))
    }
}

/// Format a value rounded to at most two decimals, dropping trailing zeros
/// (`5.0` -> `5`, `5.10` -> `5.1`, `-53.1301` -> `-53.13`).
/// Negative values that round to zero keep their sign (`-0`), like the
/// `#.##` decimal pattern does.
pub(crate) fn format_rounded(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
