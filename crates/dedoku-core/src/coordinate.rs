//! Board coordinates and their wire encoding.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::InputError;

/// A cell position on the 9×9 board, with `x` and `y` both in 1-9.
///
/// `x` counts columns left to right, `y` counts rows top to bottom, matching
/// the wire coordinate names the service consumes. The wire form is
/// `x-<digit>-y-<digit>` with case-insensitive letters.
///
/// # Examples
///
/// ```
/// use dedoku_core::Coordinate;
///
/// let coordinate: Coordinate = "x-3-y-5".parse()?;
/// assert_eq!((coordinate.x(), coordinate.y()), (3, 5));
/// assert_eq!(coordinate.to_string(), "x-3-y-5");
///
/// // The literal letters are case-insensitive
/// let same: Coordinate = "X-3-Y-5".parse()?;
/// assert_eq!(coordinate, same);
/// # Ok::<(), dedoku_core::InputError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
}

impl Coordinate {
    /// Creates a coordinate from its components.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::CoordinateOutOfRange`] when either component
    /// lies outside 1-9.
    pub const fn new(x: u8, y: u8) -> Result<Self, InputError> {
        if !matches!(x, 1..=9) || !matches!(y, 1..=9) {
            return Err(InputError::CoordinateOutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    /// Returns the column component (1-9).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row component (1-9).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this coordinate.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y - 1) / 3 * 3 + (self.x - 1) / 3
    }
}

impl FromStr for Coordinate {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InputError::MalformedCoordinateName { name: s.to_owned() };
        let mut parts = s.split('-');
        let x_literal = parts.next().ok_or_else(malformed)?;
        let x_digits = parts.next().ok_or_else(malformed)?;
        let y_literal = parts.next().ok_or_else(malformed)?;
        let y_digits = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some()
            || !x_literal.eq_ignore_ascii_case("x")
            || !y_literal.eq_ignore_ascii_case("y")
        {
            return Err(malformed());
        }
        let x = x_digits.parse::<u8>().map_err(|_| malformed())?;
        let y = y_digits.parse::<u8>().map_err(|_| malformed())?;
        Self::new(x, y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x-{}-y-{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_basic() {
        let coordinate: Coordinate = "x-1-y-9".parse().unwrap();
        assert_eq!((coordinate.x(), coordinate.y()), (1, 9));
    }

    #[test]
    fn test_parse_case_insensitive_letters() {
        let lower: Coordinate = "x-4-y-7".parse().unwrap();
        let upper: Coordinate = "X-4-Y-7".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_rejects_swapped_literals() {
        // The y literal in x position is malformed, not reinterpreted
        let err = "y-1-x-2".parse::<Coordinate>().unwrap_err();
        assert!(matches!(err, InputError::MalformedCoordinateName { .. }));
    }

    #[test]
    fn test_rejects_garbage() {
        for name in ["", "x-1-y", "x-1-y-2-z-3", "x--y-2", "x-a-y-2", "x1y2"] {
            assert!(
                matches!(
                    name.parse::<Coordinate>(),
                    Err(InputError::MalformedCoordinateName { .. })
                ),
                "{name:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert_eq!(
            "x-0-y-5".parse::<Coordinate>(),
            Err(InputError::CoordinateOutOfRange { x: 0, y: 5 })
        );
        assert_eq!(
            "x-3-y-10".parse::<Coordinate>(),
            Err(InputError::CoordinateOutOfRange { x: 3, y: 10 })
        );
    }

    #[test]
    fn test_box_index_corners() {
        let at = |x, y| Coordinate::new(x, y).unwrap().box_index();
        assert_eq!(at(1, 1), 0);
        assert_eq!(at(9, 1), 2);
        assert_eq!(at(5, 5), 4);
        assert_eq!(at(1, 9), 6);
        assert_eq!(at(9, 9), 8);
    }

    proptest! {
        #[test]
        fn test_wire_round_trip(x in 1u8..=9, y in 1u8..=9) {
            // Formatting then parsing is the identity for every board cell
            let coordinate = Coordinate::new(x, y).unwrap();
            let parsed: Coordinate = coordinate.to_string().parse().unwrap();
            prop_assert_eq!(coordinate, parsed);
        }
    }
}
