//! Sudoku digit representation and candidate sets.

use std::fmt::{self, Display};

use crate::InputError;

/// A sudoku digit in the range 1-9.
///
/// This enum provides type-safe representation of sudoku digits, preventing
/// invalid values at compile time. An unknown cell is represented as
/// `Option::<Digit>::None` rather than a sentinel value.
///
/// # Examples
///
/// ```
/// use dedoku_core::Digit;
///
/// let digit = Digit::from_value(5).unwrap();
/// assert_eq!(digit.value(), 5);
///
/// // Values outside 1-9 have no digit
/// assert!(Digit::from_value(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value, returning `None` for values outside 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of the digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Parses a cell value string from the wire.
///
/// An empty or all-whitespace string and the literal `0` both mean "unknown"
/// and yield `None`. Strings `1`-`9` yield the corresponding digit.
///
/// # Errors
///
/// Returns [`InputError::ValueNotNumeric`] when the string does not parse as
/// an integer, and [`InputError::ValueOutOfRange`] when it parses to a value
/// outside 0-9.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Digit, digit};
///
/// assert_eq!(digit::parse_given(""), Ok(None));
/// assert_eq!(digit::parse_given("  "), Ok(None));
/// assert_eq!(digit::parse_given("0"), Ok(None));
/// assert_eq!(digit::parse_given("7"), Ok(Some(Digit::D7)));
/// assert!(digit::parse_given("15").is_err());
/// assert!(digit::parse_given("x").is_err());
/// ```
pub fn parse_given(value: &str) -> Result<Option<Digit>, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<i64>()
        .map_err(|_| InputError::ValueNotNumeric {
            value: value.to_owned(),
        })?;
    let parsed = u8::try_from(parsed)
        .ok()
        .filter(|v| *v <= 9)
        .ok_or(InputError::ValueOutOfRange { value: parsed })?;
    Ok(Digit::from_value(parsed))
}

/// A set of digits 1-9, stored as a bitmask.
///
/// Bit `d` of the backing `u16` is set when digit `d` is a member. This is
/// the candidate-set representation used by the deduction passes: start from
/// [`DigitSet::FULL`] and remove digits as groups rule them out.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(0b11_1111_1110);

    /// Inserts a digit into the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.value();
    }

    /// Removes a digit from the set. Removing an absent digit is a no-op.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.value());
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.value()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member when the set has exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use dedoku_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::EMPTY;
    /// assert_eq!(set.as_single(), None);
    /// set.insert(Digit::D8);
    /// assert_eq!(set.as_single(), Some(Digit::D8));
    /// set.insert(Digit::D3);
    /// assert_eq!(set.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() != 1 {
            return None;
        }
        let value = u8::try_from(self.0.trailing_zeros()).ok()?;
        Digit::from_value(value)
    }

    /// Iterates over the members in ascending digit order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
