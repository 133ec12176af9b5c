//! Input validation errors.

/// An error raised while building a [`Grid`](crate::Grid) from wire input.
///
/// All variants are detected during construction, before any solving begins,
/// and are fully recoverable: the caller rejects the puzzle and no partial
/// state is retained.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The coordinate name does not match the `x-<digit>-y-<digit>` form.
    #[display("coordinate name {name:?} is not in x-#-y-# form")]
    MalformedCoordinateName {
        /// The offending coordinate name.
        name: String,
    },
    /// The coordinate parsed, but one of its components lies outside 1-9.
    #[display("coordinate ({x}, {y}) is outside the 1-9 board")]
    CoordinateOutOfRange {
        /// Parsed x component.
        x: u8,
        /// Parsed y component.
        y: u8,
    },
    /// The cell value string does not parse as an integer.
    #[display("cell value {value:?} is not numeric")]
    ValueNotNumeric {
        /// The offending value string.
        value: String,
    },
    /// The cell value parsed to an integer outside 0-9.
    #[display("cell value {value} is outside the allowed 0-9 range")]
    ValueOutOfRange {
        /// The parsed value.
        value: i64,
    },
    /// The same coordinate appeared more than once in the input.
    #[display("coordinate {name} appears more than once")]
    DuplicateCoordinate {
        /// Wire name of the repeated coordinate.
        name: String,
    },
    /// The input does not describe all 81 cells of the board.
    #[display("expected 81 cell assignments, got {count}")]
    WrongCellCount {
        /// Number of assignments received.
        count: usize,
    },
}
