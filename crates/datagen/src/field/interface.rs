/// Number of characters in alphabetical and alphanumeric fields.
pub const FIELD_LEN: usize = 10;

/// Exclusive upper bound for integer fields.
pub const INTEGER_BOUND: u32 = 10_000;

/// Exclusive upper bound for float fields, counted in hundredths.
pub const FLOAT_HUNDREDTHS_BOUND: u32 = 1_000_000;

/// A trait for sources that draw the four fields of a [`crate::Record`].
///
/// This abstraction allows you to plug in the thread-local RNG or a fixed
/// source in tests.
///
/// # Example
/// ```
/// use datagen::{FieldSource, Record};
///
/// struct FixedFields;
/// impl FieldSource for FixedFields {
///     fn alphabetical(&self) -> String {
///         "abcdefghij".to_string()
///     }
///     fn integer(&self) -> u32 {
///         42
///     }
///     fn float_hundredths(&self) -> u32 {
///         400
///     }
///     fn alphanumeric(&self) -> String {
///         "a1b2c3d4e5".to_string()
///     }
/// }
///
/// let record = Record::draw(&FixedFields);
/// assert_eq!(record.to_string(), "abcdefghij,42,4.00,a1b2c3d4e5,");
/// ```
pub trait FieldSource {
    /// Returns [`FIELD_LEN`] characters from `a..=z`.
    fn alphabetical(&self) -> String;

    /// Returns an integer in `0..INTEGER_BOUND`.
    fn integer(&self) -> u32;

    /// Returns a decimal in `0..FLOAT_HUNDREDTHS_BOUND`, counted in
    /// hundredths (`1234` renders as `12.34`).
    fn float_hundredths(&self) -> u32;

    /// Returns [`FIELD_LEN`] characters from `0..=9` and `a..=z`.
    fn alphanumeric(&self) -> String;
}
