use super::interface::FieldSource;
use core::fmt;

/// One generated entry: four independent random fields.
///
/// Rendered as the four values joined by commas, followed by a trailing
/// comma, e.g. `qwertyuiop,42,4.00,a1b2c3d4e5,`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub alphabetical: String,
    pub integer: u32,
    pub float_hundredths: u32,
    pub alphanumeric: String,
}

impl Record {
    /// Draws every field from `source`.
    pub fn draw<S: FieldSource + ?Sized>(source: &S) -> Self {
        Self {
            alphabetical: source.alphabetical(),
            integer: source.integer(),
            float_hundredths: source.float_hundredths(),
            alphanumeric: source.alphanumeric(),
        }
    }

    /// Clears `buf` and writes the encoded record into it.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        use std::io::Write;

        buf.clear();
        // Writing into a `Vec<u8>` cannot fail.
        let _ = write!(buf, "{self}");
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}.{:02},{},",
            self.alphabetical,
            self.integer,
            self.float_hundredths / 100,
            self.float_hundredths % 100,
            self.alphanumeric
        )
    }
}
