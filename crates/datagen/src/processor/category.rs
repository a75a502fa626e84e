use core::fmt;
use serde::{Deserialize, Serialize};

/// Classification label assigned to a token.
///
/// Serializes to the display label, so `AlphabeticalString` appears as
/// `"Alphabetical String"` in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Integer,
    Float,
    Alphanumeric,
    #[serde(rename = "Alphabetical String")]
    AlphabeticalString,
    /// Never produced by [`classify`]: the catch-all rule sends every token
    /// that is not an integer, float or alphabetical string to
    /// [`Category::Alphanumeric`]. Kept so the label stays stable if a
    /// narrower catch-all is introduced.
    Unknown,
}

impl Category {
    /// Sort rank: integers first, alphabetical strings last.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Integer => 1,
            Self::Float => 2,
            Self::Alphanumeric => 3,
            Self::AlphabeticalString => 4,
            Self::Unknown => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Alphanumeric => "Alphanumeric",
            Self::AlphabeticalString => "Alphabetical String",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Classifies a trimmed token by the first matching rule:
///
/// 1. only ASCII digits: [`Category::Integer`]
/// 2. digits, one `.`, digits: [`Category::Float`]
/// 3. only ASCII letters: [`Category::AlphabeticalString`]
/// 4. anything else: [`Category::Alphanumeric`]
pub fn classify(token: &str) -> Category {
    if is_digits(token) {
        return Category::Integer;
    }
    if let Some((whole, frac)) = token.split_once('.') {
        if is_digits(whole) && is_digits(frac) {
            return Category::Float;
        }
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Category::AlphabeticalString;
    }
    Category::Alphanumeric
}
