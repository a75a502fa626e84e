use super::interface::{FIELD_LEN, FLOAT_HUNDREDTHS_BOUND, FieldSource, INTEGER_BOUND};
use rand::{Rng, rng};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A `FieldSource` that uses the thread-local RNG (`rand::rng()`).
///
/// The RNG is never seeded explicitly, so output is not reproducible between
/// runs. This type does not store the RNG; it reaches for the thread-local
/// generator on each call and is therefore free to cross threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

fn pick(alphabet: &[u8]) -> String {
    let mut rng = rng();
    (0..FIELD_LEN)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

impl FieldSource for ThreadRandom {
    fn alphabetical(&self) -> String {
        pick(ALPHABET)
    }

    fn integer(&self) -> u32 {
        rng().random_range(0..INTEGER_BOUND)
    }

    fn float_hundredths(&self) -> u32 {
        rng().random_range(0..FLOAT_HUNDREDTHS_BOUND)
    }

    fn alphanumeric(&self) -> String {
        pick(BASE36)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_stay_in_their_alphabets_and_ranges() {
        let source = ThreadRandom;
        for _ in 0..1_000 {
            let alpha = source.alphabetical();
            assert_eq!(alpha.len(), FIELD_LEN);
            assert!(alpha.bytes().all(|b| b.is_ascii_lowercase()));

            let alnum = source.alphanumeric();
            assert_eq!(alnum.len(), FIELD_LEN);
            assert!(
                alnum
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
            );

            assert!(source.integer() < INTEGER_BOUND);
            assert!(source.float_hundredths() < FLOAT_HUNDREDTHS_BOUND);
        }
    }
}
