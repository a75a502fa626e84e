use core::cmp::Ordering;

/// Compares two strings the way an English, numeric-aware collation does.
///
/// Runs of ASCII digits compare by numeric value (`"2" < "10"`) and other
/// characters compare case-insensitively. Strings equal under those rules are
/// ordered lowercase-first, then by bytes, which makes this a total order.
///
/// ```
/// use datagen::natural_cmp;
/// use core::cmp::Ordering;
///
/// assert_eq!(natural_cmp("file2", "file10"), Ordering::Less);
/// assert_eq!(natural_cmp("abc", "ABD"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(a.as_bytes(), b.as_bytes())
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_cmp(mut a: &[u8], mut b: &[u8]) -> Ordering {
    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (run_a, rest_a) = split_digit_run(a);
                let (run_b, rest_b) = split_digit_run(b);
                let ord = digit_run_cmp(run_a, run_b);
                if ord != Ordering::Equal {
                    return ord;
                }
                a = rest_a;
                b = rest_b;
            }
            (Some(x), Some(y)) => {
                let ord = x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                a = &a[1..];
                b = &b[1..];
            }
        }
    }
}

fn split_digit_run(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

// Leading zeros do not change the value; the final byte comparison in
// `natural_cmp` still separates "01" from "1".
fn digit_run_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&b| b != b'0').unwrap_or(s.len());
    &s[start..]
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.is_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.is_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<&str>) -> Vec<&str> {
        values.sort_by(|a, b| natural_cmp(a, b));
        values
    }

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(sorted(vec!["10", "2", "9"]), vec!["2", "9", "10"]);
        assert_eq!(
            sorted(vec!["x10", "x9", "x100", "x1"]),
            vec!["x1", "x9", "x10", "x100"]
        );
    }

    #[test]
    fn decimals_compare_run_by_run() {
        assert_eq!(
            sorted(vec!["10.5", "9.99", "9.100", "9.5"]),
            vec!["9.5", "9.99", "9.100", "10.5"]
        );
    }

    #[test]
    fn letters_ignore_case_then_prefer_lowercase() {
        assert_eq!(sorted(vec!["b", "A", "a", "B"]), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(natural_cmp("9z", "za"), Ordering::Less);
        assert_eq!(natural_cmp("a9", "aa"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_tie_break_by_bytes() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Less);
        assert_eq!(natural_cmp("7", "007"), Ordering::Greater);
        assert_eq!(natural_cmp("7", "7"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("abc", "abcd"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }
}
