//! Phone number normalization and loose comparison.

/// Pause/wait separator inside dial strings.
const WAIT: char = ';';
/// Digits a country calling code may add in front of a national number.
const MAX_COUNTRY_CODE_DIGITS: usize = 3;
/// Shortest tail two numbers must share to count as the same line.
const MIN_MATCH: usize = 7;

/// Strips formatting from a dial string.
///
/// Keeps digits, `*`, `#`, the pause characters `,` and `;`, and a `+` only
/// when it leads the number.
#[must_use]
pub fn normalize_number(number: &str) -> String {
    let mut out = String::with_capacity(number.len());
    for c in number.chars() {
        match c {
            '0'..='9' | '*' | '#' | ',' | ';' => out.push(c),
            '+' if out.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// True if two numbers (without wait parts) dial the same line.
///
/// Equal after stripping formatting, or one is the other's tail of at least
/// seven digits with at most a country code in front.
#[must_use]
pub fn compare_loosely(a: &str, b: &str) -> bool {
    if normalize_number(a) == normalize_number(b) {
        return true;
    }
    let (a, b) = (digits(a), digits(b));
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    short.len() >= MIN_MATCH
        && long.ends_with(&short)
        && long.len() - short.len() <= MAX_COUNTRY_CODE_DIGITS
}

/// Near-duplicate test for phone data strings. Each `;`-separated part must
/// match loosely and both numbers must have the same number of parts.
#[must_use]
pub fn numbers_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let parts_a: Vec<&str> = a.split(WAIT).collect();
    let parts_b: Vec<&str> = b.split(WAIT).collect();
    parts_a.len() == parts_b.len()
        && parts_a
            .iter()
            .zip(&parts_b)
            .all(|(x, y)| compare_loosely(x, y))
}
