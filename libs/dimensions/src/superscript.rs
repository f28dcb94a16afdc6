//! Superscript exponent codec
//!
//! Converts between runs of Unicode superscript glyphs (`⁰¹²³⁴⁵⁶⁷⁸⁹⁻`) and
//! signed integers. Both directions are total: unknown glyphs are dropped on
//! decode and passed through on encode.

/// Map a superscript glyph to its ASCII digit or minus sign.
pub fn to_ascii(c: char) -> Option<char> {
    match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        '⁻' => Some('-'),
        _ => None,
    }
}

/// Map an ASCII digit or minus sign to its superscript glyph.
pub fn from_ascii(c: char) -> Option<char> {
    match c {
        '0' => Some('⁰'),
        '1' => Some('¹'),
        '2' => Some('²'),
        '3' => Some('³'),
        '4' => Some('⁴'),
        '5' => Some('⁵'),
        '6' => Some('⁶'),
        '7' => Some('⁷'),
        '8' => Some('⁸'),
        '9' => Some('⁹'),
        '-' => Some('⁻'),
        _ => None,
    }
}

pub fn is_superscript(c: char) -> bool {
    to_ascii(c).is_some()
}

/// Decode a run of superscript glyphs into an integer.
///
/// Unrecognized glyphs are skipped. Empty input, and glyph runs that do not
/// form a valid `i32` (a lone `⁻`, a minus after digits, overflow), decode to 0.
pub fn decode<I>(chars: I) -> i32
where
    I: IntoIterator<Item = char>,
{
    let ascii: String = chars.into_iter().filter_map(to_ascii).collect();
    if ascii.is_empty() {
        return 0;
    }
    ascii.parse().unwrap_or(0)
}

/// Encode an integer as superscript glyphs, e.g. `-2` becomes `⁻²`.
pub fn encode(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| from_ascii(c).unwrap_or(c))
        .collect()
}
