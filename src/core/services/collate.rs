//! Locale-aware ordering for resolved paths
//!
//! Approximates the English collation used by build tools when sorting
//! file lists. At the first level case and Latin diacritics are ignored,
//! punctuation sorts before digits and digits before letters. Ties go to
//! the unaccented letter, then to lowercase. A final byte comparison keeps
//! the order total.

use std::cmp::Ordering;

/// Punctuation and symbols in collation order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary collation weight of one character
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        return (0, u32::from(c));
    }
    if let Some(pos) = PUNCTUATION_ORDER.find(c) {
        return (1, u32::try_from(pos).unwrap_or(u32::MAX));
    }
    if c.is_ascii_digit() {
        return (3, u32::from(c));
    }
    if c.is_alphabetic() {
        return (4, u32::from(base_letter(fold_case(c))));
    }
    (2, u32::from(c))
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Strip the diacritic from a lowercase Latin letter
const fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Secondary weight: 1 for a letter carrying a diacritic
fn accent_weight(c: char) -> u8 {
    let lower = fold_case(c);
    u8::from(base_letter(lower) != lower)
}

/// Compare two strings the way an English locale would
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use sass_glob_import::core::services::locale_cmp;
///
/// assert_eq!(locale_cmp("_button.scss", "_card.scss"), Ordering::Less);
/// assert_eq!(locale_cmp("Banner", "apple"), Ordering::Greater);
/// assert_eq!(locale_cmp("a", "A"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.chars().map(accent_weight).cmp(b.chars().map(accent_weight)))
        .then_with(|| tertiary_cmp(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercase sorts before uppercase at the first case difference
fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
}
