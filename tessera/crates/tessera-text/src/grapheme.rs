//! Display width of single grapheme clusters.

use unicode_width::UnicodeWidthChar;

/// Calculate the display width of a single grapheme cluster.
///
/// - Regular characters are 1 column, wide East-Asian characters 2.
/// - Emoji sequences (ZWJ, VS16, flags, keycaps) are 2.
/// - Combining marks and other zero-width characters add nothing.
/// - Line breaks and C0/C1 controls are 0; tab counts as 1 and is drawn
///   as a space.
///
/// The result is capped at 2, the widest a terminal cell run gets.
///
/// ```
/// use tessera_text::grapheme::grapheme_width;
///
/// assert_eq!(grapheme_width("a"), 1);
/// assert_eq!(grapheme_width("中"), 2);
/// assert_eq!(grapheme_width("👨‍👩‍👧"), 2);
/// assert_eq!(grapheme_width("\n"), 0);
/// ```
pub fn grapheme_width(grapheme: &str) -> usize {
    match grapheme {
        "" | "\n" | "\r" | "\r\n" => return 0,
        "\t" => return 1,
        _ => {}
    }

    if is_emoji_sequence(grapheme) {
        return 2;
    }

    // The base character decides the width; combining marks ride along.
    grapheme
        .chars()
        .filter(|c| !is_zero_width_char(*c))
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(0)
        .min(2)
}

/// Returns `true` for characters that never occupy a column on their own.
#[inline]
pub fn is_zero_width_char(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200D}'
        | '\u{FEFF}'
        | '\u{FE00}'..='\u{FE0F}'
        | '\u{E0100}'..='\u{E01EF}'
        | '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}'
    ) || c.width() == Some(0)
}

/// Returns `true` if `c` is a wide character on its own.
#[inline]
pub fn is_wide_char(c: char) -> bool {
    c.width() == Some(2)
}

fn is_emoji_sequence(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let mut count = 1;
    let mut all_regional = is_regional_indicator(first);
    for c in chars {
        count += 1;
        if matches!(c, '\u{200D}' | '\u{FE0F}' | '\u{20E3}') {
            return true;
        }
        all_regional &= is_regional_indicator(c);
    }
    count > 1 && (all_regional || is_emoji_base(first))
}

#[inline]
fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_emoji_base(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1F64F
        | 0x1F680..=0x1F6FF
        | 0x1F900..=0x1FAFF
        | 0x2600..=0x27BF
    )
}
