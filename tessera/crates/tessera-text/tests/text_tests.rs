//! Integration tests for the tessera-text crate.
//!
//! Measures, styles and fits strings mixing wide glyphs, emoji and SGR
//! sequences the way the layout and paint stages consume them.

use tessera_core::{Color, Style, TextAttributes};
use tessera_text::{
    display_width, fit_lines, line_text, styled_lines, truncate, wrap_text, StyledGraphemes,
    Token, Tokenizer, Truncation, WidthCache, WrapMode,
};

// ============================================================================
// WIDTH
// ============================================================================

mod width {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(display_width("ab日本"), 6);
        assert_eq!(display_width("\x1b[38;2;255;0;0m赤\x1b[0m"), 2);
        assert_eq!(display_width("\x1b]8;;https://example.com\x07link\x1b]8;;\x07"), 4);
    }

    #[test]
    fn test_cache_keys_include_escapes() {
        let mut cache = WidthCache::new(4);
        assert_eq!(cache.width("red"), 3);
        assert_eq!(cache.width("\x1b[31mred"), 3);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_evicts_oldest_first() {
        let mut cache = WidthCache::new(2);
        cache.width("one");
        cache.width("two");
        cache.width("one");
        cache.width("three");

        assert!(!cache.contains("one"));
        assert!(cache.contains("two"));
        assert!(cache.contains("three"));
    }
}

// ============================================================================
// TOKENIZING AND STYLING
// ============================================================================

mod styling {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokens_separate_style_from_text() {
        let tokens: Vec<_> = Tokenizer::new("\x1b[1mA\x1b[2Kb").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Sgr("1"),
                Token::Grapheme("A"),
                Token::Control("\x1b[2K"),
                Token::Grapheme("b"),
            ]
        );
    }

    #[test]
    fn test_style_persists_until_reset() {
        let base = Style::new().bg(Color::BLUE);
        let styles: Vec<_> = StyledGraphemes::new("a\x1b[31mbc\x1b[0md", base)
            .map(|g| g.style)
            .collect();
        assert_eq!(
            styles,
            vec![base, base.fg(Color::RED), base.fg(Color::RED), base]
        );
    }

    #[test]
    fn test_combining_sequences_stay_one_grapheme() {
        let graphemes: Vec<_> = StyledGraphemes::new("e\u{301}👍🏽", Style::new())
            .map(|g| (g.symbol, g.width))
            .collect();
        assert_eq!(graphemes, vec![("e\u{301}", 1), ("👍🏽", 2)]);
    }
}

// ============================================================================
// FITTING
// ============================================================================

mod fitting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncation_variants() {
        assert_eq!(truncate("abcdefghij", 5, Truncation::End), "abcd…");
        assert_eq!(truncate("abcdefghij", 5, Truncation::Start), "…ghij");
        assert_eq!(truncate("abcdefghij", 5, Truncation::Middle), "ab…ij");
    }

    #[test]
    fn test_long_word_falls_back_to_char_breaks() {
        assert_eq!(
            wrap_text("a extraordinarily b", 6, WrapMode::Wrap),
            vec!["a", "extrao", "rdinar", "ily b"]
        );
    }

    #[test]
    fn test_wrapping_keeps_styles() {
        let lines = styled_lines("\x1b[1mbold words\x1b[0m here", Style::new());
        let fitted = fit_lines(lines, 5, WrapMode::Wrap);

        let texts: Vec<_> = fitted.iter().map(|line| line_text(line)).collect();
        assert_eq!(texts, vec!["bold", "words", "here"]);
        assert!(fitted[1][0].style.attributes.contains(TextAttributes::BOLD));
        assert!(!fitted[2][0].style.attributes.contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_clip_leaves_lines_alone() {
        assert_eq!(wrap_text("abcdef\ngh", 3, WrapMode::Clip), vec!["abcdef", "gh"]);
    }
}
