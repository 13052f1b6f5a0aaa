//! Japanese script classification helpers.

/// Test if a character is hiragana.
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309f}')
}

/// Test if a character is katakana.
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30a0}'..='\u{30ff}')
}

/// Test if a character falls in the common kanji range.
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9faf}')
}

/// Test if a string contains any Japanese script at all.
pub fn is_japanese(s: &str) -> bool {
    s.chars().any(|c| is_hiragana(c) || is_katakana(c) || is_kanji(c))
}

/// Test if a word ends in a mora that a dictionary-form verb can end in.
///
/// Used by the request boundary to accept words that are missing from the
/// word store.
pub fn has_verb_ending(s: &str) -> bool {
    matches!(
        s.chars().next_back(),
        Some('る' | 'う' | 'く' | 'ぐ' | 'す' | 'つ' | 'ぬ' | 'ぶ' | 'む')
    )
}
