//! Mora counting and kana conversion utilities.
//!
//! These operate on hiragana/katakana readings, not on arbitrary text:
//! callers are expected to have already separated out a word's reading
//! before calling into this module.

// Katakana U+30A1..U+30F6 sits exactly `KANA_DIFF` code points above its
// hiragana counterpart U+3041..U+3096.
const KANA_DIFF: u32 = 0x60;

#[rustfmt::skip]
pub fn is_small_kana(c: char) -> bool {
    matches!(
        c,
        'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ' |
        'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ャ' | 'ュ' | 'ョ' | 'ヮ'
    )
}

/// Special mora (特殊拍): placed on their own mora but never take the
/// accent nucleus.
fn is_special_mora(c: char) -> bool {
    matches!(c, 'ん' | 'ン' | 'っ' | 'ッ' | 'ー')
}

const LONG_VOWEL_PAIRS: &[&str] = &["おう", "うう", "おお", "えい", "いい", "ああ"];

/// Counts the mora in a kana reading. Small kana attach to the preceding
/// mora and contribute nothing; っ/ー count as their own mora same as any
/// other kana.
pub fn count_mora(reading: &str) -> usize {
    reading.chars().filter(|&c| !is_small_kana(c)).count()
}

/// True if `reading` ends with ん/っ/ー, or with one of the long-vowel
/// digraphs おう/うう/おお/えい/いい/ああ.
pub fn ends_with_special_mora(reading: &str) -> bool {
    let Some(last) = reading.chars().last() else {
        return false;
    };
    if is_special_mora(last) {
        return true;
    }

    let chars: Vec<char> = reading.chars().collect();
    if chars.len() < 2 {
        return false;
    }
    let tail: String = chars[chars.len() - 2..].iter().collect();
    LONG_VOWEL_PAIRS.contains(&tail.as_str())
}

/// Counts how many special-mora characters (ん/っ/ー) sit at the very end
/// of `reading`, for the compound engine's left-shift rule. Stops at the
/// first non-special character.
pub fn trailing_special_mora_count(reading: &str) -> usize {
    reading.chars().rev().take_while(|&c| is_special_mora(c)).count()
}

/// Converts katakana to hiragana by Unicode offset; all other characters
/// pass through unchanged.
pub fn kata_to_hira(text: &str) -> String {
    text.chars()
        .map(|ch| {
            let c = ch as u32;
            if (0x30a1..=0x30f6).contains(&c) {
                char::try_from(c - KANA_DIFF).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

/// Converts hiragana to katakana by Unicode offset; all other characters
/// pass through unchanged.
pub fn hira_to_kata(text: &str) -> String {
    text.chars()
        .map(|ch| {
            let c = ch as u32;
            if (0x3041..=0x3096).contains(&c) {
                char::try_from(c + KANA_DIFF).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}
