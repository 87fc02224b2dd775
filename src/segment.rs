//! Optional sentence segmentation (§6: "consumed, optional" — not part of
//! the core contract, but convenient for a caller handing in raw
//! multi-sentence text).

/// Splits `text` on 。/！/？ and newlines, keeping the delimiter attached
/// to the sentence it ends. Empty/whitespace-only spans are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let bytes_len = text.len();
    let mut iter = text.char_indices().peekable();
    while let Some((idx, c)) = iter.next() {
        let is_boundary = matches!(c, '。' | '！' | '？' | '\n');
        if is_boundary {
            let end = idx + c.len_utf8();
            let piece = text[start..end].trim();
            if !piece.is_empty() {
                sentences.push(piece);
            }
            start = end;
        }
    }
    if start < bytes_len {
        let piece = text[start..].trim();
        if !piece.is_empty() {
            sentences.push(piece);
        }
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_japanese_terminators() {
        assert_eq!(
            split_sentences("今日は晴れです。明日は雨ですか?"),
            vec!["今日は晴れです。", "明日は雨ですか?"]
        );
    }

    #[test]
    fn splits_on_newline_and_drops_empties() {
        assert_eq!(split_sentences("一行目\n\n二行目"), vec!["一行目", "二行目"]);
    }

    #[test]
    fn single_sentence_with_no_terminator_is_kept_whole() {
        assert_eq!(split_sentences("終わりがない文"), vec!["終わりがない文"]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
