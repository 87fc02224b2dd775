//! Arabic numeral → Japanese kana reading conversion.
//!
//! Deliberately approximate: rendaku inside place combinations (e.g.
//! さんびゃく rather than さんひゃく) is not modelled. Good enough for
//! pitch-accent annotation, where what matters is mora count and the
//! counter-boundary phonology handled separately in [`super`].

fn digit_reading(d: i64) -> &'static str {
    match d {
        1 => "いち",
        2 => "に",
        3 => "さん",
        4 => "よん",
        5 => "ご",
        6 => "ろく",
        7 => "なな",
        8 => "はち",
        9 => "きゅう",
        _ => "",
    }
}

/// Converts a non-negative integer to its kana reading by recursive
/// place-value decomposition (兆/億/万/千/百/十, then the ones digit).
/// `0` reads as `"ゼロ"`; negative numbers are prefixed with `"マイナス"`.
pub fn number_to_reading(n: i64) -> String {
    if n == 0 {
        return "ゼロ".to_string();
    }
    if n < 0 {
        return format!("マイナス{}", number_to_reading(-n));
    }

    const PLACES: &[(i64, &str)] = &[
        (1_000_000_000_000, "ちょう"),
        (100_000_000, "おく"),
        (10_000, "まん"),
        (1_000, "せん"),
        (100, "ひゃく"),
        (10, "じゅう"),
    ];

    let mut result = String::new();
    let mut remainder = n;

    for &(value, marker) in PLACES {
        if remainder < value {
            continue;
        }
        let quotient = remainder / value;
        if quotient > 1 {
            result.push_str(&number_to_reading(quotient));
        }
        result.push_str(marker);
        remainder %= value;
    }

    if remainder > 0 {
        result.push_str(digit_reading(remainder));
    }

    result
}

/// Extracts a leading run of ASCII digits from `text` as an integer,
/// returning the value and the remaining unconsumed text. Returns `None`
/// if `text` doesn't start with a digit.
pub fn extract_leading_number(text: &str) -> Option<(i64, &str)> {
    let digit_len = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digit_len == 0 {
        return None;
    }
    let (digits, rest) = text.split_at(
        text.char_indices()
            .nth(digit_len)
            .map(|(i, _)| i)
            .unwrap_or(text.len()),
    );
    digits.parse::<i64>().ok().map(|n| (n, rest))
}

/// Replaces every run of ASCII digits in `text` with its kana reading.
pub fn convert_numerals_in_text(text: &str) -> String {
    let mut result = String::new();
    let mut rest = text;
    loop {
        match rest.char_indices().find(|(_, c)| c.is_ascii_digit()) {
            None => {
                result.push_str(rest);
                break;
            }
            Some((idx, _)) => {
                result.push_str(&rest[..idx]);
                let (number, remainder) = extract_leading_number(&rest[idx..])
                    .expect("a digit was just found at this position");
                result.push_str(&number_to_reading(number));
                rest = remainder;
            }
        }
    }
    result
}
