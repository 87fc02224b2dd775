//! Numeral × counter accent: for a numeral value and a counter surface,
//! produces a merged reading (after phonological alternation) and accent
//! type (via the Miyazaki-style category × numeral override table).

pub mod reading;
mod tables;

use crate::kana::count_mora;

pub use reading::{convert_numerals_in_text, extract_leading_number, number_to_reading};

/// Result of merging a numeral with a counter into a single accented
/// phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralPhrase {
    pub surface: String,
    pub reading: String,
    pub accent_type: i32,
    pub mora_count: usize,
    pub rule: String,
}

/// Default numeral reading used when no alternation table entry applies.
fn default_numeral_reading(numeral: i64) -> String {
    number_to_reading(numeral)
}

fn numeral_counter_readings(numeral: i64, counter: &str) -> (String, String) {
    if let Some((num, ctr)) = tables::reading_alternation(numeral, counter) {
        return (num.to_string(), ctr.to_string());
    }
    (
        default_numeral_reading(numeral),
        tables::default_counter_reading(counter).to_string(),
    )
}

/// Computes the accent type, merged reading, and rule trace for a
/// `numeral` + `counter` phrase. `counter` is the counter's surface form
/// (e.g. `"本"`); `counter_accent` isn't currently used by the override
/// table (it takes precedence entirely) but is accepted for symmetry with
/// the compound engine and to allow a future entry to consult it.
pub fn compute_numeral_phrase_accent(numeral: i64, counter: &str) -> (i32, String, String) {
    let category = tables::counter_category(counter);
    let (num_reading, counter_reading) = numeral_counter_readings(numeral, counter);
    let full_reading = format!("{num_reading}{counter_reading}");

    let num_mora = count_mora(&num_reading) as i32;
    let counter_mora = count_mora(&counter_reading) as i32;
    let total_mora = count_mora(&full_reading) as i32;

    let override_rule = category.and_then(|cat| tables::override_rule(numeral, cat));

    let override_rule = match override_rule {
        Some(rule) => rule,
        None => {
            if numeral > 10 {
                return (0, full_reading, "large_number_default_heiban".to_string());
            }
            0
        }
    };

    let category_label = category.unwrap_or("?");
    match override_rule {
        0 => {
            let accent = if counter_mora <= 2 { num_mora } else { num_mora + 1 };
            (accent, full_reading, format!("normal_sandhi_cat_{category_label}"))
        }
        1 => (0, full_reading, format!("heiban_cat_{category_label}")),
        2 => (
            num_mora + 1,
            full_reading,
            format!("counter_initial_cat_{category_label}"),
        ),
        3 => (total_mora, full_reading, format!("counter_final_cat_{category_label}")),
        _ => (0, full_reading, "unknown".to_string()),
    }
}

/// Merges a numeral value with a counter morpheme's surface into a single
/// noun-like [`NumeralPhrase`], ready to be folded into the constituent
/// stream as one unit.
pub fn process_numeral_phrase(numeral: i64, counter_surface: &str) -> NumeralPhrase {
    let (accent_type, reading, rule) = compute_numeral_phrase_accent(numeral, counter_surface);
    let mora_count = count_mora(&reading);
    NumeralPhrase {
        surface: format!("{numeral}{counter_surface}"),
        reading,
        accent_type,
        mora_count,
        rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanbon_uses_rendaku_and_normal_sandhi() {
        let (accent, reading, rule) = compute_numeral_phrase_accent(3, "本");
        assert_eq!(reading, "さんぼん");
        assert_eq!(accent, 2); // counter_mora (2) <= 2 -> accent = num_mora (2)
        assert_eq!(rule, "normal_sandhi_cat_β");
    }

    #[test]
    fn ippon_geminates_and_accents_counter_initial() {
        let (accent, reading, _) = compute_numeral_phrase_accent(1, "本");
        assert_eq!(reading, "いっぽん");
        assert_eq!(accent, 3); // num_mora(いっ)=2, override 2 -> accent = 2+1
    }

    #[test]
    fn hitori_is_suppletive_and_normal_sandhi() {
        let (accent, reading, _) = compute_numeral_phrase_accent(1, "人");
        assert_eq!(reading, "ひとり");
        assert_eq!(accent, 2); // counter_mora(り)=1 <= 2 -> accent = num_mora(ひと)=2
    }

    #[test]
    fn nen_is_forced_heiban() {
        let (accent, _, rule) = compute_numeral_phrase_accent(5, "年");
        assert_eq!(accent, 0);
        assert_eq!(rule, "heiban_cat_δ");
    }

    #[test]
    fn numbers_above_ten_default_heiban_without_an_override_entry() {
        let (accent, _, rule) = compute_numeral_phrase_accent(24, "年");
        assert_eq!(accent, 0);
        assert_eq!(rule, "large_number_default_heiban");
    }

    #[test]
    fn merged_phrase_reports_mora_count() {
        let phrase = process_numeral_phrase(3, "本");
        assert_eq!(phrase.mora_count, count_mora(&phrase.reading));
        assert_eq!(phrase.surface, "3本");
    }
}
