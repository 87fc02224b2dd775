//! Sentence accent driver (§4.8): ties the constituent builder to the
//! three accent engines and emits one [`WordResult`] per content
//! constituent.

use std::fmt;

use crate::compound::compute_multi_noun_compound;
use crate::constituent::{build_constituents, is_content, to_noun_likes, Constituent};
use crate::frule::fold_inflected;
use crate::kana::{count_mora, kata_to_hira};
use crate::morpheme::Morpheme;
use crate::numeral::process_numeral_phrase;
use crate::pattern::expand_pattern;
use crate::rules::RuleTable;
use crate::tokenizer::Tokenize;

/// One annotated content word (§3, "Word result").
#[derive(Debug, Clone)]
pub struct WordResult {
    pub surface: String,
    pub reading: String,
    pub accent_type: i32,
    pub mora_count: usize,
    pub pattern: String,
    pub breakdown: Option<Vec<String>>,
    pub compound_rules: Option<Vec<String>>,
    pub is_compound: bool,
    pub is_content: bool,
}

impl fmt::Display for WordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}（{}）[{}] accent={}",
            self.surface, self.reading, self.pattern, self.accent_type
        )
    }
}

/// Everything `annotate_sentence` produces for one sentence: the
/// per-word results plus any non-fatal warnings surfaced while building
/// constituents (§9's unclassified-suffix note).
#[derive(Debug, Clone, Default)]
pub struct AnnotationResult {
    pub words: Vec<WordResult>,
    pub warnings: Vec<String>,
}

fn word_for_simple(m: &Morpheme, include_particle: bool) -> WordResult {
    let reading = kata_to_hira(&crate::constituent::resolved_reading(m));
    let accent = m.base_accent();
    let mora = count_mora(&reading);
    WordResult {
        surface: m.surface.clone(),
        reading,
        accent_type: accent,
        mora_count: mora,
        pattern: expand_pattern(accent, mora, include_particle),
        breakdown: None,
        compound_rules: None,
        is_compound: false,
        is_content: is_content(m),
    }
}

fn word_for_inflected(head: &Morpheme, auxiliaries: &[Morpheme], table: &RuleTable, include_particle: bool) -> WordResult {
    let result = fold_inflected(head, auxiliaries, table);
    WordResult {
        pattern: expand_pattern(result.accent_type, result.mora_count, include_particle),
        surface: result.surface,
        reading: kata_to_hira(&result.reading),
        accent_type: result.accent_type,
        mora_count: result.mora_count,
        breakdown: Some(result.breakdown),
        compound_rules: None,
        is_compound: false,
        is_content: true,
    }
}

fn word_for_noun_compound(morphemes: &[Morpheme], include_particle: bool) -> WordResult {
    let nouns = to_noun_likes(morphemes);
    let (merged, trace) = compute_multi_noun_compound(&nouns);
    let mora = count_mora(&merged.reading);
    WordResult {
        pattern: expand_pattern(merged.accent, mora, include_particle),
        surface: merged.surface,
        reading: kata_to_hira(&merged.reading),
        accent_type: merged.accent,
        mora_count: mora,
        breakdown: None,
        compound_rules: Some(trace),
        is_compound: true,
        is_content: true,
    }
}

/// Numeral parse failure (§7): a 数詞-labelled run that doesn't actually
/// parse as an integer falls back to heiban with `reading == surface`,
/// mora-counted defensively (one mora per code point).
fn word_for_numeral_counter(numerals: &[Morpheme], counter: &Morpheme, include_particle: bool) -> WordResult {
    let combined_surface: String = numerals.iter().map(|m| m.surface.as_str()).collect();

    match combined_surface.parse::<i64>() {
        Ok(value) => {
            let phrase = process_numeral_phrase(value, &counter.surface);
            WordResult {
                pattern: expand_pattern(phrase.accent_type, phrase.mora_count, include_particle),
                surface: phrase.surface,
                reading: phrase.reading,
                accent_type: phrase.accent_type,
                mora_count: phrase.mora_count,
                breakdown: None,
                compound_rules: Some(vec![phrase.rule]),
                is_compound: true,
                is_content: true,
            }
        }
        Err(_) => {
            let surface = format!("{combined_surface}{}", counter.surface);
            let mora = surface.chars().count();
            WordResult {
                pattern: expand_pattern(0, mora, include_particle),
                reading: surface.clone(),
                surface,
                accent_type: 0,
                mora_count: mora,
                breakdown: None,
                compound_rules: Some(vec!["numeral_parse_failure".to_string()]),
                is_compound: true,
                is_content: true,
            }
        }
    }
}

fn word_for(constituent: &Constituent, table: &RuleTable, include_particle: bool) -> Option<WordResult> {
    match constituent {
        Constituent::Simple(m) => {
            let word = word_for_simple(m, include_particle);
            if word.is_content {
                Some(word)
            } else {
                None
            }
        }
        Constituent::Inflected { head, auxiliaries } => Some(word_for_inflected(head, auxiliaries, table, include_particle)),
        Constituent::NounCompound(morphemes) => Some(word_for_noun_compound(morphemes, include_particle)),
        Constituent::NumeralCounter { numerals, counter } => Some(word_for_numeral_counter(numerals, counter, include_particle)),
    }
}

/// Annotates an already-tokenized morpheme stream (§4.8), bypassing the
/// tokenizer seam — useful for tests and for callers who ran their own
/// tokenizer ahead of time.
pub fn annotate_morphemes(morphemes: &[Morpheme], table: &RuleTable) -> AnnotationResult {
    let (constituents, warnings) = build_constituents(morphemes);
    let words = constituents
        .iter()
        .filter_map(|c| word_for(c, table, true))
        .collect();
    AnnotationResult { words, warnings }
}

/// Tokenizes `text` with `tokenizer` and annotates the resulting
/// morpheme stream (§4.8).
pub fn annotate_sentence(text: &str, tokenizer: &dyn Tokenize, table: &RuleTable) -> AnnotationResult {
    let morphemes = tokenizer.tokenize(text);
    annotate_morphemes(&morphemes, table)
}
