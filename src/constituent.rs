//! Constituent builder (§4.5): a single left-to-right, two-decision pass
//! over the morpheme stream that groups morphemes into the four
//! constituent shapes the rest of the pipeline understands.

use crate::compound::NounLike;
use crate::morpheme::Morpheme;
use crate::numeral::reading::number_to_reading;

/// A morpheme grouping the accent engines operate on as a unit.
#[derive(Debug, Clone)]
pub enum Constituent {
    /// One morpheme, not part of a noun run or an inflection chain.
    Simple(Morpheme),
    /// A verbal/adjectival head plus its trailing auxiliary chain.
    Inflected { head: Morpheme, auxiliaries: Vec<Morpheme> },
    /// Two or more consecutive noun-like morphemes.
    NounCompound(Vec<Morpheme>),
    /// One or more 数詞 morphemes followed by one 助数詞.
    NumeralCounter { numerals: Vec<Morpheme>, counter: Morpheme },
}

/// POS labels that never carry pitch annotation on their own (§4.5,
/// §GLOSSARY "Content word").
fn is_content_pos1(pos1: &str) -> bool {
    !matches!(pos1, "助詞" | "助動詞" | "補助記号" | "空白" | "記号")
}

pub fn is_content(m: &Morpheme) -> bool {
    is_content_pos1(&m.pos1)
}

fn starts_noun_run(m: &Morpheme) -> bool {
    m.pos1 == "名詞" || m.pos1 == "代名詞" || m.pos2 == "数詞" || m.pos2 == "助数詞"
}

fn extends_noun_run(m: &Morpheme) -> bool {
    m.pos1 == "名詞"
        || m.pos2 == "数詞"
        || m.pos2 == "助数詞"
        || (m.pos1 == "接尾辞" && m.pos2 == "名詞的")
}

fn starts_inflected(m: &Morpheme) -> bool {
    m.pos1 == "動詞" || m.pos1 == "形容詞"
}

fn extends_inflected(m: &Morpheme) -> bool {
    m.pos1 == "助動詞" || (m.pos1 == "助詞" && m.pos2 == "接続助詞")
}

/// The reading to fold into a noun compound/numeral phrase for one
/// morpheme: if its surface (or its own supplied reading) is all ASCII
/// digits, that's replaced by the number-to-reading conversion (§4.5,
/// "Reading construction for noun sequences").
pub fn resolved_reading(m: &Morpheme) -> String {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if all_digits(&m.surface) {
        return number_to_reading(m.surface.parse().unwrap_or(0));
    }
    if let Some(kana) = &m.kana {
        if all_digits(kana) {
            return number_to_reading(kana.parse().unwrap_or(0));
        }
    }
    m.reading().to_string()
}

/// Builds [`NounLike`] elements, with digit readings resolved, for the
/// compound engine.
pub fn to_noun_likes(morphemes: &[Morpheme]) -> Vec<NounLike> {
    morphemes
        .iter()
        .map(|m| NounLike::new(m.surface.clone(), resolved_reading(m), m.base_accent()))
        .collect()
}

/// Splits `run` into a numeral run + counter morpheme if one exists
/// (§4.5: "first 助数詞 wins").
fn split_numeral_counter(run: &[Morpheme]) -> Option<(Vec<Morpheme>, Morpheme)> {
    let counter_idx = run.iter().position(|m| m.pos2 == "助数詞")?;
    let numerals: Vec<Morpheme> = run[..counter_idx]
        .iter()
        .filter(|m| m.pos2 == "数詞")
        .cloned()
        .collect();
    if numerals.is_empty() {
        return None;
    }
    Some((numerals, run[counter_idx].clone()))
}

/// Builds the constituent sequence for one sentence's morpheme stream.
/// Returns the constituents plus any warnings encountered along the way
/// (currently: unclassified 接尾辞 morphemes that looked like they might
/// extend a noun run but didn't carry the expected `pos2`, §9).
pub fn build_constituents(morphemes: &[Morpheme]) -> (Vec<Constituent>, Vec<String>) {
    let mut constituents = Vec::new();
    let mut warnings = Vec::new();
    let mut i = 0;

    while i < morphemes.len() {
        let m = &morphemes[i];

        if starts_noun_run(m) {
            let mut j = i + 1;
            while j < morphemes.len() {
                let next = &morphemes[j];
                if extends_noun_run(next) {
                    j += 1;
                } else if next.pos1 == "接尾辞" {
                    warnings.push(format!(
                        "unclassified suffix '{}' (pos2={}) not merged into noun run at position {}",
                        next.surface, next.pos2, j
                    ));
                    break;
                } else {
                    break;
                }
            }

            let run = &morphemes[i..j];
            if let Some((numerals, counter)) = split_numeral_counter(run) {
                constituents.push(Constituent::NumeralCounter { numerals, counter });
            } else if run.len() > 1 {
                constituents.push(Constituent::NounCompound(run.to_vec()));
            } else {
                constituents.push(Constituent::Simple(run[0].clone()));
            }
            i = j;
        } else if starts_inflected(m) {
            let mut j = i + 1;
            while j < morphemes.len() && extends_inflected(&morphemes[j]) {
                j += 1;
            }
            constituents.push(Constituent::Inflected {
                head: m.clone(),
                auxiliaries: morphemes[i + 1..j].to_vec(),
            });
            i = j;
        } else {
            constituents.push(Constituent::Simple(m.clone()));
            i += 1;
        }
    }

    (constituents, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(surface: &str, kana: &str, a_type: &str) -> Morpheme {
        let mut m = Morpheme::new(surface);
        m.pos1 = "名詞".to_string();
        m.kana = Some(kana.to_string());
        m.a_type = a_type.to_string();
        m
    }

    fn verb(surface: &str, kana: &str, a_type: &str) -> Morpheme {
        let mut m = Morpheme::new(surface);
        m.pos1 = "動詞".to_string();
        m.kana = Some(kana.to_string());
        m.a_type = a_type.to_string();
        m
    }

    fn aux(surface: &str, pos2: &str) -> Morpheme {
        let mut m = Morpheme::new(surface);
        m.pos1 = "助動詞".to_string();
        m.pos2 = pos2.to_string();
        m
    }

    fn particle(surface: &str) -> Morpheme {
        let mut m = Morpheme::new(surface);
        m.pos1 = "助詞".to_string();
        m.pos2 = "格助詞".to_string();
        m
    }

    #[test]
    fn single_noun_is_simple() {
        let morphs = vec![noun("猫", "ねこ", "1")];
        let (cs, warnings) = build_constituents(&morphs);
        assert!(warnings.is_empty());
        assert_eq!(cs.len(), 1);
        assert!(matches!(cs[0], Constituent::Simple(_)));
    }

    #[test]
    fn two_nouns_form_a_compound() {
        let morphs = vec![noun("日本", "にほん", "2"), noun("語", "ご", "1")];
        let (cs, _) = build_constituents(&morphs);
        assert_eq!(cs.len(), 1);
        assert!(matches!(cs[0], Constituent::NounCompound(ref v) if v.len() == 2));
    }

    #[test]
    fn verb_plus_auxiliary_chain_is_inflected() {
        let mut masu = aux("ます", "*");
        masu.c_type = "助動詞-マス".to_string();
        let morphs = vec![verb("食べ", "たべ", "2"), masu];
        let (cs, _) = build_constituents(&morphs);
        assert_eq!(cs.len(), 1);
        match &cs[0] {
            Constituent::Inflected { head, auxiliaries } => {
                assert_eq!(head.surface, "食べ");
                assert_eq!(auxiliaries.len(), 1);
            }
            _ => panic!("expected Inflected"),
        }
    }

    #[test]
    fn numeral_plus_counter_is_dispatched_separately_from_compound() {
        let mut numeral = Morpheme::new("3");
        numeral.pos1 = "名詞".to_string();
        numeral.pos2 = "数詞".to_string();
        let mut counter = Morpheme::new("本");
        counter.pos1 = "名詞".to_string();
        counter.pos2 = "助数詞".to_string();

        let morphs = vec![numeral, counter];
        let (cs, _) = build_constituents(&morphs);
        assert_eq!(cs.len(), 1);
        assert!(matches!(cs[0], Constituent::NumeralCounter { .. }));
    }

    #[test]
    fn particle_after_inflected_verb_is_not_absorbed() {
        let morphs = vec![verb("行く", "いく", "0"), particle("が")];
        let (cs, _) = build_constituents(&morphs);
        assert_eq!(cs.len(), 2);
        assert!(matches!(cs[0], Constituent::Inflected { .. }));
        assert!(matches!(cs[1], Constituent::Simple(_)));
    }

    #[test]
    fn unclassified_suffix_is_logged_not_silently_dropped() {
        let mut odd_suffix = Morpheme::new("流");
        odd_suffix.pos1 = "接尾辞".to_string();
        odd_suffix.pos2 = "一般".to_string();

        let morphs = vec![noun("日本", "にほん", "2"), odd_suffix];
        let (cs, warnings) = build_constituents(&morphs);
        assert_eq!(cs.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("流"));
    }

    #[test]
    fn digit_surface_resolves_to_kana_reading_in_a_noun_run() {
        let mut year = Morpheme::new("2024");
        year.pos1 = "名詞".to_string();
        assert_eq!(resolved_reading(&year), "にせんにじゅうよん");
    }
}
