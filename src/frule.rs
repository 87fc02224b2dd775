//! F-rule engine: folds an auxiliary chain onto a verb/adjective head,
//! updating a running (accent, mora) accumulator one auxiliary at a time
//! (§4.2).

use crate::kana::count_mora;
use crate::morpheme::Morpheme;
use crate::rules::RuleTable;

/// The preceding element's POS category, as named in an `aConType` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevPos {
    Verb,
    Adjective,
    Noun,
}

impl PrevPos {
    /// Maps a morpheme's `pos1` to the category used for F-rule lookup.
    /// `None` for a head whose POS isn't one of the three the grammar
    /// names; folding against such a head always falls through to the
    /// "no F-rule found" branch.
    pub fn from_pos1(pos1: &str) -> Option<PrevPos> {
        match pos1 {
            "動詞" => Some(PrevPos::Verb),
            "形容詞" => Some(PrevPos::Adjective),
            "名詞" => Some(PrevPos::Noun),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PrevPos::Verb => "動詞",
            PrevPos::Adjective => "形容詞",
            PrevPos::Noun => "名詞",
        }
    }
}

/// One F-rule term: `{kind, M, L}`, parsed from a single comma-separated
/// piece of an `aConType` spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FRuleTerm {
    pub kind: FKind,
    pub m: i32,
    pub l: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FKind {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
}

impl FKind {
    fn parse(s: &str) -> Option<FKind> {
        match s {
            "F1" => Some(FKind::F1),
            "F2" => Some(FKind::F2),
            "F3" => Some(FKind::F3),
            "F4" => Some(FKind::F4),
            "F5" => Some(FKind::F5),
            "F6" => Some(FKind::F6),
            _ => None,
        }
    }
}

/// Applies one F-rule term to the preceding element's accent `a` and
/// mora count `n` (§4.2's table).
pub fn apply_f_rule(term: FRuleTerm, a: i32, n: i32) -> i32 {
    match term.kind {
        FKind::F1 => a,
        FKind::F2 => {
            if a == 0 {
                n + term.m
            } else {
                a
            }
        }
        FKind::F3 => {
            if a == 0 {
                0
            } else {
                n + term.m
            }
        }
        FKind::F4 => n + term.m,
        FKind::F5 => 0,
        FKind::F6 => {
            if a == 0 {
                n + term.m
            } else {
                n + term.l
            }
        }
    }
}

/// Parses a single `<prev_pos>%F<k>[@<M>][@<L>]` term.
fn parse_term(term: &str) -> Option<(&str, FRuleTerm)> {
    let (prev_pos, rest) = term.split_once('%')?;
    let mut parts = rest.split('@');
    let kind = FKind::parse(parts.next()?)?;
    let m = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
    let l = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
    Some((prev_pos, FRuleTerm { kind, m, l }))
}

/// Parses a comma-separated `aConType` spec and picks the term matching
/// `prev_pos`. Malformed terms are skipped rather than aborting the whole
/// parse, so one bad term in a list doesn't hide a usable one (§7).
pub fn parse_acon_for_pos(spec: &str, prev_pos: PrevPos) -> Option<FRuleTerm> {
    spec.split(',')
        .filter_map(parse_term)
        .find(|(pos, _)| *pos == prev_pos.label())
        .map(|(_, term)| term)
}

/// Inflection-modification spec (`aModType`), applied to the head's base
/// accent before any F-rule folding begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModType {
    /// Stem-shortening shift: `a == 0` stays `0`, else `max(0, a - n)`.
    M4(i32),
    /// Volitional-style override: set accent to `n` outright.
    M1(i32),
    /// `*`, empty, or an unrecognized spec: no change.
    None,
}

impl ModType {
    pub fn parse(spec: &str) -> ModType {
        let spec = spec.trim();
        if spec.is_empty() || spec == "*" {
            return ModType::None;
        }
        let Some(rest) = spec.strip_prefix('M') else {
            return ModType::None;
        };
        let mut parts = rest.splitn(2, '@');
        let kind = parts.next().unwrap_or("");
        let n: i32 = match parts.next().and_then(|v| v.parse().ok()) {
            Some(n) => n,
            None => return ModType::None,
        };
        match kind {
            "4" => ModType::M4(n),
            "1" => ModType::M1(n),
            _ => ModType::None,
        }
    }

    pub fn apply(self, a: i32) -> i32 {
        match self {
            ModType::M4(n) => {
                if a == 0 {
                    0
                } else {
                    (a - n).max(0)
                }
            }
            ModType::M1(n) => n,
            ModType::None => a,
        }
    }
}

/// Result of folding a head morpheme with its auxiliary chain.
#[derive(Debug, Clone)]
pub struct InflectedResult {
    pub surface: String,
    pub reading: String,
    pub accent_type: i32,
    pub mora_count: usize,
    pub breakdown: Vec<String>,
}

/// Folds `head` with its trailing `auxiliaries` into one accent, per
/// §4.2's fold order: the head's POS is fixed for every subsequent
/// F-rule lookup, regardless of what any individual auxiliary "looks
/// like" a stem of.
pub fn fold_inflected(head: &Morpheme, auxiliaries: &[Morpheme], table: &RuleTable) -> InflectedResult {
    let mut breakdown = Vec::new();

    let base_accent = head.base_accent();
    let mod_type = table
        .resolve_a_mod_type(head)
        .map(ModType::parse)
        .unwrap_or(ModType::None);
    let mut accent = mod_type.apply(base_accent);
    if !matches!(mod_type, ModType::None) {
        breakdown.push(format!(
            "mod-type {:?} on {}: {} -> {}",
            mod_type, head.surface, base_accent, accent
        ));
    }

    let mut reading = head.reading().to_string();
    let mut surface = head.surface.clone();
    let mut mora_count = count_mora(&reading);

    let head_pos = PrevPos::from_pos1(&head.pos1);

    for aux in auxiliaries {
        let aux_reading = aux.reading().to_string();
        let aux_mora = count_mora(&aux_reading) as i32;
        let prev_accent = accent;

        let term = head_pos
            .and_then(|pos| table.resolve_a_con_type(aux).map(|spec| (pos, spec)))
            .and_then(|(pos, spec)| parse_acon_for_pos(spec, pos));

        match term {
            Some(t) => {
                accent = apply_f_rule(t, prev_accent, mora_count as i32);
                breakdown.push(format!(
                    "{:?}@{},{} on {}: {}+{} -> {}",
                    t.kind, t.m, t.l, aux.surface, prev_accent, mora_count, accent
                ));
            }
            None => {
                breakdown.push(format!("no F-rule found, preserving accent={accent}"));
            }
        }

        mora_count += aux_mora as usize;
        reading.push_str(&aux_reading);
        surface.push_str(&aux.surface);
    }

    InflectedResult {
        surface,
        reading,
        accent_type: accent,
        mora_count,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aux(surface: &str, pos1: &str, pos2: &str, a_con_type: &str) -> Morpheme {
        let mut m = Morpheme::new(surface);
        m.pos1 = pos1.to_string();
        m.pos2 = pos2.to_string();
        m.a_con_type = a_con_type.to_string();
        m
    }

    #[test]
    fn f4_always_applies_regardless_of_prior_accent() {
        let term = FRuleTerm { kind: FKind::F4, m: 1, l: 0 };
        assert_eq!(apply_f_rule(term, 0, 2), 3);
        assert_eq!(apply_f_rule(term, 5, 2), 3);
    }

    #[test]
    fn f3_preserves_heiban_but_shifts_otherwise() {
        let term = FRuleTerm { kind: FKind::F3, m: 0, l: 0 };
        assert_eq!(apply_f_rule(term, 0, 3), 0);
        assert_eq!(apply_f_rule(term, 2, 3), 3);
    }

    #[test]
    fn f6_branches_on_whether_prior_accent_is_heiban() {
        let term = FRuleTerm { kind: FKind::F6, m: 1, l: 0 };
        assert_eq!(apply_f_rule(term, 0, 2), 3);
        let term = FRuleTerm { kind: FKind::F6, m: 1, l: 2 };
        assert_eq!(apply_f_rule(term, 1, 2), 4);
    }

    #[test]
    fn mod_type_m4_clips_at_zero_and_preserves_heiban() {
        assert_eq!(ModType::parse("M4@1").apply(2), 1);
        assert_eq!(ModType::parse("M4@5").apply(2), 0);
        assert_eq!(ModType::parse("M4@1").apply(0), 0);
    }

    #[test]
    fn mod_type_m1_overrides_outright() {
        assert_eq!(ModType::parse("M1@1").apply(5), 1);
    }

    #[test]
    fn mod_type_star_or_unknown_is_a_no_op() {
        assert_eq!(ModType::parse("*").apply(2), 2);
        assert_eq!(ModType::parse("garbage").apply(2), 2);
    }

    #[test]
    fn acon_parser_picks_the_matching_pos_term() {
        let spec = "動詞%F4@1,名詞%F1";
        assert_eq!(
            parse_acon_for_pos(spec, PrevPos::Verb),
            Some(FRuleTerm { kind: FKind::F4, m: 1, l: 0 })
        );
        assert_eq!(
            parse_acon_for_pos(spec, PrevPos::Noun),
            Some(FRuleTerm { kind: FKind::F1, m: 0, l: 0 })
        );
        assert_eq!(parse_acon_for_pos(spec, PrevPos::Adjective), None);
    }

    // Scenario 1 (§8): 食べる(aType=2) + ます -> 食べます, accent_type=3.
    #[test]
    fn taberu_plus_masu_yields_accent_three() {
        let mut head = Morpheme::new("食べ");
        head.pos1 = "動詞".to_string();
        head.kana = Some("たべ".to_string());
        head.a_type = "2".to_string();

        let masu = aux("ます", "助動詞", "*", "動詞%F4@1");

        let table = RuleTable::load_default().unwrap();
        let result = fold_inflected(&head, &[masu], &table);
        assert_eq!(result.accent_type, 3);
        assert_eq!(result.reading, "たべます");
        assert_eq!(result.mora_count, 4);
    }

    // Scenario 2 (§8): 行く(aType=0) -> 行った stays heiban.
    #[test]
    fn iku_plus_ta_stays_heiban() {
        let mut head = Morpheme::new("行っ");
        head.pos1 = "動詞".to_string();
        head.kana = Some("いっ".to_string());
        head.a_type = "0".to_string();

        let ta = aux("た", "助動詞", "*", "動詞%F3");

        let table = RuleTable::load_default().unwrap();
        let result = fold_inflected(&head, &[ta], &table);
        assert_eq!(result.accent_type, 0);
        assert_eq!(result.reading, "いった");
        assert_eq!(result.mora_count, 3);
    }

    // Scenario 3 (§8): ichidan stem, aModType=M4@1, base accent 2 -> 1.
    #[test]
    fn mod_type_shift_applies_before_any_fold() {
        let mut head = Morpheme::new("食べれ");
        head.pos1 = "動詞".to_string();
        head.kana = Some("たべれ".to_string());
        head.a_type = "2".to_string();
        head.c_type = "一段-一般".to_string();
        head.c_form = "仮定形-一般".to_string();

        let table = RuleTable::load_default().unwrap();
        let result = fold_inflected(&head, &[], &table);
        assert_eq!(result.accent_type, 1);
    }

    #[test]
    fn unknown_rule_spec_preserves_accent_and_traces_it() {
        let mut head = Morpheme::new("走ら");
        head.pos1 = "動詞".to_string();
        head.a_type = "0".to_string();
        let mystery = aux("???", "助動詞", "*", "");

        let table = RuleTable::load_default().unwrap();
        let result = fold_inflected(&head, &[mystery], &table);
        assert_eq!(result.accent_type, 0);
        assert!(result.breakdown.iter().any(|t| t.contains("no F-rule found")));
    }
}
