//! Length-driven sandhi for noun + noun compounds (§4.3), folded
//! left-associatively for N ≥ 3 elements.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::kana::{count_mora, trailing_special_mora_count};

lazy_static! {
    /// Closed set of suffixes that force a heiban compound regardless of
    /// the pairwise length rule.
    static ref HEIBAN_SUFFIXES: HashSet<&'static str> = [
        "語", "色", "的", "性", "化", "家", "者", "員", "式", "用", "中", "内", "外", "上", "下",
        "間", "前", "後", "代", "感",
    ]
    .into_iter()
    .collect();
}

/// One element going into (or coming out of) a compound fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounLike {
    pub surface: String,
    pub reading: String,
    pub accent: i32,
}

impl NounLike {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>, accent: i32) -> Self {
        NounLike {
            surface: surface.into(),
            reading: reading.into(),
            accent,
        }
    }
}

/// Merges two noun-like elements into one, per §4.3's pairwise rule.
/// Returns the merged element and a rule-trace label.
pub fn compute_compound_accent(n1: &NounLike, n2: &NounLike) -> (NounLike, String) {
    let reading = format!("{}{}", n1.reading, n2.reading);
    let surface = format!("{}{}", n1.surface, n2.surface);

    if HEIBAN_SUFFIXES.contains(n2.surface.as_str()) {
        return (NounLike::new(surface, reading, 0), "heiban_suffix".to_string());
    }

    let n1_mora = count_mora(&n1.reading) as i32;
    let n2_mora = count_mora(&n2.reading) as i32;
    let a2 = n2.accent;

    let (accent, rule) = if n2_mora <= 2 {
        let shift = trailing_special_mora_count(&n1.reading) as i32;
        if shift > 0 {
            (
                (n1_mora - shift).max(1),
                "n2_short_accent_at_n1_special_mora_shift".to_string(),
            )
        } else {
            (n1_mora, "n2_short_accent_at_n1".to_string())
        }
    } else if n2_mora == 3 || n2_mora == 4 {
        if a2 == 0 || a2 == n2_mora {
            (n1_mora + 1, "n2_mid_heiban_or_odaka".to_string())
        } else {
            (n1_mora + a2, "n2_mid_preserve".to_string())
        }
    } else if a2 == 0 {
        (0, "n2_long_heiban".to_string())
    } else {
        (n1_mora + a2, "n2_long_preserve".to_string())
    };

    (NounLike::new(surface, reading, accent), rule)
}

/// Folds three or more noun-like elements left-associatively:
/// `((N1+N2)+N3)+…` (§4.3, "multi-element fold").
///
/// Panics if `elements` is empty; callers are expected to have already
/// established a run of at least one noun.
pub fn compute_multi_noun_compound(elements: &[NounLike]) -> (NounLike, Vec<String>) {
    let mut iter = elements.iter();
    let mut acc = iter.next().expect("compound fold needs at least one element").clone();
    let mut trace = Vec::new();

    for next in iter {
        let (merged, rule) = compute_compound_accent(&acc, next);
        trace.push(rule);
        acc = merged;
    }

    (acc, trace)
}
