//! Loads the static combination-rule table: F-rule specs keyed by suffix
//! surface/POS/conjugation, and the verb inflection-modification table
//! keyed by (cType, cForm). The table is read once at startup and is
//! read-only thereafter (§5).
//!
//! A tokenizer that already exposes UniDic's `aConType`/`aModType`
//! features per morpheme (the expected case, §3) makes this table mostly
//! redundant — the F-rule engine always prefers the morpheme's own field.
//! The table exists as the documented fallback for a tokenizer that
//! leaves those fields blank, and as the embedded default data a caller
//! can override (§6).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AccentError;
use crate::morpheme::Morpheme;

/// The bundled rule table, extracted from UniDic 3.1.0 feature data for a
/// representative set of auxiliaries, particles, and verb conjugations.
const DEFAULT_RULES_JSON: &str = include_str!("rules_data.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    pub surface: String,
    pub pos1: String,
    #[serde(default)]
    pub pos2: String,
    #[serde(default, rename = "cType")]
    pub c_type: String,
    #[serde(rename = "aConType")]
    pub a_con_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbInflectionPattern {
    #[serde(rename = "cType")]
    pub c_type: String,
    #[serde(rename = "cForm")]
    pub c_form: String,
    pub example: String,
    #[serde(rename = "aModType")]
    pub a_mod_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RuleTableData {
    suffix_rules: HashMap<String, SuffixRule>,
    verb_inflection_patterns: HashMap<String, VerbInflectionPattern>,
}

/// The parsed, read-only rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    by_surface: HashMap<String, Vec<SuffixRule>>,
    verb_inflection_patterns: HashMap<(String, String), VerbInflectionPattern>,
}

impl RuleTable {
    /// Parses the rule table bundled with this crate.
    pub fn load_default() -> Result<RuleTable, AccentError> {
        Self::load_from_str(DEFAULT_RULES_JSON)
    }

    /// Parses a caller-supplied rule table, in the same JSON shape as the
    /// bundled one (§6: two top-level keys `suffix_rules` and
    /// `verb_inflection_patterns`).
    pub fn load_from_str(json: &str) -> Result<RuleTable, AccentError> {
        let data: RuleTableData = serde_json::from_str(json)?;

        let mut by_surface: HashMap<String, Vec<SuffixRule>> = HashMap::new();
        for rule in data.suffix_rules.into_values() {
            by_surface.entry(rule.surface.clone()).or_default().push(rule);
        }

        let verb_inflection_patterns = data
            .verb_inflection_patterns
            .into_values()
            .map(|p| ((p.c_type.clone(), p.c_form.clone()), p))
            .collect();

        Ok(RuleTable {
            by_surface,
            verb_inflection_patterns,
        })
    }

    /// Parses a rule table from a file on disk (the counterpart to the
    /// teacher CLI's `--pitch_accent <PATH>` override flag).
    pub fn load_from_path(path: &std::path::Path) -> Result<RuleTable, AccentError> {
        let text = std::fs::read_to_string(path)?;
        Self::load_from_str(&text)
    }

    /// Resolves the `aConType` to use for `morph`: the morpheme's own
    /// field if non-empty and not `"*"`, otherwise the first table entry
    /// matching its surface (and, when more than one candidate exists,
    /// its `pos1`).
    pub fn resolve_a_con_type<'a>(&'a self, morph: &'a Morpheme) -> Option<&'a str> {
        if !morph.a_con_type.is_empty() && morph.a_con_type != "*" {
            return Some(&morph.a_con_type);
        }
        let candidates = self.by_surface.get(&morph.surface)?;
        candidates
            .iter()
            .find(|r| r.pos1 == morph.pos1)
            .or_else(|| candidates.first())
            .map(|r| r.a_con_type.as_str())
    }

    /// Resolves the `aModType` to use for `morph`: the morpheme's own
    /// field if non-empty and not `"*"`, otherwise the verb inflection
    /// table entry for its `(cType, cForm)`.
    pub fn resolve_a_mod_type<'a>(&'a self, morph: &'a Morpheme) -> Option<&'a str> {
        if !morph.a_mod_type.is_empty() && morph.a_mod_type != "*" {
            return Some(&morph.a_mod_type);
        }
        self.verb_inflection_patterns
            .get(&(morph.c_type.clone(), morph.c_form.clone()))
            .map(|p| p.a_mod_type.as_str())
    }
}
