//! The morpheme record supplied by an external tokenizer (§3/§6: the core
//! performs no morphological analysis of its own and trusts these labels
//! verbatim, in the UniDic short-unit scheme).

use serde::{Deserialize, Serialize};

/// One morpheme, as handed to the core by the external tokenizer.
///
/// Field names mirror UniDic's feature names (`aType`, `aConType`,
/// `aModType`, `cType`, `cForm`) in `snake_case`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    /// Katakana reading; absent when the tokenizer has no reading for this
    /// morpheme (§7: falls back to `surface`).
    #[serde(default)]
    pub kana: Option<String>,
    #[serde(default)]
    pub pos1: String,
    #[serde(default)]
    pub pos2: String,
    #[serde(default)]
    pub c_type: String,
    #[serde(default)]
    pub c_form: String,
    #[serde(default)]
    pub lemma: String,
    /// Base accent: an integer string, possibly comma-separated
    /// alternatives, or `"*"`.
    #[serde(default)]
    pub a_type: String,
    /// F-rule spec, e.g. `"動詞%F4@1,名詞%F1"`.
    #[serde(default)]
    pub a_con_type: String,
    /// Inflection modification spec, e.g. `"M4@1"`.
    #[serde(default)]
    pub a_mod_type: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>) -> Self {
        Morpheme {
            surface: surface.into(),
            ..Default::default()
        }
    }

    /// The reading to use for mora/pattern computation: the tokenizer's
    /// `kana` field if present, falling back to `surface` (§7, "missing
    /// reading on a morpheme").
    pub fn reading(&self) -> &str {
        self.kana.as_deref().unwrap_or(&self.surface)
    }

    /// Parses [`Morpheme::a_type`] per §4.2: first comma-separated token,
    /// `"*"`/empty/unparseable → `0`.
    pub fn base_accent(&self) -> i32 {
        parse_a_type(&self.a_type)
    }
}

/// Parses an `aType` string: first comma-separated token; `"*"` or an
/// unparseable token is treated as `0` (§4.2/§7).
pub fn parse_a_type(a_type: &str) -> i32 {
    let first = a_type.split(',').next().unwrap_or("");
    if first.is_empty() || first == "*" {
        return 0;
    }
    first.parse().unwrap_or(0)
}
