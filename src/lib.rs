//! Tokyo-dialect Japanese pitch-accent computation.
//!
//! Given a stream of tokenizer-supplied morphemes (§3), this crate
//! computes a low/high pitch pattern and an integer accent type for
//! every content word, including inflected verb/adjective chains, noun
//! compounds, and numeral+counter phrases. Morphological analysis
//! itself is out of scope: callers provide their own [`Tokenize`]
//! implementation (§6).

#[macro_use]
extern crate lazy_static;

pub mod compound;
pub mod constituent;
pub mod driver;
pub mod error;
pub mod frule;
pub mod kana;
pub mod morpheme;
pub mod numeral;
pub mod pattern;
pub mod rules;
pub mod segment;
pub mod tokenizer;

pub use driver::{annotate_morphemes, annotate_sentence, AnnotationResult, WordResult};
pub use error::AccentError;
pub use morpheme::Morpheme;
pub use rules::RuleTable;
pub use tokenizer::Tokenize;
