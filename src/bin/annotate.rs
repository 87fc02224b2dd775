//! Thin CLI front-end: reads text, tokenizes it with a caller-supplied
//! tokenizer, and prints the pitch-accent annotation for each content
//! word. Carries no accent logic of its own — see `driver.rs` for that.
//!
//! No real tokenizer ships with this crate (§6: morphological analysis
//! is an external collaborator), so this binary demonstrates the
//! pipeline end-to-end against a tiny hardcoded stand-in tokenizer
//! rather than a production text.

use std::fs;
use std::io::{self, Read};

use tokyo_pitch_accent::{annotate_sentence, Morpheme, RuleTable, Tokenize};

/// A minimal tokenizer used only to drive this demo binary: looks each
/// whitespace-separated token up in a tiny built-in lexicon, falling
/// back to an unannotated plain-noun guess for anything unknown.
struct DemoTokenizer;

impl DemoTokenizer {
    fn lookup(surface: &str) -> Morpheme {
        let mut m = Morpheme::new(surface);
        match surface {
            "猫" => {
                m.pos1 = "名詞".to_string();
                m.kana = Some("ねこ".to_string());
                m.a_type = "1".to_string();
            }
            "日本語" => {
                m.pos1 = "名詞".to_string();
                m.kana = Some("にほんご".to_string());
                m.a_type = "0".to_string();
            }
            "食べ" => {
                m.pos1 = "動詞".to_string();
                m.kana = Some("たべ".to_string());
                m.a_type = "2".to_string();
            }
            "ます" => {
                m.pos1 = "助動詞".to_string();
                m.c_type = "助動詞-マス".to_string();
            }
            _ => {
                m.pos1 = "名詞".to_string();
            }
        }
        m
    }
}

impl Tokenize for DemoTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Morpheme> {
        text.split_whitespace().map(Self::lookup).collect()
    }
}

fn main() -> io::Result<()> {
    let matches = clap::Command::new("Tokyo Pitch Accent Annotator")
        .version(clap::crate_version!())
        .arg(
            clap::Arg::new("INPUT")
                .help("Path to a text file to annotate. Reads stdin if omitted.")
                .index(1),
        )
        .arg(
            clap::Arg::new("rules")
                .short('r')
                .long("rules")
                .help("Path to a custom rule table in the §6 JSON shape. Uses the bundled table instead.")
                .value_name("PATH")
                .takes_value(true),
        )
        .get_matches();

    let text = match matches.value_of("INPUT") {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let table = match matches.value_of("rules") {
        Some(path) => RuleTable::load_from_path(std::path::Path::new(path))
            .unwrap_or_else(|e| panic!("failed to load rule table at {path}: {e}")),
        None => RuleTable::load_default().expect("bundled rule table failed to parse"),
    };

    let tokenizer = DemoTokenizer;
    for sentence in tokyo_pitch_accent::segment::split_sentences(&text) {
        let result = annotate_sentence(sentence, &tokenizer, &table);
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }
        for word in &result.words {
            println!("{word}");
        }
    }

    Ok(())
}
