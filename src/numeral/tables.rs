//! Static data tables for the numeral-counter engine: counter categories
//! (Miyazaki's α..ν classification), default/alternated readings, and the
//! numeral×category override table.

use std::collections::HashMap;

lazy_static! {
    /// Counter surface → Miyazaki category label.
    static ref COUNTER_CATEGORIES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("つ", "α");
        m.insert("個", "α");
        m.insert("枚", "α");

        m.insert("本", "β");
        m.insert("杯", "β");

        m.insert("階", "γ");
        m.insert("軒", "γ");

        m.insert("年", "δ");
        m.insert("月", "δ");
        m.insert("週", "δ");

        m.insert("回", "ε");
        m.insert("度", "ε");

        m.insert("分", "ζ");
        m.insert("秒", "ζ");

        m.insert("円", "η");

        m.insert("歳", "θ");
        m.insert("才", "θ");

        m.insert("時", "ι");
        m.insert("時間", "ι");

        m.insert("日", "κ");
        m.insert("日間", "κ");

        m.insert("人", "λ");
        m.insert("名", "λ");

        m.insert("台", "μ");
        m.insert("匹", "μ");
        m.insert("頭", "μ");

        m.insert("番", "ν");
        m.insert("号", "ν");

        m
    };

    /// Default counter readings, used when no phonological alternation
    /// applies at the numeral boundary.
    static ref DEFAULT_COUNTER_READINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("年", "ねん");
        m.insert("月", "がつ");
        m.insert("週", "しゅう");
        m.insert("日", "にち");
        m.insert("日間", "にちかん");
        m.insert("時", "じ");
        m.insert("時間", "じかん");
        m.insert("分", "ふん");
        m.insert("秒", "びょう");
        m.insert("人", "にん");
        m.insert("名", "めい");
        m.insert("本", "ほん");
        m.insert("回", "かい");
        m.insert("度", "ど");
        m.insert("円", "えん");
        m.insert("歳", "さい");
        m.insert("才", "さい");
        m.insert("個", "こ");
        m.insert("枚", "まい");
        m.insert("台", "だい");
        m.insert("匹", "ひき");
        m.insert("頭", "とう");
        m.insert("階", "かい");
        m.insert("軒", "けん");
        m.insert("杯", "はい");
        m.insert("番", "ばん");
        m.insert("号", "ごう");
        m.insert("つ", "つ");
        m
    };

    /// Explicit (numeral, counter) → (numeral_reading, counter_reading)
    /// overrides, encoding gemination, rendaku, and suppletive readings
    /// that a naive digit+counter concatenation would get wrong.
    static ref READING_ALTERNATIONS: HashMap<(i64, &'static str), (&'static str, &'static str)> = {
        let mut m = HashMap::new();

        // 促音化 (gemination) before 本/杯/回/階.
        m.insert((1, "本"), ("いっ", "ぽん"));
        m.insert((1, "杯"), ("いっ", "ぱい"));
        m.insert((1, "回"), ("いっ", "かい"));
        m.insert((1, "階"), ("いっ", "かい"));
        m.insert((6, "本"), ("ろっ", "ぽん"));
        m.insert((6, "杯"), ("ろっ", "ぱい"));
        m.insert((6, "回"), ("ろっ", "かい"));
        m.insert((8, "本"), ("はっ", "ぽん"));
        m.insert((8, "杯"), ("はっ", "ぱい"));
        m.insert((8, "回"), ("はっ", "かい"));
        m.insert((10, "本"), ("じゅっ", "ぽん"));
        m.insert((10, "杯"), ("じゅっ", "ぱい"));
        m.insert((10, "回"), ("じっ", "かい"));

        // 濁音化 (rendaku) for 本.
        m.insert((3, "本"), ("さん", "ぼん"));

        // Suppletive readings for 人.
        m.insert((1, "人"), ("ひと", "り"));
        m.insert((2, "人"), ("ふた", "り"));
        m.insert((4, "人"), ("よ", "にん"));

        // Suppletive readings for 日 (calendar dates).
        m.insert((1, "日"), ("つい", "たち"));
        m.insert((2, "日"), ("ふつ", "か"));
        m.insert((3, "日"), ("みっ", "か"));
        m.insert((4, "日"), ("よっ", "か"));
        m.insert((5, "日"), ("いつ", "か"));
        m.insert((6, "日"), ("むい", "か"));
        m.insert((7, "日"), ("なの", "か"));
        m.insert((8, "日"), ("よう", "か"));
        m.insert((9, "日"), ("ここの", "か"));
        m.insert((10, "日"), ("とお", "か"));
        m.insert((14, "日"), ("じゅうよっ", "か"));
        m.insert((20, "日"), ("はつ", "か"));
        m.insert((24, "日"), ("にじゅうよっ", "か"));

        // Suppletive readings for 時.
        m.insert((4, "時"), ("よ", "じ"));
        m.insert((7, "時"), ("しち", "じ"));
        m.insert((9, "時"), ("く", "じ"));

        m
    };

    /// (numeral, category) → override rule code:
    /// 0 = normal sandhi, 1 = force heiban, 2 = counter-initial accent,
    /// 3 = counter-final accent. Covers numerals 1..=10 only; see
    /// [`super::OverrideRule`] for how a missing entry is resolved.
    static ref OVERRIDES: HashMap<(i64, &'static str), u8> = {
        let mut m = HashMap::new();

        for n in 1..=10 {
            m.insert((n, "δ"), 1); // 年: almost always heiban.
            m.insert((n, "η"), 1); // 円: almost always heiban.
        }

        m.insert((1, "λ"), 0);
        m.insert((2, "λ"), 0);
        m.insert((3, "λ"), 1);
        m.insert((4, "λ"), 1);
        m.insert((5, "λ"), 2);
        m.insert((6, "λ"), 2);
        m.insert((7, "λ"), 2);
        m.insert((8, "λ"), 2);
        m.insert((9, "λ"), 2);
        m.insert((10, "λ"), 2);

        m.insert((1, "β"), 2);
        m.insert((2, "β"), 2);
        m.insert((3, "β"), 0);
        m.insert((4, "β"), 2);
        m.insert((5, "β"), 2);
        m.insert((6, "β"), 0);
        m.insert((7, "β"), 2);
        m.insert((8, "β"), 0);
        m.insert((9, "β"), 2);
        m.insert((10, "β"), 0);

        m.insert((1, "ε"), 2);
        m.insert((2, "ε"), 1);
        m.insert((3, "ε"), 1);
        m.insert((4, "ε"), 1);
        m.insert((5, "ε"), 1);
        m.insert((6, "ε"), 0);
        m.insert((7, "ε"), 1);
        m.insert((8, "ε"), 0);
        m.insert((9, "ε"), 1);
        m.insert((10, "ε"), 0);

        for n in 1..=10 {
            m.insert((n, "ι"), 2);
        }

        for n in 1..=10 {
            m.insert((n, "κ"), 0);
        }

        m
    };
}

pub fn counter_category(counter: &str) -> Option<&'static str> {
    COUNTER_CATEGORIES.get(counter).copied()
}

pub fn default_counter_reading(counter: &str) -> &str {
    DEFAULT_COUNTER_READINGS.get(counter).copied().unwrap_or(counter)
}

pub fn reading_alternation(numeral: i64, counter: &str) -> Option<(&'static str, &'static str)> {
    READING_ALTERNATIONS.get(&(numeral, counter)).copied()
}

pub fn override_rule(numeral: i64, category: &str) -> Option<u8> {
    OVERRIDES.get(&(numeral, category)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_match_expected_groups() {
        assert_eq!(counter_category("年"), Some("δ"));
        assert_eq!(counter_category("本"), Some("β"));
        assert_eq!(counter_category("人"), Some("λ"));
        assert_eq!(counter_category("不明"), None);
    }

    #[test]
    fn alternations_cover_gemination_and_suppletion() {
        assert_eq!(reading_alternation(1, "本"), Some(("いっ", "ぽん")));
        assert_eq!(reading_alternation(3, "本"), Some(("さん", "ぼん")));
        assert_eq!(reading_alternation(1, "人"), Some(("ひと", "り")));
        assert_eq!(reading_alternation(1, "日"), Some(("つい", "たち")));
        assert_eq!(reading_alternation(2, "年"), None);
    }

    #[test]
    fn override_table_only_covers_one_to_ten() {
        assert!(override_rule(11, "δ").is_none());
        assert_eq!(override_rule(1, "δ"), Some(1));
    }
}
