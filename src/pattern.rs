//! Converts an accent type into an explicit L/H pattern over mora.

/// Expands `accent_type` over `mora_count` mora into a string of `L`/`H`
/// characters, one per position. When `include_particle` is true, one
/// extra trailing position is generated to show the pitch a following
/// particle would carry (the convention used by e.g. JPDB).
///
/// - `accent_type == 0` (heiban): low, then high through the rest
///   (including the particle).
/// - `accent_type == 1` (atamadaka): high, then low.
/// - otherwise (nakadaka/odaka): low, rising to high, dropping back to low
///   after the `accent_type`-th mora.
/// - an `accent_type` beyond `mora_count + 1` degrades to the heiban shape,
///   since there's nowhere left for the drop to land.
pub fn expand_pattern(accent_type: i32, mora_count: usize, include_particle: bool) -> String {
    if mora_count == 0 {
        return String::new();
    }

    let total = mora_count + usize::from(include_particle);

    if mora_count == 1 && !include_particle {
        return if accent_type == 1 { "H" } else { "L" }.to_string();
    }

    if accent_type == 0 {
        return format!("L{}", "H".repeat(total - 1));
    }
    if accent_type == 1 {
        return format!("H{}", "L".repeat(total - 1));
    }

    if accent_type < 0 || accent_type as usize > total {
        // Out-of-range accent: nowhere for the drop to land, degrade to heiban.
        return format!("L{}", "H".repeat(total - 1));
    }

    let accent_type = accent_type as usize;
    let high_count = accent_type - 1;
    let low_count = total - accent_type;
    format!("L{}{}", "H".repeat(high_count), "L".repeat(low_count))
}
