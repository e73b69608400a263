use diag_core::BitString;

/// Flips every bit.
pub fn invert(bits: &BitString) -> BitString {
    bits.inverted()
}

/// Flips `'0'` and `'1'` in raw text, passing any other character through unchanged.
///
/// Unlike [`invert`] this accepts unvalidated input, e.g. `"10_1"` becomes `"01_0"`.
pub fn invert_raw(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '0' => '1',
            '1' => '0',
            other => other,
        })
        .collect()
}
