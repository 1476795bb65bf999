// File: crates/perfplot-core/src/color.rs
// Summary: Series color identifiers (names, single-letter codes, C0..C9, hex) resolved to Skia colors.

use skia_safe as skia;

/// Default color cycle (tab10), referenced as `C0`..`C9`.
pub const CYCLE: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

/// Color of the `index`-th series that did not name one.
pub fn cycle(index: usize) -> skia::Color {
    let (r, g, b) = CYCLE[index % CYCLE.len()];
    skia::Color::from_rgb(r, g, b)
}

/// Resolve a color identifier. Case-insensitive; surrounding whitespace ignored.
pub fn parse(name: &str) -> Option<skia::Color> {
    let name = name.trim().to_ascii_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    // cycle references are exactly `c` plus one digit
    if let [b'c', d] = name.as_bytes() {
        if d.is_ascii_digit() {
            return Some(cycle(usize::from(d - b'0')));
        }
    }
    let rgb = match name.as_str() {
        "r" | "red" => (255, 0, 0),
        "g" => (0, 128, 0),
        "green" => (0, 128, 0),
        "b" | "blue" => (0, 0, 255),
        "c" => (0, 191, 191),
        "cyan" => (0, 255, 255),
        "m" => (191, 0, 191),
        "magenta" => (255, 0, 255),
        "y" => (191, 191, 0),
        "yellow" => (255, 255, 0),
        "k" | "black" => (0, 0, 0),
        "w" | "white" => (255, 255, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        "gray" | "grey" => (128, 128, 128),
        "olive" => (128, 128, 0),
        _ => return None,
    };
    Some(skia::Color::from_rgb(rgb.0, rgb.1, rgb.2))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    let byte = |i: usize| hex.get(i..i + 2).and_then(|s| u8::from_str_radix(s, 16).ok());
    match hex.len() {
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_codes_and_hex_agree() {
        assert_eq!(parse("red"), parse("r"));
        assert_eq!(parse(" Blue "), Some(skia::Color::from_rgb(0, 0, 255)));
        assert_eq!(parse("#ff0000"), parse("red"));
        assert_eq!(parse("#00ff0080").map(|c| c.a()), Some(0x80));
        assert_eq!(parse("C3"), Some(cycle(3)));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert_eq!(parse("chartreuse-ish"), None);
        assert_eq!(parse("#12345"), None);
        assert_eq!(parse("C10"), None);
    }

    #[test]
    fn cycle_reference_is_one_digit() {
        assert_eq!(parse("c0"), Some(cycle(0)));
        assert_eq!(parse("C9"), Some(cycle(9)));
        assert_eq!(parse("C+5"), None);
        assert_eq!(parse("c07"), None);
        assert_eq!(parse("C-1"), None);
        // bare `c` is still the cyan code
        assert_eq!(parse("c"), Some(skia::Color::from_rgb(0, 191, 191)));
    }
}
