//! Full-width to half-width normalization.
//!
//! Chinese text routinely mixes full-width Latin letters, digits and
//! punctuation (`Ａ`, `１`, `，`) with their ASCII forms. Before output the
//! full-width forms are folded to ASCII so converted lines read as plain
//! text. The table is fixed at compile time and is one-to-one: no two
//! full-width code points fold to the same ASCII character.

use phf::phf_map;

/// Full-width code point -> half-width ASCII equivalent.
static HALF_WIDTH: phf::Map<char, char> = phf_map! {
    // Digits
    '０' => '0', '１' => '1', '２' => '2', '３' => '3', '４' => '4',
    '５' => '5', '６' => '6', '７' => '7', '８' => '8', '９' => '9',

    // Upper-case Latin
    'Ａ' => 'A', 'Ｂ' => 'B', 'Ｃ' => 'C', 'Ｄ' => 'D', 'Ｅ' => 'E', 'Ｆ' => 'F',
    'Ｇ' => 'G', 'Ｈ' => 'H', 'Ｉ' => 'I', 'Ｊ' => 'J', 'Ｋ' => 'K', 'Ｌ' => 'L',
    'Ｍ' => 'M', 'Ｎ' => 'N', 'Ｏ' => 'O', 'Ｐ' => 'P', 'Ｑ' => 'Q', 'Ｒ' => 'R',
    'Ｓ' => 'S', 'Ｔ' => 'T', 'Ｕ' => 'U', 'Ｖ' => 'V', 'Ｗ' => 'W', 'Ｘ' => 'X',
    'Ｙ' => 'Y', 'Ｚ' => 'Z',

    // Lower-case Latin
    'ａ' => 'a', 'ｂ' => 'b', 'ｃ' => 'c', 'ｄ' => 'd', 'ｅ' => 'e', 'ｆ' => 'f',
    'ｇ' => 'g', 'ｈ' => 'h', 'ｉ' => 'i', 'ｊ' => 'j', 'ｋ' => 'k', 'ｌ' => 'l',
    'ｍ' => 'm', 'ｎ' => 'n', 'ｏ' => 'o', 'ｐ' => 'p', 'ｑ' => 'q', 'ｒ' => 'r',
    'ｓ' => 's', 'ｔ' => 't', 'ｕ' => 'u', 'ｖ' => 'v', 'ｗ' => 'w', 'ｘ' => 'x',
    'ｙ' => 'y', 'ｚ' => 'z',

    // CJK punctuation
    '，' => ',',
    '。' => '.',
    '？' => '?',
    '！' => '!',
    '；' => ';',
    '：' => ':',
    '（' => '(',
    '）' => ')',
    '【' => '[',
    '】' => ']',

    // Quotation marks
    '＂' => '"',
    '＇' => '\'',

    // Ideographic space
    '\u{3000}' => ' ',
};

/// Half-width equivalent of `ch`, or `None` if `ch` is not a folded code point.
pub fn half_width(ch: char) -> Option<char> {
    HALF_WIDTH.get(&ch).copied()
}

/// True if `ch` is one of the full-width code points that get folded.
pub fn is_full_width(ch: char) -> bool {
    HALF_WIDTH.contains_key(&ch)
}

/// Fold every full-width code point in `text` to its ASCII equivalent.
///
/// Code points outside the table are copied verbatim, so the function is
/// idempotent: `to_half_width(&to_half_width(s)) == to_half_width(s)`.
pub fn to_half_width(text: &str) -> String {
    text.chars().map(|c| half_width(c).unwrap_or(c)).collect()
}

/// Iterate over the whole folding table as `(full_width, half_width)` pairs.
pub fn table() -> impl Iterator<Item = (char, char)> {
    HALF_WIDTH.entries().map(|(&k, &v)| (k, v))
}
