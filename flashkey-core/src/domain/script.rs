//! Script classification for CJK text
//!
//! CJK characters are never separated by spaces, so every one of them acts
//! as a word boundary regardless of the word-character set.

/// Code point ranges treated as CJK (inclusive)
const CJK_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x11FF),   // Hangul Jamo
    (0x2E80, 0x2FDF),   // CJK Radicals Supplement, Kangxi Radicals
    (0x3000, 0x303F),   // CJK Symbols and Punctuation
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x3100, 0x312F),   // Bopomofo
    (0x3130, 0x318F),   // Hangul Compatibility Jamo
    (0x3190, 0x319F),   // Kanbun
    (0x31A0, 0x31BF),   // Bopomofo Extended
    (0x31C0, 0x31EF),   // CJK Strokes
    (0x31F0, 0x31FF),   // Katakana Phonetic Extensions
    (0x3200, 0x32FF),   // Enclosed CJK Letters and Months
    (0x3300, 0x33FF),   // CJK Compatibility
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0xA960, 0xA97F),   // Hangul Jamo Extended-A
    (0xAC00, 0xD7AF),   // Hangul Syllables
    (0xD7B0, 0xD7FF),   // Hangul Jamo Extended-B
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0xFF66, 0xFF9F),   // Halfwidth Katakana
    (0xFFA0, 0xFFDC),   // Halfwidth Hangul
    (0x20000, 0x2EBEF), // CJK Unified Ideographs Extensions B-F
    (0x2F800, 0x2FA1F), // CJK Compatibility Ideographs Supplement
    (0x30000, 0x323AF), // CJK Unified Ideographs Extensions G-H
];

/// Check whether a character belongs to a CJK script - hot path
#[inline]
pub fn is_cjk(ch: char) -> bool {
    let cp = ch as u32;
    if cp < 0x1100 {
        // Fast path: Latin, Greek, Cyrillic and friends
        return false;
    }
    CJK_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}
