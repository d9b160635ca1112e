// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode character property data for Arabic text processing.
//!
//! Classification here is coarse: anything in the Arabic block
//! (U+0600–U+06FF) counts as "Arabic" for segmentation, marks included, so
//! a diacritic never splits an Arabic run.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::settings::unicode::{ARABIC_END, ARABIC_START};

/// Named letters used by normalization and shaping.
pub mod letters {
    /// ARABIC LETTER HAMZA (ء)
    pub const HAMZA: char = '\u{0621}';
    /// ARABIC LETTER ALEF WITH MADDA ABOVE (آ)
    pub const ALEF_MADDA: char = '\u{0622}';
    /// ARABIC LETTER ALEF WITH HAMZA ABOVE (أ)
    pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
    /// ARABIC LETTER WAW WITH HAMZA ABOVE (ؤ)
    pub const WAW_HAMZA: char = '\u{0624}';
    /// ARABIC LETTER ALEF WITH HAMZA BELOW (إ)
    pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
    /// ARABIC LETTER ALEF (ا)
    pub const ALEF: char = '\u{0627}';
    /// ARABIC LETTER TEH MARBUTA (ة)
    pub const TEH_MARBUTA: char = '\u{0629}';
    /// ARABIC LETTER DAL (د)
    pub const DAL: char = '\u{062F}';
    /// ARABIC LETTER THAL (ذ)
    pub const THAL: char = '\u{0630}';
    /// ARABIC LETTER REH (ر)
    pub const REH: char = '\u{0631}';
    /// ARABIC LETTER ZAIN (ز)
    pub const ZAIN: char = '\u{0632}';
    /// ARABIC LETTER HEH (ه)
    pub const HEH: char = '\u{0647}';
    /// ARABIC LETTER WAW (و)
    pub const WAW: char = '\u{0648}';
    /// ARABIC LETTER ALEF MAKSURA, the dotless yeh (ى)
    pub const ALEF_MAKSURA: char = '\u{0649}';
    /// ARABIC LETTER YEH (ي)
    pub const YEH: char = '\u{064A}';
    /// ARABIC LETTER ALEF WASLA (ٱ)
    pub const ALEF_WASLA: char = '\u{0671}';
}

/// Named marks removed by diacritic stripping.
pub mod marks {
    /// ARABIC TATWEEL (kashida)
    pub const TATWEEL: char = '\u{0640}';
    /// ARABIC FATHATAN
    pub const FATHATAN: char = '\u{064B}';
    /// ARABIC DAMMATAN
    pub const DAMMATAN: char = '\u{064C}';
    /// ARABIC KASRATAN
    pub const KASRATAN: char = '\u{064D}';
    /// ARABIC FATHA
    pub const FATHA: char = '\u{064E}';
    /// ARABIC DAMMA
    pub const DAMMA: char = '\u{064F}';
    /// ARABIC KASRA
    pub const KASRA: char = '\u{0650}';
    /// ARABIC SHADDA
    pub const SHADDA: char = '\u{0651}';
    /// ARABIC SUKUN
    pub const SUKUN: char = '\u{0652}';
    /// ARABIC LETTER SUPERSCRIPT ALEF (dagger alif)
    pub const SUPERSCRIPT_ALEF: char = '\u{0670}';
}

/// Letters that never join the letter after them.
const ALWAYS_INITIAL: [char; 13] = [
    letters::ALEF,
    letters::ALEF_HAMZA_ABOVE,
    letters::ALEF_MADDA,
    letters::ALEF_HAMZA_BELOW,
    letters::ALEF_MAKSURA,
    letters::HAMZA,
    letters::WAW_HAMZA,
    letters::TEH_MARBUTA,
    letters::DAL,
    letters::THAL,
    letters::REH,
    letters::ZAIN,
    letters::WAW,
];

/// Coarse classification of a codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Arabic-block codepoint that is not a mark
    ArabicLetter,
    /// Arabic-block mark (harakat, tatweel, Quranic annotation)
    ArabicDiacritic,
    /// Latin, digits, punctuation, whitespace and everything else
    Other,
}

/// Check if a codepoint lies in the Arabic block (U+0600–U+06FF).
///
/// Marks are included, so this is true for diacritics as well as letters.
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    (ARABIC_START..=ARABIC_END).contains(&(c as u32))
}

/// Check if every non-whitespace codepoint of `text` is Arabic.
///
/// Empty and whitespace-only text is vacuously Arabic.
pub fn is_arabic(text: &str) -> bool {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .all(is_arabic_letter)
}

/// Check if a letter never connects to the letter following it.
#[inline]
pub fn is_always_initial(c: char) -> bool {
    ALWAYS_INITIAL.contains(&c)
}

/// Check if a codepoint is removed by diacritic stripping.
#[inline]
pub fn is_diacritic(c: char) -> bool {
    matches!(
        c,
        marks::TATWEEL | marks::FATHATAN..=marks::SUKUN | marks::SUPERSCRIPT_ALEF
    )
}

/// Classify a codepoint as Arabic letter, Arabic diacritic or other.
pub fn classify(c: char) -> CharClass {
    if !is_arabic_letter(c) {
        return CharClass::Other;
    }

    if is_diacritic(c) || matches!(get_general_category(c), GeneralCategory::NonspacingMark) {
        CharClass::ArabicDiacritic
    } else {
        CharClass::ArabicLetter
    }
}
