// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic shaping engine producing presentation-form text.
//!
//! This turns logical Arabic text into a string of Presentation Forms-B
//! codepoints, in visual order, for renderers that draw codepoints left to
//! right without their own Arabic shaping.
//!
//! # Algorithm
//!
//! 1. Segment the input into Arabic and non-Arabic sections
//! 2. Split Arabic sections into words and shape each word:
//!    - strip diacritics, remembering the original word
//!    - pick each letter's form from its immediate neighbors
//!    - put the diacritics back where they were
//!    - reverse the word
//! 3. Pass non-Arabic sections through untouched
//! 4. Reverse the token order and join with single spaces
//!
//! Form selection only looks at the letters directly before and after, and
//! a letter after an always-initial letter (alef, dal, reh, waw, ...) starts
//! a new joined run.

use super::letter_shapes::letter_shape;
use super::segment::segment;
use super::unicode_data::{is_always_initial, is_diacritic};
use super::PositionalForm;
use crate::normalize::remove_diacritics;
use crate::settings::ShapingSettings;

/// Arabic shaping engine.
///
/// # Example
///
/// ```
/// use arabic_text::ArabicShaper;
///
/// let shaper = ArabicShaper::new();
/// assert_eq!(shaper.shape("بالعربي"), "\u{FEF2}\u{FE91}\u{FEAE}\u{FECC}\u{FEDF}\u{FE8E}\u{FE91}");
/// ```
#[derive(Debug, Clone)]
pub struct ArabicShaper {
    reverse_for_display: bool,
}

impl Default for ArabicShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl ArabicShaper {
    /// Create a shaper that outputs visual (reversed) order.
    pub fn new() -> Self {
        Self {
            reverse_for_display: true,
        }
    }

    /// Create a shaper from settings.
    pub fn from_settings(settings: &ShapingSettings) -> Self {
        Self {
            reverse_for_display: settings.reverse_for_display,
        }
    }

    /// Shape mixed-script text.
    ///
    /// Arabic words are shaped individually; every non-Arabic section is
    /// kept as a single untouched token.
    pub fn shape(&self, text: &str) -> String {
        let sections = segment(text);

        let mut tokens: Vec<String> = Vec::with_capacity(sections.len());
        for section in &sections {
            if section.direction.is_rtl() {
                tokens.extend(section.text.split_whitespace().map(|w| self.shape_word(w)));
            } else {
                tokens.push(section.text.clone());
            }
        }

        if self.reverse_for_display {
            tokens.reverse();
        }

        tracing::debug!(
            "[shape] {} sections -> {} tokens",
            sections.len(),
            tokens.len()
        );

        tokens.join(" ")
    }

    /// Shape a single Arabic word, keeping its diacritics.
    pub fn shape_word(&self, word: &str) -> String {
        let original: Vec<char> = word.chars().collect();
        let letters: Vec<char> = remove_diacritics(word).chars().collect();

        let shaped: Vec<char> = (0..letters.len())
            .filter_map(|i| self.shape_char_at(&letters, i))
            .collect();

        let mut glyphs = if shaped.len() == original.len() {
            shaped
        } else {
            restore_diacritics(&original, &shaped)
        };

        if self.reverse_for_display {
            glyphs.reverse();
        }

        glyphs.into_iter().collect()
    }

    /// Shape the letter at `index` of a diacritic-free word.
    ///
    /// Codepoints without presentation forms come back unchanged. Returns
    /// None if `index` is past the end of the word.
    pub fn shape_char_at(&self, word: &[char], index: usize) -> Option<char> {
        let c = *word.get(index)?;
        let Some(shape) = letter_shape(c) else {
            return Some(c);
        };

        let form = self.determine_form(word, index);
        let glyph = shape.form(form);

        tracing::trace!(
            "[shape_char_at] U+{:04X} at {} -> {} U+{:04X}",
            c as u32,
            index,
            form.name(),
            glyph as u32
        );

        Some(glyph)
    }

    /// Determine the positional form for the letter at `index`.
    ///
    /// - between two letters: medial, or initial after an always-initial letter
    /// - first of several: initial
    /// - last of several: final, or isolated after an always-initial letter
    /// - alone: isolated
    pub fn determine_form(&self, word: &[char], index: usize) -> PositionalForm {
        let back = index.checked_sub(1).and_then(|i| word.get(i)).copied();
        let front = word.get(index + 1);

        match (back, front) {
            (Some(back), Some(_)) => {
                if is_always_initial(back) {
                    PositionalForm::Initial
                } else {
                    PositionalForm::Medial
                }
            }
            (None, Some(_)) => PositionalForm::Initial,
            (Some(back), None) => {
                if is_always_initial(back) {
                    PositionalForm::Isolated
                } else {
                    PositionalForm::Final
                }
            }
            (None, None) => PositionalForm::Isolated,
        }
    }
}

/// Interleave shaped letters back into the original word.
///
/// Every codepoint removed by diacritic stripping stays where it was; every
/// other position takes the next shaped letter.
fn restore_diacritics(original: &[char], shaped: &[char]) -> Vec<char> {
    let mut letters = shaped.iter().copied();

    let restored = original
        .iter()
        .map(|&c| {
            if is_diacritic(c) {
                c
            } else {
                letters.next().unwrap_or(c)
            }
        })
        .collect();

    tracing::trace!(
        "[restore_diacritics] {} letters into {} codepoints",
        shaped.len(),
        original.len()
    );

    restored
}
