// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Presentation-form shaping for Arabic text.
//!
//! This module turns logical Arabic text into Arabic Presentation Forms-B
//! codepoints laid out in visual order, so that renderers without an Arabic
//! shaping engine can still display connected script.
//!
//! # Architecture
//!
//! - **unicode_data**: codepoint classification (Arabic block membership,
//!   diacritics, always-initial letters).
//!
//! - **letter_shapes**: the table of isolated/initial/medial/final glyphs
//!   for each letter.
//!
//! - **segment**: splits mixed text into Arabic and non-Arabic sections.
//!
//! - **arabic**: the shaper itself, which picks a [`PositionalForm`] per
//!   letter, restores diacritics and reverses for display.
//!
//! Only word-level reordering is done; this is not a Unicode Bidirectional
//! Algorithm implementation.
//!
//! # Example
//!
//! ```
//! use arabic_text::shaping::{ArabicShaper, PositionalForm};
//!
//! let shaper = ArabicShaper::new();
//! let text: Vec<char> = "بسم".chars().collect();
//!
//! assert_eq!(shaper.determine_form(&text, 0), PositionalForm::Initial);  // beh
//! assert_eq!(shaper.determine_form(&text, 1), PositionalForm::Medial);   // seen
//! assert_eq!(shaper.determine_form(&text, 2), PositionalForm::Final);    // meem
//! ```

pub mod arabic;
pub mod letter_shapes;
pub mod segment;
pub mod unicode_data;

pub use arabic::ArabicShaper;
pub use letter_shapes::{LetterShape, letter_shape};
pub use segment::{LanguageSection, segment};
pub use unicode_data::{CharClass, classify, is_always_initial, is_arabic, is_arabic_letter};

/// Text direction of a language section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right text (Latin, digits, punctuation, etc.)
    #[default]
    LeftToRight,
    /// Right-to-left text (Arabic)
    RightToLeft,
}

impl TextDirection {
    /// Returns true if this is RTL direction
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Positional forms for Arabic letters.
///
/// A letter changes shape depending on its position within a connected
/// run. `Isolated` is the independent form used for a letter standing alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionalForm {
    /// Standalone form - letter not connected to neighbors
    #[default]
    Isolated,
    /// Beginning of a connected sequence
    Initial,
    /// Middle of a connected sequence
    Medial,
    /// End of a connected sequence
    Final,
}

impl PositionalForm {
    /// Get the OpenType feature tag that selects this form.
    pub fn feature_tag(&self) -> &'static str {
        match self {
            Self::Isolated => "isol",
            Self::Initial => "init",
            Self::Medial => "medi",
            Self::Final => "fina",
        }
    }

    /// Get a human-readable name for this form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isolated => "isolated",
            Self::Initial => "initial",
            Self::Medial => "medial",
            Self::Final => "final",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_form_feature_tag() {
        assert_eq!(PositionalForm::Isolated.feature_tag(), "isol");
        assert_eq!(PositionalForm::Initial.feature_tag(), "init");
        assert_eq!(PositionalForm::Medial.feature_tag(), "medi");
        assert_eq!(PositionalForm::Final.feature_tag(), "fina");
    }

    #[test]
    fn test_positional_form_name() {
        assert_eq!(PositionalForm::Isolated.name(), "isolated");
        assert_eq!(PositionalForm::Initial.name(), "initial");
        assert_eq!(PositionalForm::Medial.name(), "medial");
        assert_eq!(PositionalForm::Final.name(), "final");
    }

    #[test]
    fn test_text_direction() {
        assert!(TextDirection::RightToLeft.is_rtl());
        assert!(!TextDirection::LeftToRight.is_rtl());
        assert_eq!(TextDirection::default(), TextDirection::LeftToRight);
    }
}
