// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic text processing.
//!
//! Four independent transforms over Unicode text:
//!
//! - [`remove_diacritics`]: strip harakat and tatweel
//! - [`normalize`]: strip diacritics and fold letter variants for search
//! - [`spell_number`]: spell an integer out in Arabic words
//! - [`shape`]: convert text to presentation forms in visual order
//!
//! All of them are pure functions over their input; the lookup tables are
//! immutable, so they can be called from any number of threads.
//!
//! Behavior that has more than one reasonable choice is configured through
//! [`Settings`], which the [`ArabicShaper`] and [`NumberSpeller`] types take.

pub mod error;
pub mod normalize;
pub mod settings;
pub mod shaping;
pub mod spell;
pub mod tashkeel;
pub mod util;

pub use error::{Error, Result};
pub use normalize::{normalize, remove_diacritics};
pub use settings::{ConjunctionPolicy, Settings};
pub use shaping::{
    ArabicShaper, CharClass, PositionalForm, TextDirection, classify, is_always_initial,
    is_arabic, is_arabic_letter,
};
pub use spell::NumberSpeller;
pub use tashkeel::tashkeel;

/// Spell an integer out in Arabic words using default settings.
///
/// ```
/// assert_eq!(arabic_text::spell_number(-1).unwrap(), "سالب واحد");
/// ```
pub fn spell_number(value: i64) -> Result<String> {
    NumberSpeller::new().spell(value)
}

/// Shape text into presentation forms in visual order using default settings.
///
/// ```
/// assert_eq!(arabic_text::shape("بالعربي"), "ﻲﺑﺮﻌﻟﺎﺑ");
/// ```
pub fn shape(text: &str) -> String {
    ArabicShaper::new().shape(text)
}

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arabic_text=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::letter_shapes::letter_shape;
    use crate::shaping::unicode_data::is_diacritic;

    const SAMPLES: [&str; 6] = [
        "يَا أَيُّهَا الَّذِينَ آمَنُوا",
        "قُرْآن",
        "بريـــــــــد",
        "مكتبة منى",
        "mixed سَلام text",
        "",
    ];

    #[test]
    fn test_normalize_scenario() {
        assert_eq!(normalize("أحمد"), "احمد");
    }

    #[test]
    fn test_remove_diacritics_scenario() {
        assert_eq!(remove_diacritics("سَنواتٌ"), "سنوات");
    }

    #[test]
    fn test_normalize_idempotent_and_mark_free() {
        init_test_logging();

        for sample in SAMPLES {
            let normalized = normalize(sample);
            assert_eq!(normalize(&normalized), normalized);
            assert!(
                !normalized.chars().any(is_diacritic),
                "diacritic left in {normalized:?}"
            );

            let stripped = remove_diacritics(sample);
            assert_eq!(remove_diacritics(&stripped), stripped);
        }
    }

    #[test]
    fn test_spell_number_scenarios() {
        assert_eq!(spell_number(1250).unwrap(), "ألف و مئتان و خمسون");
        assert_eq!(spell_number(-1).unwrap(), "سالب واحد");
        assert!(matches!(
            spell_number(-5_000_000_000_000),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_shape_connected_word() {
        assert_eq!(shape("بالعربي"), "ﻲﺑﺮﻌﻟﺎﺑ");
    }

    #[test]
    fn test_shape_preserves_length_without_diacritics() {
        init_test_logging();

        for word in ["بالعربي", "مرحبا", "دار", "كتاب", "ب"] {
            assert_eq!(
                shape(word).chars().count(),
                word.chars().count(),
                "length changed for {word}"
            );
        }
    }

    #[test]
    fn test_shape_isolated_letter() {
        for c in ('\u{0621}'..='\u{063A}').chain('\u{0641}'..='\u{064A}') {
            let expected = letter_shape(c).expect("base letter has forms").isol;
            assert_eq!(
                shape(&c.to_string()),
                expected.to_string(),
                "U+{:04X} should shape to its independent form",
                c as u32
            );
        }
    }

    #[test]
    fn test_shape_mixed_script() {
        init_test_logging();

        let shaped = shape("اسمي Ahmed Ali وأنا مبرمج");

        let tokens: Vec<&str> = shaped.split(' ').collect();
        // Arabic words come out in reverse order around the untouched Latin run
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], ArabicShaper::new().shape_word("مبرمج"));
        assert_eq!(tokens[1], ArabicShaper::new().shape_word("وأنا"));
        assert_eq!(&tokens[2..4], &["Ahmed", "Ali"]);
        assert_eq!(tokens[4], ArabicShaper::new().shape_word("اسمي"));
        assert!(shaped.contains("Ahmed Ali"));
    }

    #[test]
    fn test_settings_drive_transforms() {
        let settings = Settings::from_toml_str(
            "[shaping]\nreverse_for_display = false\n\n[numbers]\nconjunction = \"always\"\n",
        )
        .expect("valid settings");

        let shaper = ArabicShaper::from_settings(&settings.shaping);
        assert_eq!(shaper.shape("بك م"), "\u{FE91}\u{FEDA} \u{FEE1}");

        let speller = NumberSpeller::from_settings(&settings.numbers);
        assert_eq!(speller.spell(30).unwrap(), "و ثلاثون");
    }

    #[test]
    fn test_classification_api() {
        assert!(is_arabic_letter('ب'));
        assert!(is_arabic("سَلام عليكم"));
        assert!(!is_arabic("hello"));
        assert!(is_always_initial('و'));
        assert_eq!(classify('\u{064E}'), CharClass::ArabicDiacritic);
    }

    #[test]
    fn test_tashkeel_then_normalize() {
        let marked = tashkeel("ذهبت إلى المدرسة");
        assert_eq!(normalize(&marked), "ذهبت الي المدرسه");
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    (
                        shape("بالعربي"),
                        spell_number(1250 + i).unwrap(),
                        normalize("أحمد"),
                    )
                })
            })
            .collect();

        for handle in handles {
            let (shaped, _, normalized) = handle.join().unwrap();
            assert_eq!(shaped, "ﻲﺑﺮﻌﻟﺎﺑ");
            assert_eq!(normalized, "احمد");
        }
    }
}
