// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Presentation-form table for Arabic letters.
//!
//! Maps a base letter to the Arabic Presentation Forms-B codepoints used
//! when the letter stands alone, starts, continues or ends a joined run.
//! Letters that do not join forward reuse their base codepoint (or the
//! final form) for the initial and medial slots.
//!
//! See: https://web.stanford.edu/dept/lc/arabic/alphabet/incontextletters.html

use super::PositionalForm;

/// The four presentation forms of one letter.
///
/// Field names follow the OpenType feature tags for each form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LetterShape {
    /// Independent (isolated) form
    pub isol: char,
    /// Initial form
    pub init: char,
    /// Medial form
    pub medi: char,
    /// Final form
    pub fina: char,
}

impl LetterShape {
    const fn new(isol: char, init: char, medi: char, fina: char) -> Self {
        Self {
            isol,
            init,
            medi,
            fina,
        }
    }

    /// Codepoint for the given positional form.
    #[inline]
    pub fn form(&self, form: PositionalForm) -> char {
        match form {
            PositionalForm::Isolated => self.isol,
            PositionalForm::Initial => self.init,
            PositionalForm::Medial => self.medi,
            PositionalForm::Final => self.fina,
        }
    }
}

/// Look up the presentation forms of a letter.
///
/// Returns None for codepoints without joining behavior (marks, digits,
/// punctuation, non-Arabic text).
pub fn letter_shape(c: char) -> Option<LetterShape> {
    let shape = match c {
        // Hamza and hamza carriers
        '\u{0621}' => LetterShape::new('\u{FE80}', '\u{0621}', '\u{0621}', '\u{0621}'), // hamza
        '\u{0622}' => LetterShape::new('\u{FE81}', '\u{0622}', '\u{FE82}', '\u{FE82}'), // alef madda
        '\u{0623}' => LetterShape::new('\u{FE83}', '\u{0623}', '\u{FE84}', '\u{FE84}'), // alef hamza above
        '\u{0624}' => LetterShape::new('\u{FE85}', '\u{0624}', '\u{FE86}', '\u{FE86}'), // waw hamza
        '\u{0625}' => LetterShape::new('\u{FE87}', '\u{0625}', '\u{FE88}', '\u{FE88}'), // alef hamza below
        '\u{0626}' => LetterShape::new('\u{FE89}', '\u{FE8B}', '\u{FE8C}', '\u{FE8A}'), // yeh hamza

        // Alef
        '\u{0627}' => LetterShape::new('\u{FE8D}', '\u{0627}', '\u{FE8E}', '\u{FE8E}'),

        // Beh group
        '\u{0628}' => LetterShape::new('\u{FE8F}', '\u{FE91}', '\u{FE92}', '\u{FE90}'), // beh
        '\u{0629}' => LetterShape::new('\u{FE93}', '\u{0629}', '\u{0629}', '\u{FE94}'), // teh marbuta
        '\u{062A}' => LetterShape::new('\u{FE95}', '\u{FE97}', '\u{FE98}', '\u{FE96}'), // teh
        '\u{062B}' => LetterShape::new('\u{FE99}', '\u{FE9B}', '\u{FE9C}', '\u{FE9A}'), // theh

        // Jeem group
        '\u{062C}' => LetterShape::new('\u{FE9D}', '\u{FE9F}', '\u{FEA0}', '\u{FE9E}'), // jeem
        '\u{062D}' => LetterShape::new('\u{FEA1}', '\u{FEA3}', '\u{FEA4}', '\u{FEA2}'), // hah
        '\u{062E}' => LetterShape::new('\u{FEA5}', '\u{FEA7}', '\u{FEA8}', '\u{FEA6}'), // khah

        // Dal and reh groups
        '\u{062F}' => LetterShape::new('\u{FEA9}', '\u{062F}', '\u{FEAA}', '\u{FEAA}'), // dal
        '\u{0630}' => LetterShape::new('\u{FEAB}', '\u{0630}', '\u{FEAC}', '\u{FEAC}'), // thal
        '\u{0631}' => LetterShape::new('\u{FEAD}', '\u{0631}', '\u{FEAE}', '\u{FEAE}'), // reh
        '\u{0632}' => LetterShape::new('\u{FEAF}', '\u{0632}', '\u{FEB0}', '\u{FEB0}'), // zain

        // Seen, sad, tah, ain groups
        '\u{0633}' => LetterShape::new('\u{FEB1}', '\u{FEB3}', '\u{FEB4}', '\u{FEB2}'), // seen
        '\u{0634}' => LetterShape::new('\u{FEB5}', '\u{FEB7}', '\u{FEB8}', '\u{FEB6}'), // sheen
        '\u{0635}' => LetterShape::new('\u{FEB9}', '\u{FEBB}', '\u{FEBC}', '\u{FEBA}'), // sad
        '\u{0636}' => LetterShape::new('\u{FEBD}', '\u{FEBF}', '\u{FEC0}', '\u{FEBE}'), // dad
        '\u{0637}' => LetterShape::new('\u{FEC1}', '\u{FEC3}', '\u{FEC4}', '\u{FEC2}'), // tah
        '\u{0638}' => LetterShape::new('\u{FEC5}', '\u{FEC7}', '\u{FEC8}', '\u{FEC6}'), // zah
        '\u{0639}' => LetterShape::new('\u{FEC9}', '\u{FECB}', '\u{FECC}', '\u{FECA}'), // ain
        '\u{063A}' => LetterShape::new('\u{FECD}', '\u{FECF}', '\u{FED0}', '\u{FECE}'), // ghain

        // Tatweel joins on both sides and has a single shape
        '\u{0640}' => LetterShape::new('\u{0640}', '\u{0640}', '\u{0640}', '\u{0640}'),

        '\u{0641}' => LetterShape::new('\u{FED1}', '\u{FED3}', '\u{FED4}', '\u{FED2}'), // feh
        '\u{0642}' => LetterShape::new('\u{FED5}', '\u{FED7}', '\u{FED8}', '\u{FED6}'), // qaf
        '\u{0643}' => LetterShape::new('\u{FED9}', '\u{FEDB}', '\u{FEDC}', '\u{FEDA}'), // kaf
        '\u{0644}' => LetterShape::new('\u{FEDD}', '\u{FEDF}', '\u{FEE0}', '\u{FEDE}'), // lam
        '\u{0645}' => LetterShape::new('\u{FEE1}', '\u{FEE3}', '\u{FEE4}', '\u{FEE2}'), // meem
        '\u{0646}' => LetterShape::new('\u{FEE5}', '\u{FEE7}', '\u{FEE8}', '\u{FEE6}'), // noon
        '\u{0647}' => LetterShape::new('\u{FEE9}', '\u{FEEB}', '\u{FEEC}', '\u{FEEA}'), // heh
        '\u{0648}' => LetterShape::new('\u{FEED}', '\u{0648}', '\u{FEEE}', '\u{FEEE}'), // waw
        '\u{0649}' => LetterShape::new('\u{FEEF}', '\u{0649}', '\u{FEF0}', '\u{FEF0}'), // alef maksura
        '\u{064A}' => LetterShape::new('\u{FEF1}', '\u{FEF3}', '\u{FEF4}', '\u{FEF2}'), // yeh

        // Lam-alef ligatures
        '\u{FEF5}' => LetterShape::new('\u{FEF5}', '\u{FEF5}', '\u{FEF6}', '\u{FEF6}'), // with madda
        '\u{FEF7}' => LetterShape::new('\u{FEF7}', '\u{FEF7}', '\u{FEF8}', '\u{FEF8}'), // with hamza above
        '\u{FEF9}' => LetterShape::new('\u{FEF9}', '\u{FEF9}', '\u{FEFA}', '\u{FEFA}'), // with hamza below
        '\u{FEFB}' => LetterShape::new('\u{FEFB}', '\u{FEFB}', '\u{FEFC}', '\u{FEFC}'), // plain

        _ => return None,
    };
    Some(shape)
}

/// Check if a codepoint has an entry in the presentation-form table.
#[inline]
pub fn has_shape(c: char) -> bool {
    letter_shape(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beh_forms() {
        let beh = letter_shape('\u{0628}').expect("beh has forms");
        assert_eq!(beh.form(PositionalForm::Isolated), '\u{FE8F}');
        assert_eq!(beh.form(PositionalForm::Initial), '\u{FE91}');
        assert_eq!(beh.form(PositionalForm::Medial), '\u{FE92}');
        assert_eq!(beh.form(PositionalForm::Final), '\u{FE90}');
    }

    #[test]
    fn test_right_joining_initial_is_base_letter() {
        for c in ['\u{0627}', '\u{062F}', '\u{0630}', '\u{0631}', '\u{0632}', '\u{0648}'] {
            let shape = letter_shape(c).expect("letter has forms");
            assert_eq!(
                shape.init, c,
                "Expected U+{:04X} to keep its base codepoint as initial form",
                c as u32
            );
            assert_eq!(shape.medi, shape.fina);
        }
    }

    #[test]
    fn test_marks_have_no_shape() {
        assert!(!has_shape('\u{064E}')); // fatha
        assert!(!has_shape('\u{0670}')); // superscript alef
        assert!(!has_shape('\u{0671}')); // alef wasla
        assert!(!has_shape('\u{060C}')); // arabic comma
        assert!(!has_shape('a'));
    }

    #[test]
    fn test_every_base_letter_has_shape() {
        // hamza through ghain, then feh through yeh
        let letters = ('\u{0621}'..='\u{063A}').chain('\u{0641}'..='\u{064A}');
        for c in letters {
            assert!(has_shape(c), "Missing forms for U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_lam_alef_ligatures() {
        let lam_alef = letter_shape('\u{FEFB}').expect("ligature has forms");
        assert_eq!(lam_alef.form(PositionalForm::Isolated), '\u{FEFB}');
        assert_eq!(lam_alef.form(PositionalForm::Final), '\u{FEFC}');
    }
}
