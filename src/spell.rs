// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Spelling integers out as Arabic words.
//!
//! The number is split into base-1000 groups, each spoken as hundreds,
//! tens and ones followed by its scale word (thousand, million, billion).
//! Zero groups are skipped entirely. Magnitudes that would need a scale
//! beyond billion are rejected.

use crate::error::{Error, Result};
use crate::settings::numbers::{GROUP_BASE, LIMIT};
use crate::settings::{ConjunctionPolicy, NumberSettings};

// ============================================================================
// WORD TABLES
// ============================================================================

const ONES: [&str; 10] = [
    "صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
];

/// Ten through nineteen, indexed by the ones digit
const TEENS: [&str; 10] = [
    "عشرة",
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];

const TENS: [&str; 10] = [
    "", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];

const HUNDREDS: [&str; 10] = [
    "", "مئة", "مئتان", "ثلاثمئة", "أربعمئة", "خمسمئة", "ستمئة", "سبعمئة", "ثمانمئة", "تسعمئة",
];

/// Scale word per group position; the units group has none
const SCALES: [&str; 4] = ["", "ألف", "مليون", "مليار"];

const NEGATIVE: &str = "سالب";

const AND: &str = "و";

// ============================================================================
// SPELLER
// ============================================================================

/// Converts integers to Arabic words.
///
/// ```
/// use arabic_text::NumberSpeller;
///
/// let speller = NumberSpeller::new();
/// assert_eq!(speller.spell(1250).unwrap(), "ألف و مئتان و خمسون");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberSpeller {
    conjunction: ConjunctionPolicy,
}

impl NumberSpeller {
    /// Create a speller using the default conjunction policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a speller from settings.
    pub fn from_settings(settings: &NumberSettings) -> Self {
        Self {
            conjunction: settings.conjunction,
        }
    }

    /// Spell `value` out in words.
    ///
    /// Fails with [`Error::OutOfRange`] when `|value|` is 10^12 or more.
    pub fn spell(&self, value: i64) -> Result<String> {
        let magnitude = value.unsigned_abs();
        if magnitude >= LIMIT {
            return Err(Error::OutOfRange {
                value,
                limit: LIMIT,
            });
        }

        let mut words: Vec<&'static str> = Vec::new();
        if value < 0 {
            words.push(NEGATIVE);
        }

        if magnitude < 10 {
            words.push(ONES[magnitude as usize]);
            return Ok(words.join(" "));
        }

        // Words before this index are the sign, not part of the number
        let number_start = words.len();

        let groups = digit_groups(magnitude);
        tracing::trace!("[spell] {} -> groups {:?}", value, groups);

        let top = groups.len() - 1;
        for (scale, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                continue;
            }

            let hundreds = (group / 100 % 10) as usize;
            let tens = (group / 10 % 10) as usize;
            let ones = (group % 10) as usize;

            if hundreds > 0 {
                if scale != top {
                    words.push(AND);
                }
                words.push(HUNDREDS[hundreds]);
            }

            match tens {
                // A lone one is implied by the scale or hundreds word
                0 => {
                    if ones > 1 {
                        words.push(ONES[ones]);
                    }
                }
                1 => words.push(TEENS[ones]),
                _ => {
                    let preceded = words.len() > number_start;
                    if preceded || self.conjunction == ConjunctionPolicy::Always {
                        words.push(AND);
                    }
                    if ones > 0 {
                        words.push(ONES[ones]);
                        words.push(AND);
                    }
                    words.push(TENS[tens]);
                }
            }

            if let Some(&word) = SCALES.get(scale).filter(|w| !w.is_empty()) {
                words.push(word);
            }
        }

        Ok(words.join(" "))
    }
}

/// Split a magnitude into base-1000 groups, least significant first.
fn digit_groups(mut magnitude: u64) -> Vec<u64> {
    let mut groups = Vec::new();
    while magnitude > 0 {
        groups.push(magnitude % GROUP_BASE);
        magnitude /= GROUP_BASE;
    }
    groups
}
