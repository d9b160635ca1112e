// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Script segmentation of mixed Arabic/Latin text.
//!
//! Input is split into maximal runs of Arabic-block codepoints and runs of
//! everything else. Whitespace is not Arabic, so a space between two Arabic
//! words closes the first run; the whitespace-only run in between trims to
//! nothing and is dropped.

use super::TextDirection;
use super::unicode_data::is_arabic_letter;

/// A contiguous run of one script, trimmed of surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageSection {
    /// Right-to-left for Arabic runs, left-to-right for everything else.
    /// Every non-whitespace codepoint of a right-to-left section is Arabic.
    pub direction: TextDirection,
    /// The trimmed run, never empty
    pub text: String,
}

impl LanguageSection {
    fn new(direction: TextDirection, run: &str) -> Option<Self> {
        let text = run.trim();
        (!text.is_empty()).then(|| Self {
            direction,
            text: text.to_string(),
        })
    }
}

/// Split text into language sections, preserving encounter order.
pub fn segment(text: &str) -> Vec<LanguageSection> {
    let mut sections = Vec::new();
    let mut run = String::new();
    let mut direction = TextDirection::LeftToRight;

    for c in text.chars() {
        let char_direction = if is_arabic_letter(c) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        };

        if char_direction != direction && !run.is_empty() {
            sections.extend(LanguageSection::new(direction, &run));
            run.clear();
        }

        direction = char_direction;
        run.push(c);
    }

    if !run.is_empty() {
        sections.extend(LanguageSection::new(direction, &run));
    }

    tracing::trace!("[segment] {} sections from {:?}", sections.len(), text);
    sections
}
