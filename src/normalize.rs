// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Diacritic stripping and letter normalization.
//!
//! Both transforms drop the harakat set (tanwin, short vowels, shadda,
//! sukun, dagger alif) and tatweel, then rewrite letter variants. They
//! return a new string and keep the order of everything they leave in.

use crate::shaping::unicode_data::{is_diacritic, letters};
use crate::util::remove_where;

/// Remove diacritics and tatweel, and turn alef wasla into plain alef.
///
/// ```
/// assert_eq!(arabic_text::remove_diacritics("سَنواتٌ"), "سنوات");
/// ```
pub fn remove_diacritics(text: &str) -> String {
    strip_and_map(text, |c| match c {
        letters::ALEF_WASLA => letters::ALEF,
        other => other,
    })
}

/// Prepare Arabic text for search and indexing.
///
/// Does everything [`remove_diacritics`] does and additionally folds letter
/// variants:
/// - alef with madda, hamza above, hamza below, and alef wasla become alef
/// - alef maksura (dotless yeh) becomes yeh
/// - teh marbuta becomes heh
///
/// ```
/// assert_eq!(arabic_text::normalize("أحمد"), "احمد");
/// ```
pub fn normalize(text: &str) -> String {
    strip_and_map(text, |c| match c {
        letters::ALEF_MADDA
        | letters::ALEF_HAMZA_ABOVE
        | letters::ALEF_HAMZA_BELOW
        | letters::ALEF_WASLA => letters::ALEF,
        letters::ALEF_MAKSURA => letters::YEH,
        letters::TEH_MARBUTA => letters::HEH,
        other => other,
    })
}

fn strip_and_map(text: &str, map: impl Fn(char) -> char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let removed = remove_where(&mut chars, |&c| is_diacritic(c));

    tracing::trace!("[strip_and_map] removed {} marks", removed);

    chars.into_iter().map(map).collect()
}
