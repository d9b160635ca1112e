// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Rule-based diacritization.
//!
//! Currently a single rule: a noun following a preposition of jarr takes a
//! kasra on its last letter (توجهت إلى الشركةِ).

use crate::normalize::normalize;
use crate::shaping::unicode_data::marks::KASRA;

/// Prepositions that put the following noun in the genitive case.
const JARR_PREPOSITIONS: [&str; 8] = ["من", "إلى", "عن", "على", "مذ", "خلا", "عدا", "حاشا"];

/// Check if a word is a preposition of jarr, ignoring diacritics and letter
/// variants.
pub fn is_jarr_preposition(word: &str) -> bool {
    let word = normalize(word);
    JARR_PREPOSITIONS.iter().any(|p| normalize(p) == word)
}

/// Add the diacritics implied by the rules above.
///
/// Words are re-joined with single spaces.
pub fn tashkeel(text: &str) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    for i in 1..words.len() {
        if is_jarr_preposition(&words[i - 1]) {
            tracing::trace!("[tashkeel] kasra after {:?}", words[i - 1]);
            words[i].push(KASRA);
        }
    }

    words.join(" ")
}
