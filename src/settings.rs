// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Library settings and configuration constants.
//!
//! Fixed values (Unicode block bounds, number scale limits) are plain
//! constants re-exported through small public modules. Behavior that a
//! caller may want to tune lives in [`Settings`], which can be built in
//! code or loaded from a TOML file:
//!
//! ```toml
//! [shaping]
//! reverse_for_display = true
//!
//! [numbers]
//! conjunction = "when_preceded"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// UNICODE SETTINGS
// ============================================================================
/// First codepoint of the Arabic block
const ARABIC_BLOCK_START: u32 = 0x0600;

/// Last codepoint of the Arabic block
const ARABIC_BLOCK_END: u32 = 0x06FF;

// ============================================================================
// NUMBER SETTINGS
// ============================================================================
/// Size of one digit group
const GROUP_BASE: u64 = 1000;

/// Number of scale words available (units, thousand, million, billion)
const SCALE_COUNT: u32 = 4;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Unicode ranges used for script classification
pub mod unicode {
    /// First codepoint of the Arabic block (U+0600)
    pub const ARABIC_START: u32 = super::ARABIC_BLOCK_START;

    /// Last codepoint of the Arabic block (U+06FF)
    pub const ARABIC_END: u32 = super::ARABIC_BLOCK_END;
}

/// Limits for the number speller
pub mod numbers {
    /// Base of one digit group
    pub const GROUP_BASE: u64 = super::GROUP_BASE;

    /// Number of scale groups that have a word
    pub const SCALE_COUNT: u32 = super::SCALE_COUNT;

    /// First magnitude that needs a scale word beyond billion (10^12)
    pub const LIMIT: u64 = GROUP_BASE.pow(SCALE_COUNT);
}

// ============================================================================
// RUNTIME SETTINGS
// ============================================================================

/// When the conjunction "و" is placed in front of a tens phrase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjunctionPolicy {
    /// Only when the number already produced words
    #[default]
    WhenPreceded,
    /// Always, even for a leading tens phrase
    Always,
}

/// Shaper behavior
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingSettings {
    /// Reverse words and letters so a left-to-right renderer shows the text
    /// in right-to-left visual order. When false, logical order is kept.
    pub reverse_for_display: bool,
}

impl Default for ShapingSettings {
    fn default() -> Self {
        Self {
            reverse_for_display: true,
        }
    }
}

/// Number speller behavior
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberSettings {
    pub conjunction: ConjunctionPolicy,
}

/// All tunable settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shaping: ShapingSettings,
    pub numbers: NumberSettings,
}

impl Settings {
    /// Parse settings from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load settings from a TOML file on disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading settings: {}", path.display());

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;

        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Serialize settings back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
