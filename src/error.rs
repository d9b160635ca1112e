// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the fallible operations of this crate.

/// Errors reported by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The number needs a scale word beyond billion.
    #[error("{value} is out of range: magnitude must be below {limit}")]
    OutOfRange { value: i64, limit: u64 },

    /// A settings document could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings could not be written out as TOML.
    #[error("could not serialize settings: {0}")]
    SettingsOutput(#[from] toml::ser::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
