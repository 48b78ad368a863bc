// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Settings of a single run.

use crate::sequencer::{Spacing, UnknownPolicy};

/// All audio is rendered at this rate. It is plenty for a single tone.
pub const SAMPLE_RATE: u32 = 11025;
pub const DEFAULT_CHARACTER_WPM: u32 = 22;
/// Effective speed is this much slower than character speed unless given explicitly.
pub const DEFAULT_FARNSWORTH_OFFSET: u32 = 9;
pub const DEFAULT_TONE_HZ: u32 = 660;

/// Immutable settings, built once and passed by reference to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Speed at which individual characters are keyed.
    pub character_wpm: u32,
    /// Overall speed including Farnsworth spacing.
    pub effective_wpm: u32,
    /// Frequency of the keyed tone.
    pub tone_hz: u32,
    pub unknown: UnknownPolicy,
    pub spacing: Spacing,
    /// Append the legacy pad byte to the sample data.
    pub pad_data: bool,
}

impl Config {
    /// Settings for the given speeds, with everything else at its default.
    ///
    /// # Examples
    ///
    /// ```
    /// use morse_wav::config::Config;
    /// assert_eq!(Config::with_speeds(22, None).effective_wpm, 13);
    /// assert_eq!(Config::with_speeds(5, None).effective_wpm, 1);
    /// assert_eq!(Config::with_speeds(25, Some(18)).effective_wpm, 18);
    /// ```
    pub fn with_speeds(character_wpm: u32, effective_wpm: Option<u32>) -> Self {
        let effective_wpm = effective_wpm.unwrap_or_else(|| {
            std::cmp::max(character_wpm.saturating_sub(DEFAULT_FARNSWORTH_OFFSET), 1)
        });
        Config {
            character_wpm,
            effective_wpm,
            tone_hz: DEFAULT_TONE_HZ,
            unknown: UnknownPolicy::Skip,
            spacing: Spacing::Element,
            pad_data: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::with_speeds(DEFAULT_CHARACTER_WPM, None)
    }
}
