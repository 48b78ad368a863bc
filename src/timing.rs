// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Conversion of keying speeds into sample counts.

use snafu::{ensure, Snafu};

/// Dot units in the standard word "PARIS", including the gap that follows it.
pub const UNITS_PER_WORD: u64 = 50;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum TimingError {
    #[snafu(display(
        "Speeds must be positive (character {} wpm, effective {} wpm)",
        character_wpm,
        effective_wpm
    ))]
    NonPositiveRate {
        character_wpm: u32,
        effective_wpm: u32,
    },
    #[snafu(display(
        "Effective speed {} wpm exceeds the character speed {} wpm",
        effective_wpm,
        character_wpm
    ))]
    EffectiveFasterThanCharacter {
        character_wpm: u32,
        effective_wpm: u32,
    },
    #[snafu(display(
        "At {} wpm a dot is shorter than one sample at {} Hz",
        character_wpm,
        sample_rate
    ))]
    TooFast { character_wpm: u32, sample_rate: u32 },
}

/// Sample durations derived from the character and effective (Farnsworth) speeds.
///
/// Characters are keyed at the character speed. The extra quiet needed to bring the overall
/// throughput down to the effective speed is expressed as `farnsworth` additional dot units
/// after every character, and twice that after every word.
///
/// # Examples
///
/// ```
/// use morse_wav::timing::Timing;
///
/// let timing = Timing::new(20, 20, 11025).unwrap();
/// assert_eq!(timing.unit_samples(), 661);
/// assert_eq!(timing.farnsworth(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    sample_rate: u32,
    unit_samples: usize,
    farnsworth: f64,
}

impl Timing {
    pub fn new(character_wpm: u32, effective_wpm: u32, sample_rate: u32) -> Result<Self, TimingError> {
        ensure!(
            character_wpm > 0 && effective_wpm > 0,
            NonPositiveRate {
                character_wpm,
                effective_wpm
            }
        );
        ensure!(
            effective_wpm <= character_wpm,
            EffectiveFasterThanCharacter {
                character_wpm,
                effective_wpm
            }
        );

        let unit_samples =
            (u64::from(sample_rate) * 60 / (u64::from(character_wpm) * UNITS_PER_WORD)) as usize;
        ensure!(
            unit_samples > 0,
            TooFast {
                character_wpm,
                sample_rate
            }
        );

        let farnsworth = UNITS_PER_WORD as f64 * f64::from(character_wpm - effective_wpm)
            / f64::from(effective_wpm)
            / 7.0;

        Ok(Timing {
            sample_rate,
            unit_samples,
            farnsworth,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples in one dot.
    pub fn unit_samples(&self) -> usize {
        self.unit_samples
    }

    /// Extra dot units of quiet inserted between characters.
    pub fn farnsworth(&self) -> f64 {
        self.farnsworth
    }

    /// Length of one dot in seconds.
    pub fn unit_seconds(&self) -> f64 {
        self.unit_samples as f64 / f64::from(self.sample_rate)
    }

    /// Number of samples spanned by a (possibly fractional) number of units, truncated.
    pub fn samples_for(&self, units: f64) -> usize {
        (units * self.unit_samples as f64) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_speeds() {
        let timing = Timing::new(22, 13, 11025).unwrap();
        // 11025 * 1.2 / 22 = 601.36...
        assert_eq!(timing.unit_samples(), 601);
        assert!((timing.farnsworth() - 450.0 / 91.0).abs() < 1e-12);
        assert!((timing.unit_seconds() - 601.0 / 11025.0).abs() < 1e-12);
    }

    #[test]
    fn valid_speeds_are_well_formed() {
        for character_wpm in 1..=80 {
            for effective_wpm in 1..=character_wpm {
                let timing = Timing::new(character_wpm, effective_wpm, 11025).unwrap();
                assert!(timing.unit_samples() > 0);
                assert!(timing.farnsworth() >= 0.0);
            }
        }
    }

    #[test]
    fn rejects_zero_rates() {
        assert_eq!(
            Timing::new(0, 0, 11025),
            Err(TimingError::NonPositiveRate {
                character_wpm: 0,
                effective_wpm: 0
            })
        );
        assert!(matches!(
            Timing::new(20, 0, 11025),
            Err(TimingError::NonPositiveRate { .. })
        ));
    }

    #[test]
    fn rejects_effective_above_character() {
        assert_eq!(
            Timing::new(13, 22, 11025),
            Err(TimingError::EffectiveFasterThanCharacter {
                character_wpm: 13,
                effective_wpm: 22
            })
        );
    }

    #[test]
    fn rejects_sub_sample_dots() {
        assert!(Timing::new(13230, 13230, 11025).is_ok());
        assert_eq!(
            Timing::new(13231, 13231, 11025),
            Err(TimingError::TooFast {
                character_wpm: 13231,
                sample_rate: 11025
            })
        );
    }

    #[test]
    fn fractional_units_truncate() {
        let timing = Timing::new(20, 20, 11025).unwrap();
        assert_eq!(timing.samples_for(2.0), 1322);
        assert_eq!(timing.samples_for(2.5), 1652);
    }
}
