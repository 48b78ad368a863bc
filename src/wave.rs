// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// A single signed 16 bit mono sample.
pub type Sample = i16;

/// The sampled audio of a whole message, built up by appending clips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<Sample>,
}

impl Waveform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, clip: &[Sample]) {
        self.samples.extend_from_slice(clip);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Playing time in seconds at the given sample rate.
    pub fn seconds(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / f64::from(sample_rate)
    }
}

impl From<Vec<Sample>> for Waveform {
    fn from(samples: Vec<Sample>) -> Self {
        Waveform { samples }
    }
}
