// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This namespace contains all the parts turning Morse timing into sampled audio.

pub mod envelope;
pub mod oscillator;

use log::debug;

use self::envelope::ErfGate;
use self::oscillator::Oscillator;
use crate::timing::Timing;
use crate::wave::Sample;

/// Peak amplitude of a keyed tone, just below the 16 bit limit.
pub const PEAK_AMPLITUDE: f64 = 32766.0;

/// Dot units of a dot tone.
pub const DOT_UNITS: usize = 1;
/// Dot units of a dash tone.
pub const DASH_UNITS: usize = 3;
/// Dot units of the standard gap, before Farnsworth spacing is added.
pub const GAP_UNITS: f64 = 2.0;

/// Renders keyed tones and gaps for a fixed timing and tone frequency.
#[derive(Debug, Clone, Copy)]
pub struct ToneSynth {
    timing: Timing,
    carrier: Oscillator,
}

impl ToneSynth {
    pub fn new(timing: Timing, frequency: f64) -> Self {
        ToneSynth {
            timing,
            carrier: Oscillator::new(frequency),
        }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// A tone keyed for `units` dots.
    ///
    /// The buffer is one unit longer than the tone itself so that the falling edge of the
    /// envelope decays completely inside it.
    pub fn tone(&self, units: usize) -> Vec<Sample> {
        let len = (units + 1) * self.timing.unit_samples();
        let rate = f64::from(self.timing.sample_rate());
        let gate = ErfGate::keyed(self.timing.unit_seconds() * units as f64);
        (0..len)
            .map(|i| {
                let t = i as f64 / rate;
                (PEAK_AMPLITUDE * self.carrier.eval(t) * gate.eval(t)) as Sample
            })
            .collect()
    }

    /// Quiet lasting `units` dots. The length is truncated to whole samples.
    pub fn silence(&self, units: f64) -> Vec<Sample> {
        vec![0; self.timing.samples_for(units)]
    }
}

/// The pre-rendered buffers every message is assembled from.
///
/// They are rendered once and then only ever read, so the cost of synthesis does not depend
/// on the length of the message.
#[derive(Debug, Clone)]
pub struct Clips {
    pub dot: Vec<Sample>,
    pub dash: Vec<Sample>,
    /// Standard gap of `GAP_UNITS` plus the Farnsworth extra.
    pub gap: Vec<Sample>,
}

impl Clips {
    pub fn render(synth: &ToneSynth) -> Self {
        let clips = Clips {
            dot: synth.tone(DOT_UNITS),
            dash: synth.tone(DASH_UNITS),
            gap: synth.silence(GAP_UNITS + synth.timing().farnsworth()),
        };
        debug!(
            "clip lengths in samples: dot {}, dash {}, gap {}",
            clips.dot.len(),
            clips.dash.len(),
            clips.gap.len()
        );
        clips
    }
}
