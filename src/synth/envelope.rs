// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Amplitude envelopes for keyed tones.

/// Rise and fall time constant of the keying envelope, in seconds.
pub const RAMP_TAU: f64 = 3.0e-3;

/// A smooth on/off gate built from two error function ramps.
///
/// The gate rises around `delay` and falls around `delay + duration`, each transition taking
/// roughly `2 * tau`. Compared to a hard rectangular gate this removes the broadband clicks at
/// the start and end of every tone.
///
/// # Example
///
/// ```
/// use morse_wav::synth::envelope::ErfGate;
/// let gate = ErfGate::keyed(0.1);
/// assert!(gate.eval(0.0) < 0.02);
/// assert!((gate.eval(0.05) - 1.0).abs() < 1e-9);
/// assert!(gate.eval(0.2) < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErfGate {
    /// Center of the rising edge in seconds.
    pub delay: f64,
    /// Time from the center of the rising edge to the center of the falling edge.
    pub duration: f64,
    /// Time constant of both edges.
    pub tau: f64,
}

impl ErfGate {
    /// The gate used for a tone keyed for `key_down` seconds.
    ///
    /// The rising edge is delayed by `1.5 * RAMP_TAU` so the tone starts from (nearly) zero,
    /// and the hold time is shortened by one time constant to compensate for the ramps.
    pub fn keyed(key_down: f64) -> Self {
        ErfGate {
            delay: 1.5 * RAMP_TAU,
            duration: key_down - RAMP_TAU,
            tau: RAMP_TAU,
        }
    }

    /// Evaluate the gate `t` seconds after the start of the tone.
    pub fn eval(&self, t: f64) -> f64 {
        let rise = libm::erf((t - self.delay) / self.tau);
        let fall = libm::erf((t - self.delay - self.duration) / self.tau);
        (rise - fall) / 2.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gate_is_bounded() {
        let gate = ErfGate::keyed(0.06);
        for i in 0..2000 {
            let value = gate.eval(i as f64 * 1e-4);
            assert!(value >= 0.0 && value <= 1.0, "{} at {}", value, i);
        }
    }

    #[test]
    fn gate_is_symmetric() {
        let gate = ErfGate::keyed(0.06);
        let center = gate.delay + gate.duration / 2.0;
        for i in 0..100 {
            let dt = i as f64 * 5e-4;
            assert!((gate.eval(center - dt) - gate.eval(center + dt)).abs() < 1e-12);
        }
    }

    #[test]
    fn edges_cross_half_amplitude() {
        let gate = ErfGate::keyed(0.06);
        assert!((gate.eval(gate.delay) - 0.5).abs() < 1e-9);
        assert!((gate.eval(gate.delay + gate.duration) - 0.5).abs() < 1e-9);
    }
}
