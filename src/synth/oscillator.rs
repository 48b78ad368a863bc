// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

/// A sine carrier, evaluated at absolute times so long tones do not accumulate phase error.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    frequency: f64,
}

impl Oscillator {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Value of the carrier `t` seconds after its start, between -1 and 1.
    pub fn eval(&self, t: f64) -> f64 {
        use std::f64::consts::PI;
        (2.0 * PI * self.frequency * t).sin()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quarter_periods() {
        let osc = Oscillator::new(250.0);
        assert_eq!(osc.eval(0.0), 0.0);
        assert!((osc.eval(0.001) - 1.0).abs() < 1e-12);
        assert!(osc.eval(0.002).abs() < 1e-12);
        assert!((osc.eval(0.003) + 1.0).abs() < 1e-12);
    }
}
