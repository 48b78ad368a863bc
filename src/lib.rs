// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

pub mod codebook;
pub mod config;
pub mod morsewav;
pub mod output;
pub mod sequencer;
pub mod synth;
pub mod timing;
pub mod wave;
