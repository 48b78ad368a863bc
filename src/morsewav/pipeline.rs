// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The batch pipeline: read text, render it, write one file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use snafu::{ResultExt, Snafu};

use crate::codebook::{Codebook, CodebookError};
use crate::config::{Config, SAMPLE_RATE};
use crate::output::wav::{self, WavFormat};
use crate::sequencer::{RenderError, Sequencer};
use crate::synth::{Clips, ToneSynth};
use crate::timing::{Timing, TimingError};
use crate::wave::Waveform;

/// Input is consumed in chunks of this many bytes.
pub const CHUNK_SIZE: usize = 100;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Invalid timing configuration: {}", source))]
    InvalidTimingConfig { source: TimingError },
    #[snafu(display("Corrupt code book: {}", source))]
    UnrenderableSymbol { source: CodebookError },
    #[snafu(display("Cannot render input: {}", source))]
    UnknownCharacter { source: RenderError },
    #[snafu(display("Problem reading input: {}", source))]
    InputReadFailure { source: io::Error },
    #[snafu(display("Problem writing {}: {}", path.display(), source))]
    OutputWriteFailure { path: PathBuf, source: io::Error },
}

impl Error {
    /// Process exit status identifying the kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidTimingConfig { .. } => 2,
            Error::InputReadFailure { .. } => 3,
            Error::UnknownCharacter { .. } => 4,
            Error::OutputWriteFailure { .. } => 5,
            Error::UnrenderableSymbol { .. } => 6,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub samples: usize,
    pub seconds: f64,
    /// Characters without a Morse pattern that were skipped or paused over.
    pub unknown: Vec<char>,
}

/// Open the text file at `path`, or standard input if there is none.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, Error> {
    Ok(match path {
        Some(path) => Box::new(File::open(path).context(InputReadFailure)?),
        None => Box::new(io::stdin()),
    })
}

/// Render everything `input` yields into a single waveform.
pub fn render<R: Read>(
    config: &Config,
    codebook: &Codebook,
    mut input: R,
) -> Result<(Waveform, Vec<char>), Error> {
    let timing = Timing::new(config.character_wpm, config.effective_wpm, SAMPLE_RATE)
        .context(InvalidTimingConfig)?;
    info!("farnsworth factor {:.3}", timing.farnsworth());
    info!("digital samples per dot {}", timing.unit_samples());
    info!("dot duration {:.1} ms", timing.unit_seconds() * 1000.0);

    let clips = Clips::render(&ToneSynth::new(timing, f64::from(config.tone_hz)));
    let mut sequencer = Sequencer::new(codebook, &clips)
        .with_unknown_policy(config.unknown)
        .with_spacing(config.spacing);

    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match input.read(&mut buf) {
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            result => result.context(InputReadFailure)?,
        };
        if n == 0 {
            break;
        }
        debug!("read {} bytes", n);
        // bytes outside ASCII widen to characters no code book maps
        sequencer
            .extend(buf[..n].iter().map(|&b| char::from(b)))
            .context(UnknownCharacter)?;
    }

    let unknown = sequencer.unknown_characters().collect();
    Ok((sequencer.finish(), unknown))
}

/// Render all of `input` as Morse code and write it to `output`.
pub fn run<R: Read>(config: &Config, input: R, output: &Path) -> Result<Summary, Error> {
    let codebook = Codebook::international().context(UnrenderableSymbol)?;
    let (wave, unknown) = render(config, &codebook, input)?;

    let summary = Summary {
        samples: wave.len(),
        seconds: wave.seconds(SAMPLE_RATE),
        unknown,
    };
    wav::write_file(
        output,
        &WavFormat::mono(SAMPLE_RATE),
        &wave.into_samples(),
        config.pad_data,
    )
    .context(OutputWriteFailure { path: output })?;
    info!(
        "wrote {} samples ({:.2} seconds) to {}",
        summary.samples,
        summary.seconds,
        output.display()
    );
    Ok(summary)
}
