// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Implementation of the Morse code audio generator (morsewav).

pub mod pipeline;

use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::Config;
use crate::sequencer::{Spacing, UnknownPolicy};

pub use self::pipeline::{Error, Summary};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "morsewav",
    about = "Morse code audio generator, renders text as a wav file",
    after_help = "Prosigns are sent for ASCII characters: = (BT), + (AR), & (AS), $ (SK).\n\
                  Newlines count as word gaps."
)]
pub struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: usize,

    /// Character rate, the speed individual characters are keyed at, in words per minute.
    #[structopt(short = "w", long = "wpm", default_value = "22")]
    pub character_wpm: u32,

    /// Farnsworth rate, the effective words per minute sent. Defaults to 9 below the character rate.
    #[structopt(short = "f", long = "farnsworth")]
    pub effective_wpm: Option<u32>,

    /// Tone frequency in Hz.
    #[structopt(short = "t", long = "tone", default_value = "660")]
    pub tone_hz: u32,

    /// Output file.
    #[structopt(short, long, parse(from_os_str), default_value = "cw.wav")]
    pub output: PathBuf,

    /// What to do with characters that have no Morse code.
    #[structopt(long, default_value = "skip", possible_values = UnknownPolicy::VARIANTS)]
    pub unknown: UnknownPolicy,

    /// Insert the standard gap after every element, or only after every character.
    #[structopt(long, default_value = "element", possible_values = Spacing::VARIANTS)]
    pub spacing: Spacing,

    /// Do not append the legacy pad byte after the samples.
    #[structopt(long)]
    pub no_pad: bool,

    /// Text to send. Read from standard input if not given.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,
}

impl Opt {
    pub fn config(&self) -> Config {
        Config {
            tone_hz: self.tone_hz,
            unknown: self.unknown,
            spacing: self.spacing,
            pad_data: !self.no_pad,
            ..Config::with_speeds(self.character_wpm, self.effective_wpm)
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Run the generator for already parsed options. Logging must be set up by the caller.
pub fn morsewav_main(opt: &Opt) -> Result<Summary, Error> {
    let input = pipeline::open_input(opt.input.as_deref())?;
    pipeline::run(&opt.config(), input, &opt.output)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<Opt, structopt::clap::Error> {
        Opt::from_iter_safe(std::iter::once("morsewav").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let opt = parse(&[]).unwrap();
        assert_eq!(opt.config(), Config::default());
        assert_eq!(opt.output, PathBuf::from("cw.wav"));
        assert_eq!(opt.input, None);
        assert_eq!(opt.log_level(), log::Level::Info);
    }

    #[test]
    fn all_options() {
        let opt = parse(&[
            "-w", "30", "-f", "15", "-t", "700", "-o", "out.wav", "--unknown", "reject",
            "--spacing", "character", "--no-pad", "-vv", "message.txt",
        ])
        .unwrap();
        let config = opt.config();
        assert_eq!(config.character_wpm, 30);
        assert_eq!(config.effective_wpm, 15);
        assert_eq!(config.tone_hz, 700);
        assert_eq!(config.unknown, UnknownPolicy::Reject);
        assert_eq!(config.spacing, Spacing::Character);
        assert!(!config.pad_data);
        assert_eq!(opt.output, PathBuf::from("out.wav"));
        assert_eq!(opt.input, Some(PathBuf::from("message.txt")));
        assert_eq!(opt.log_level(), log::Level::Trace);
    }

    #[test]
    fn farnsworth_follows_character_rate() {
        assert_eq!(parse(&["-w", "18"]).unwrap().config().effective_wpm, 9);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--unknown", "drop"]).is_err());
        assert!(parse(&["-w", "-3"]).is_err());
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cw.wav");
        let missing = dir.path().join("missing.txt");
        let opt = parse(&[
            "-o",
            out.to_str().unwrap(),
            missing.to_str().unwrap(),
        ])
        .unwrap();
        let err = morsewav_main(&opt).unwrap_err();
        assert!(matches!(err, Error::InputReadFailure { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn renders_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cw.wav");
        let text = dir.path().join("text.txt");
        std::fs::write(&text, "VVV DE TEST\n").unwrap();
        let opt = parse(&["-o", out.to_str().unwrap(), text.to_str().unwrap()]).unwrap();
        let summary = morsewav_main(&opt).unwrap();
        assert!(summary.seconds > 1.0);
        assert!(out.exists());
    }
}
