// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Assembling a message from pre-rendered clips.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::{trace, warn};
use snafu::{ensure, Snafu};

use crate::codebook::{Codebook, Mark};
use crate::synth::Clips;
use crate::wave::Waveform;

/// What to do with characters the code book has no pattern for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Drop the character without a trace.
    Skip,
    /// Emit the gap that would have followed the character, but no tones.
    Pause,
    /// Fail the whole rendering.
    Reject,
}

/// Where the standard gap is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// After every mark, and once more after every character.
    Element,
    /// Only after every character. The quiet tail of each tone clip separates the marks.
    Character,
}

impl UnknownPolicy {
    pub const VARIANTS: &'static [&'static str] = &["skip", "pause", "reject"];
}

impl Spacing {
    pub const VARIANTS: &'static [&'static str] = &["element", "character"];
}

impl FromStr for UnknownPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(UnknownPolicy::Skip),
            "pause" => Ok(UnknownPolicy::Pause),
            "reject" => Ok(UnknownPolicy::Reject),
            other => Err(format!("unknown character policy {:?}", other)),
        }
    }
}

impl FromStr for Spacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "element" => Ok(Spacing::Element),
            "character" => Ok(Spacing::Character),
            other => Err(format!("unknown spacing {:?}", other)),
        }
    }
}

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            UnknownPolicy::Skip => "skip",
            UnknownPolicy::Pause => "pause",
            UnknownPolicy::Reject => "reject",
        })
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Spacing::Element => "element",
            Spacing::Character => "character",
        })
    }
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum RenderError {
    #[snafu(display("No Morse pattern for character {:?}", character))]
    UnknownCharacter { character: char },
}

/// Turns text into a waveform by concatenating the clips for each mark.
///
/// Characters are folded to lower case before they are looked up.
///
/// # Examples
///
/// ```
/// use morse_wav::codebook::Codebook;
/// use morse_wav::sequencer::Sequencer;
/// use morse_wav::synth::{Clips, ToneSynth};
/// use morse_wav::timing::Timing;
///
/// let book = Codebook::international().unwrap();
/// let clips = Clips::render(&ToneSynth::new(Timing::new(22, 13, 11025).unwrap(), 660.0));
///
/// let wave = Sequencer::new(&book, &clips).render("E").unwrap();
/// assert_eq!(wave.len(), clips.dot.len() + 2 * clips.gap.len());
/// ```
pub struct Sequencer<'a> {
    codebook: &'a Codebook,
    clips: &'a Clips,
    unknown_policy: UnknownPolicy,
    spacing: Spacing,
    wave: Waveform,
    unknown: BTreeSet<char>,
}

impl<'a> Sequencer<'a> {
    pub fn new(codebook: &'a Codebook, clips: &'a Clips) -> Self {
        Sequencer {
            codebook,
            clips,
            unknown_policy: UnknownPolicy::Skip,
            spacing: Spacing::Element,
            wave: Waveform::new(),
            unknown: BTreeSet::new(),
        }
    }

    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Render a complete message.
    pub fn render(mut self, text: &str) -> Result<Waveform, RenderError> {
        self.extend(text.chars())?;
        Ok(self.finish())
    }

    /// Append the audio for more characters to the message rendered so far.
    pub fn extend<I: IntoIterator<Item = char>>(&mut self, text: I) -> Result<(), RenderError> {
        for character in text {
            self.push(character)?;
        }
        Ok(())
    }

    /// Append the audio for a single character.
    pub fn push(&mut self, character: char) -> Result<(), RenderError> {
        let character = character.to_ascii_lowercase();
        let (codebook, clips) = (self.codebook, self.clips);
        match codebook.lookup(character) {
            Some(marks) => {
                trace!("{:?} -> {:?}", character, marks);
                for mark in marks {
                    self.wave.append(match mark {
                        Mark::Dot => &clips.dot,
                        Mark::Dash => &clips.dash,
                        Mark::WordGap => &clips.gap,
                    });
                    if self.spacing == Spacing::Element {
                        self.wave.append(&clips.gap);
                    }
                }
            }
            None => {
                ensure!(
                    self.unknown_policy != UnknownPolicy::Reject,
                    UnknownCharacter { character }
                );
                if self.unknown.insert(character) {
                    warn!(
                        "no Morse pattern for {:?}, applying policy {}",
                        character, self.unknown_policy
                    );
                }
                if self.unknown_policy == UnknownPolicy::Skip {
                    return Ok(());
                }
            }
        }
        self.wave.append(&clips.gap);
        Ok(())
    }

    /// Distinct characters that had no pattern so far, in lower case.
    pub fn unknown_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.unknown.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.wave.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wave.is_empty()
    }

    pub fn finish(self) -> Waveform {
        self.wave
    }
}
