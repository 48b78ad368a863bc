// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The code book mapping characters to sequences of Morse marks.

use std::collections::HashMap;

use snafu::{OptionExt, Snafu};

/// A single element of a Morse pattern.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mark {
    /// A tone one unit long.
    Dot,
    /// A tone three units long.
    Dash,
    /// The quiet that separates words.
    WordGap,
}

impl Mark {
    /// Decode the textual form of a mark as it appears in pattern strings.
    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            '.' => Some(Mark::Dot),
            '-' => Some(Mark::Dash),
            ' ' => Some(Mark::WordGap),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum CodebookError {
    #[snafu(display(
        "Pattern for {:?} contains {:?}, which is neither dot, dash nor space",
        character,
        symbol
    ))]
    UnrenderableSymbol { character: char, symbol: char },
}

/// International Morse code, extended with the prosigns commonly mapped onto ASCII punctuation.
pub const INTERNATIONAL: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('"', ".-..-."),
    ('/', "-..-."),
    (':', "---..."),
    ('\'', ".----."),
    ('-', "-....-"),
    // break/separator, BT
    ('=', "-...-"),
    // end of message, AR
    ('+', ".-.-."),
    // wait, AS
    ('&', ".-..."),
    // end of transmission, SK
    ('$', "...-.-"),
    ('@', ".--.-."),
    // the word gap is four quiet units on top of the gap following every character
    (' ', " "),
    ('\n', " "),
];

/// Lookup table from characters to their Morse patterns.
///
/// Keys are matched exactly; case folding is left to the caller.
///
/// # Examples
///
/// ```
/// use morse_wav::codebook::*;
///
/// let book = Codebook::international().unwrap();
/// assert_eq!(book.lookup('n'), Some(&[Mark::Dash, Mark::Dot][..]));
/// assert_eq!(book.lookup('#'), None);
/// ```
#[derive(Debug, Clone)]
pub struct Codebook {
    patterns: HashMap<char, Vec<Mark>>,
}

impl Codebook {
    /// The built-in international code book.
    pub fn international() -> Result<Self, CodebookError> {
        Self::from_patterns(INTERNATIONAL.iter().copied())
    }

    /// Build a code book from `(character, pattern)` pairs, where patterns are written
    /// with `.`, `-` and ` `. Later entries replace earlier ones for the same character.
    pub fn from_patterns<'p, I>(entries: I) -> Result<Self, CodebookError>
    where
        I: IntoIterator<Item = (char, &'p str)>,
    {
        let mut patterns = HashMap::new();
        for (character, pattern) in entries {
            let marks = parse_pattern(character, pattern)?;
            patterns.insert(character, marks);
        }
        Ok(Codebook { patterns })
    }

    pub fn lookup(&self, character: char) -> Option<&[Mark]> {
        self.patterns.get(&character).map(|marks| marks.as_slice())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn parse_pattern(character: char, pattern: &str) -> Result<Vec<Mark>, CodebookError> {
    let mut marks = Vec::with_capacity(pattern.len());
    for symbol in pattern.chars() {
        let mark = Mark::from_symbol(symbol).context(UnrenderableSymbol { character, symbol })?;
        marks.push(mark);
    }
    Ok(marks)
}
