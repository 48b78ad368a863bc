// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing 16 bit PCM audio as RIFF/WAVE files.

use std::convert::TryFrom;
use std::fs::{self, File};
use std::io::{self, BufWriter, Cursor, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::warn;

use crate::wave::Sample;

/// Length of the canonical header written in front of the samples.
pub const HEADER_LEN: usize = 44;

/// Byte appended after the samples when padding is requested, for compatibility with
/// files produced by older Morse generators.
pub const PAD_BYTE: u8 = 0x80;

/// PCM format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Single channel, 16 bit signed samples.
    pub fn mono(sample_rate: u32) -> Self {
        WavFormat {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}

/// Write a complete file: header, little endian samples and the optional pad byte.
///
/// The pad byte counts towards the chunk sizes in the header.
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    samples: &[Sample],
    pad: bool,
) -> io::Result<()> {
    let data_len = samples.len() * 2 + usize::from(pad);
    let data_len = u32::try_from(data_len)
        .ok()
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "audio too long for WAVE"))?;

    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(data_len + 36)?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(16)?;
    // PCM
    writer.write_u16::<LittleEndian>(1)?;
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(format.byte_rate())?;
    writer.write_u16::<LittleEndian>(format.block_align())?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?;

    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(data_len)?;
    for &sample in samples {
        writer.write_i16::<LittleEndian>(sample)?;
    }
    if pad {
        writer.write_u8(PAD_BYTE)?;
    }
    Ok(())
}

/// Write a file to `path`. Nothing is left behind at `path` if writing fails.
pub fn write_file(path: &Path, format: &WavFormat, samples: &[Sample], pad: bool) -> io::Result<()> {
    write_or_remove(path, |out| write_wav(out, format, samples, pad))
}

fn write_or_remove<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let result = write(&mut out).and_then(|()| out.flush());
    drop(out);
    if result.is_err() {
        if let Err(err) = fs::remove_file(path) {
            warn!("could not remove partial output {}: {}", path.display(), err);
        }
    }
    result
}

/// The fields of a canonical header, as read back from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub format: WavFormat,
    /// Length of the data chunk in bytes.
    pub data_len: u32,
}

impl WavHeader {
    /// Parse the 44 byte header at the start of `bytes`.
    /// Returns `None` if it is not a canonical PCM header.
    pub fn parse(bytes: &[u8]) -> Option<WavHeader> {
        if bytes.len() < HEADER_LEN
            || &bytes[0..4] != b"RIFF"
            || &bytes[8..16] != b"WAVEfmt "
            || &bytes[36..40] != b"data"
        {
            return None;
        }
        let mut fields = Cursor::new(&bytes[16..36]);
        if fields.read_u32::<LittleEndian>().ok()? != 16
            || fields.read_u16::<LittleEndian>().ok()? != 1
        {
            return None;
        }
        let channels = fields.read_u16::<LittleEndian>().ok()?;
        let sample_rate = fields.read_u32::<LittleEndian>().ok()?;
        let _byte_rate = fields.read_u32::<LittleEndian>().ok()?;
        let _block_align = fields.read_u16::<LittleEndian>().ok()?;
        let bits_per_sample = fields.read_u16::<LittleEndian>().ok()?;
        let data_len = Cursor::new(&bytes[40..44]).read_u32::<LittleEndian>().ok()?;
        Some(WavHeader {
            format: WavFormat {
                channels,
                sample_rate,
                bits_per_sample,
            },
            data_len,
        })
    }

    /// Number of complete sample frames in the data chunk. A trailing pad byte is not counted.
    pub fn sample_count(&self) -> usize {
        match self.format.block_align() {
            0 => 0,
            align => self.data_len as usize / usize::from(align),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode(samples: &[Sample], pad: bool) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_wav(&mut bytes, &WavFormat::mono(11025), samples, pad).unwrap();
        bytes
    }

    #[test]
    fn header_layout() {
        let bytes = encode(&[1, -2], true);
        let mut expected = Vec::new();
        expected.extend_from_slice(b"RIFF\x29\x00\x00\x00WAVE");
        expected.extend_from_slice(b"fmt \x10\x00\x00\x00\x01\x00\x01\x00");
        expected.extend_from_slice(b"\x11\x2b\x00\x00\x22\x56\x00\x00\x02\x00\x10\x00");
        expected.extend_from_slice(b"data\x05\x00\x00\x00");
        expected.extend_from_slice(b"\x01\x00\xfe\xff\x80");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn unpadded() {
        let bytes = encode(&[1, -2], false);
        assert_eq!(bytes.len(), HEADER_LEN + 4);
        assert_eq!(&bytes[4..8], &[40, 0, 0, 0]);
        assert_eq!(&bytes[40..44], &[4, 0, 0, 0]);
    }

    #[test]
    fn header_round_trip() {
        for &pad in &[false, true] {
            let samples: Vec<Sample> = (0..1001).map(|i| (i * 37) as Sample).collect();
            let header = WavHeader::parse(&encode(&samples, pad)).unwrap();
            assert_eq!(header.format, WavFormat::mono(11025));
            assert_eq!(header.sample_count(), 1001);
        }
    }

    #[test]
    fn rejects_foreign_headers() {
        assert_eq!(WavHeader::parse(b"RIFF"), None);
        let mut bytes = encode(&[0; 4], false);
        bytes[20] = 3;
        assert_eq!(WavHeader::parse(&bytes), None);
    }

    #[test]
    fn readable_by_hound() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples: Vec<Sample> = vec![0, 1000, -1000, i16::MAX, i16::MIN];
        write_file(&path, &WavFormat::mono(11025), &samples, false).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 11025);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.wav");
        let result = write_or_remove(&path, |out| {
            out.write_all(b"RIFF")?;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        });
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        assert!(write_file(&path, &WavFormat::mono(11025), &[0], true).is_err());
    }
}
