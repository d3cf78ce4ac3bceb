// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Encoding samples as raw signed 16 bit little-endian PCM.

use std::io;

use crate::wave::Sample;

/// Half the number of 16 bit values, i.e. the offset between unsigned and signed encoding.
const HALF_RANGE: f64 = (1 << 15) as f64;

/// Quantize a sample in `[-1, 1]` to a signed 16 bit integer.
///
/// The sample is shifted to `[0, 2]` and scaled by `2^15 - 0.5`, so that `1.0` ends up
/// at `2^16 - 1` after rounding and never overflows the signed range.
/// Values outside of `[-1, 1]` saturate.
///
/// # Examples
///
/// ```
/// # use syn_pcm::output::*;
///
/// assert_eq!(encode(1.0), 32767);
/// assert_eq!(encode(-1.0), -32768);
/// assert_eq!(encode(0.0), 0);
/// ```
pub fn encode(sample: Sample) -> i16 {
    (((sample + 1.0) * (HALF_RANGE - 0.5)).round() - HALF_RANGE) as i16
}

/// Map an encoded value back to `[-1, 1]`, inverting [`encode`] up to rounding.
pub fn decode(value: i16) -> Sample {
    (value as f64 + HALF_RANGE) / (HALF_RANGE - 0.5) - 1.0
}

/// Writes samples to an underlying byte sink, one 16 bit little-endian value per sample.
pub struct PcmWriter<W> {
    inner: W,
    samples_written: usize,
}

impl<W: io::Write> PcmWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            samples_written: 0,
        }
    }

    pub fn write_sample(&mut self, sample: Sample) -> io::Result<()> {
        self.inner.write_all(&encode(sample).to_le_bytes())?;
        self.samples_written += 1;
        Ok(())
    }

    /// Number of samples successfully written so far.
    pub fn samples_written(&self) -> usize {
        self.samples_written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Decode a byte stream produced by [`PcmWriter`], ignoring a trailing odd byte.
pub fn read_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}
