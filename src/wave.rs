// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Basic wave shapes, evaluated over a single normalized period.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use snafu::Snafu;

/// Time in seconds, measured from the start of the current note.
pub type Time = f64;

/// A single amplitude value, nominally in `[-1, 1]`.
pub type Sample = f64;

/// The shape of one period of a periodic sound.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
}

impl Waveform {
    /// Evaluate the wave at `phase`, which must already be normalized to `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syn_pcm::wave::*;
    ///
    /// assert_eq!(Waveform::Square.evaluate(0.25), -1.0);
    /// assert_eq!(Waveform::Square.evaluate(0.5), 1.0);
    /// assert_eq!(Waveform::Saw.evaluate(0.0), 1.0);
    /// assert_eq!(Waveform::Saw.evaluate(0.5), -1.0);
    /// ```
    pub fn evaluate(self, phase: f64) -> Sample {
        match self {
            Waveform::Sine => (phase * 2.0 * PI).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    -1.0
                } else {
                    1.0
                }
            }
            Waveform::Saw => (4.0 * phase - 2.0).abs() - 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Saw => "saw",
        }
    }
}

impl Default for Waveform {
    fn default() -> Self {
        Waveform::Saw
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum WaveformError {
    #[snafu(display("Unknown waveform {:?}, expected one of sine, square, saw", name))]
    UnknownWaveform { name: String },
}

impl FromStr for Waveform {
    type Err = WaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" | "sin" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "saw" | "sawtooth" => Ok(Waveform::Saw),
            other => Err(WaveformError::UnknownWaveform {
                name: other.to_string(),
            }),
        }
    }
}
