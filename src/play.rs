// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turn a parsed melody into a stream of PCM samples.
//!
//! Notes are rendered strictly one after another: each note is sampled from its own
//! time zero for `floor(seconds * rate)` samples, so the stream offset of a note is
//! the sum of the sample counts of all notes before it.

use std::io;

use log::{debug, info};
use snafu::{ensure, ResultExt, Snafu};

use crate::envelope::FadeInOut;
use crate::melody::{self, NoteSym, ParseError};
use crate::output::PcmWriter;
use crate::sound::{Sound, Voice};
use crate::wave::{Time, Waveform};

/// Default number of samples per second.
pub const SAMPLE_RATE: u32 = 44100;

/// Default length of the fade at the start and at the end of every note, in seconds.
pub const FADE_DURATION: Time = 0.04;

/// Default number of time units per second.
pub const SPEED: f64 = 7.3;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not parse song: {}", source))]
    Parse { source: ParseError },
    #[snafu(display("Speed must be a positive number, got {}", speed))]
    InvalidSpeed { speed: f64 },
    #[snafu(display("Sample rate must be positive"))]
    InvalidSampleRate,
    #[snafu(display("Fade duration must be a positive number of seconds, got {}", fade))]
    InvalidFade { fade: f64 },
    #[snafu(display(
        "Note {} ({:?}) lasts {} s, which is not longer than its two fades of {} s each",
        index,
        token,
        duration,
        fade
    ))]
    NoteTooShort {
        index: usize,
        token: String,
        duration: Time,
        fade: Time,
    },
    #[snafu(display("Failed to write sample: {}", source))]
    WriteSample { source: io::Error },
}

/// Everything needed to render a song besides the notes themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub waveform: Waveform,
    /// Time units per second. Higher speeds make every note shorter.
    pub speed: f64,
    /// Samples per second.
    pub sample_rate: u32,
    /// Length of the fade-in and of the fade-out of every note, in seconds.
    pub fade_duration: Time,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            waveform: Waveform::Saw,
            speed: SPEED,
            sample_rate: SAMPLE_RATE,
            fade_duration: FADE_DURATION,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        ensure!(
            self.speed.is_finite() && self.speed > 0.0,
            InvalidSpeed { speed: self.speed }
        );
        ensure!(self.sample_rate > 0, InvalidSampleRate);
        ensure!(
            self.fade_duration.is_finite() && self.fade_duration > 0.0,
            InvalidFade {
                fade: self.fade_duration
            }
        );
        Ok(())
    }

    /// Real duration in seconds of `units` time units.
    pub fn seconds(&self, units: f64) -> Time {
        (1.0 / self.speed) * units
    }

    /// Number of samples that fit into `seconds`, rounded down.
    pub fn samples(&self, seconds: Time) -> usize {
        (seconds * self.sample_rate as f64) as usize
    }
}

/// What was written by [`play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub notes: usize,
    pub samples: usize,
}

/// Sample `sound` at `rate` samples per second over `[0, duration)`.
/// Returns the number of samples written, which is `floor(duration * rate)`.
pub fn sample_into<S: Sound, W: io::Write>(
    sound: &S,
    duration: Time,
    rate: u32,
    out: &mut PcmWriter<W>,
) -> io::Result<usize> {
    let rate = rate as f64;
    let count = (duration * rate) as usize;
    for i in 0..count {
        let t = i as f64 / rate;
        out.write_sample(sound.sample(t))?;
    }
    Ok(count)
}

/// Check the configuration and that every tone is long enough to hold both of its fades.
/// Rests are silent whatever their fades do, so any length is fine for them.
pub fn validate(notes: &[NoteSym], config: &Config) -> Result<(), Error> {
    config.validate()?;
    for (index, note) in notes.iter().enumerate() {
        if note.is_rest() {
            continue;
        }
        let duration = config.seconds(note.duration);
        ensure!(
            duration > 2.0 * config.fade_duration,
            NoteTooShort {
                index,
                token: note.to_string(),
                duration,
                fade: config.fade_duration,
            }
        );
    }
    Ok(())
}

/// Number of samples [`play`] would write for these notes.
pub fn total_samples(notes: &[NoteSym], config: &Config) -> usize {
    notes
        .iter()
        .map(|note| config.samples(config.seconds(note.duration)))
        .sum()
}

/// Render the notes in order into `sink`.
///
/// The configuration and all notes are validated before the first sample is written.
/// A write error aborts rendering and leaves a truncated stream behind.
pub fn play<W: io::Write>(notes: &[NoteSym], config: &Config, sink: W) -> Result<Summary, Error> {
    validate(notes, config)?;

    let total = total_samples(notes, config);
    info!(
        "playing {} notes with a {} wave at speed {} and {} Hz",
        notes.len(),
        config.waveform,
        config.speed,
        config.sample_rate
    );
    info!(
        "total length {} samples ({:.2} seconds)",
        total,
        total as f64 / config.sample_rate as f64
    );

    let mut out = PcmWriter::new(sink);
    for (index, note) in notes.iter().enumerate() {
        let duration = config.seconds(note.duration);
        let voice = Voice::new(config.waveform, note.frequency);
        let sound = FadeInOut::new(voice, duration, config.fade_duration);
        let offset = out.samples_written();
        let count =
            sample_into(&sound, duration, config.sample_rate, &mut out).context(WriteSample)?;
        debug!(
            "{:7}: note {} {} for {:.3} s ({} samples)",
            offset, index, note.name, duration, count
        );
    }
    out.flush().context(WriteSample)?;

    Ok(Summary {
        notes: notes.len(),
        samples: out.samples_written(),
    })
}

/// Parse `song` and render it into `sink`, see [`play`].
pub fn play_song<W: io::Write>(song: &str, config: &Config, sink: W) -> Result<Summary, Error> {
    let notes = melody::parse_song(song).context(Parse)?;
    play(&notes, config, sink)
}
