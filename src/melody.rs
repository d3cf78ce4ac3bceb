// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! A compact textual format for melodies.
//!
//! A song is a sequence of whitespace separated tokens `<duration>x<note>`,
//! e.g. `4x- 3xe4 1xf4`. The duration is a decimal number of time units,
//! the note is either [`SILENCE`](crate::note::SILENCE) or a name from the note table.

use std::fmt;
use std::num::ParseFloatError;

use log::trace;
use snafu::{ensure, OptionExt, ResultExt, Snafu};

use crate::note;

/// Separates the duration from the note name within a token.
pub const SEPARATOR: char = 'x';

/// The theme from Indiana Jones, best played with a saw wave at speed 7.3.
pub const INDIANA_JONES: &str = "4x- 3xe4 1xf4 2xg4 10xc5 3xd4 1xe4 12xf4 3xg4 1xa4 2xb4 10xf5 \
    3xa4 1xb4 4xc5 4xd5 4xe5 3xe4 1xf4 2xg4 10xc5 3xd5 1xe5 12xf5 3xg4 1xg4 4xe5 3xd5 1xg4 \
    4xe5 3xd5 1xg4 4xf5 3xe5 1xd5 2xc5 6x-";

#[derive(Debug, Clone, PartialEq)]
pub struct NoteSym {
    /// How long the note is held, in time units (scaled by the playback speed).
    pub duration: f64,
    /// The name as written in the song.
    pub name: String,
    /// `None` for rests.
    pub frequency: Option<f64>,
}

impl NoteSym {
    pub fn is_rest(&self) -> bool {
        self.frequency.is_none()
    }
}

impl fmt::Display for NoteSym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.duration, SEPARATOR, self.name)
    }
}

#[derive(Debug, PartialEq, Snafu)]
pub enum ParseError {
    #[snafu(display("Token {:?} is not of the form <duration>{}<note>", token, SEPARATOR))]
    MalformedToken { token: String },
    #[snafu(display("Invalid duration in token {:?}: {}", token, source))]
    InvalidDuration {
        token: String,
        source: ParseFloatError,
    },
    #[snafu(display(
        "Duration in token {:?} must be a finite, non-negative number",
        token
    ))]
    NegativeDuration { token: String },
    #[snafu(display("Unknown note {:?} in token {:?}", name, token))]
    UnknownNote { token: String, name: String },
}

/// Parse a song, resolving every note name against the note table.
///
/// # Examples
///
/// ```
/// # use syn_pcm::melody::*;
///
/// let song = parse_song("2x- 1.5xa4").unwrap();
/// assert_eq!(song.len(), 2);
/// assert!(song[0].is_rest());
/// assert_eq!(song[1].duration, 1.5);
/// assert_eq!(song[1].frequency, Some(440.0));
/// assert!(parse_song("1xz9").is_err());
/// ```
pub fn parse_song(input: &str) -> Result<Vec<NoteSym>, ParseError> {
    input.split_ascii_whitespace().map(parse_token).collect()
}

/// Parse a single `<duration>x<note>` token.
pub fn parse_token(token: &str) -> Result<NoteSym, ParseError> {
    let (units, name) = token
        .split_once(SEPARATOR)
        .context(MalformedToken { token })?;
    ensure!(
        !units.is_empty() && !name.is_empty() && !name.contains(SEPARATOR),
        MalformedToken { token }
    );

    let duration: f64 = units.parse().context(InvalidDuration { token })?;
    ensure!(
        duration.is_finite() && duration >= 0.0,
        NegativeDuration { token }
    );

    let frequency = if note::is_silence(name) {
        None
    } else {
        Some(note::frequency(name).context(UnknownNote { token, name })?)
    };
    trace!("token {:?}: {} units of {:?}", token, duration, frequency);

    Ok(NoteSym {
        duration,
        name: name.to_string(),
        frequency,
    })
}

/// Render parsed notes back into the textual format.
///
/// ```
/// # use syn_pcm::melody::*;
///
/// let text = "4x- 3xe4 0.5xf#4";
/// assert_eq!(format_song(&parse_song(text).unwrap()), text);
/// ```
pub fn format_song(notes: &[NoteSym]) -> String {
    notes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
