// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Synthesize a monophonic melody into raw 16 bit PCM.
//!
//! ```
//! use syn_pcm::play::{play_song, Config};
//! use syn_pcm::wave::Waveform;
//!
//! let config = Config {
//!     waveform: Waveform::Sine,
//!     speed: 1.0,
//!     sample_rate: 8000,
//!     ..Config::default()
//! };
//! let mut pcm = Vec::new();
//! let summary = play_song("1xa4 0.5x- 1xc5", &config, &mut pcm).unwrap();
//! assert_eq!(summary.samples, 20000);
//! assert_eq!(pcm.len(), 40000);
//! ```

// modules for making sounds
pub mod envelope;
pub mod note;
pub mod sound;
pub mod wave;

// Building songs
pub mod melody;
pub mod output;
pub mod play;
