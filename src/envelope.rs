// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Amplitude envelopes wrapping other sounds.

use crate::sound::Sound;
use crate::wave::{Sample, Time};

/// Linear fade-in and fade-out around another sound of bounded duration.
///
/// During the first `fade` seconds the amplitude rises linearly from zero to one,
/// during the last `fade` seconds of `duration` it falls back to zero.
/// In between the wrapped sound passes through unchanged.
///
/// The fade-in region is checked first, so if both regions overlap (`duration < 2 * fade`),
/// the fade-in wins. A `fade` of zero divides by zero; callers are expected to reject it.
///
/// # Example
///
/// ```
/// use syn_pcm::envelope::*;
/// use syn_pcm::sound::{Periodic, Sound};
/// use syn_pcm::wave::Waveform;
///
/// // a square wave at 1 Hz is constantly 1.0 during its second half
/// let e = FadeInOut::new(Periodic::new(Waveform::Square, 1.0), 1.0, 0.25);
/// assert_eq!(e.sample(0.5), 1.0);
/// assert_eq!(e.sample(0.75), 1.0);
/// assert_eq!(e.sample(0.875), 0.5);
/// assert_eq!(e.sample(1.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FadeInOut<S> {
    sound: S,
    /// Total length of the sound in seconds.
    duration: Time,
    /// Length of each fade in seconds.
    fade: Time,
}

impl<S: Sound> FadeInOut<S> {
    pub fn new(sound: S, duration: Time, fade: Time) -> Self {
        Self {
            sound,
            duration,
            fade,
        }
    }

    /// The gain applied at time `t`.
    pub fn gain(&self, t: Time) -> f64 {
        if t <= self.fade {
            // fade in
            t / self.fade
        } else if t >= self.duration - self.fade {
            // fade out
            -(t - (self.duration - self.fade)) / self.fade + 1.0
        } else {
            1.0
        }
    }
}

impl<S: Sound> Sound for FadeInOut<S> {
    fn sample(&self, t: Time) -> Sample {
        self.sound.sample(t) * self.gain(t)
    }
}
