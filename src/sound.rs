// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Sounds are signals that can be evaluated at any point in time.

use crate::wave::{Sample, Time, Waveform};

/// Anything that produces an amplitude for a given point in time.
pub trait Sound {
    fn sample(&self, t: Time) -> Sample;
}

impl<S: Sound + ?Sized> Sound for Box<S> {
    fn sample(&self, t: Time) -> Sample {
        (**self).sample(t)
    }
}

/// Produces zero at all times, used for rests.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Silence;

impl Sound for Silence {
    fn sample(&self, _t: Time) -> Sample {
        0.0
    }
}

/// An infinitely repeating wave at a fixed frequency.
///
/// # Examples
///
/// ```
/// # use syn_pcm::sound::*;
/// # use syn_pcm::wave::Waveform;
///
/// let s = Periodic::new(Waveform::Square, 2.0);
/// assert_eq!(s.sample(0.0), -1.0);
/// assert_eq!(s.sample(0.25), 1.0);
/// assert_eq!(s.sample(0.5), -1.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Periodic {
    waveform: Waveform,
    /// Frequency in Hz, always positive.
    frequency: f64,
}

impl Periodic {
    /// # Panics
    ///
    /// If `frequency` is not a positive finite number.
    pub fn new(waveform: Waveform, frequency: f64) -> Self {
        assert!(
            frequency.is_finite() && frequency > 0.0,
            "frequency must be positive, got {}",
            frequency
        );
        Self {
            waveform,
            frequency,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Sound for Periodic {
    fn sample(&self, t: Time) -> Sample {
        let wave_length = 1.0 / self.frequency;
        // `%` keeps the sign of `t`, just like `fmod`
        let phase = (t % wave_length) * self.frequency;
        self.waveform.evaluate(phase)
    }
}

/// The sound of a single note: either a rest or a tone.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Voice {
    Rest(Silence),
    Tone(Periodic),
}

impl Voice {
    /// Builds the voice for a tone at `frequency`, or a rest if there is none.
    pub fn new(waveform: Waveform, frequency: Option<f64>) -> Self {
        match frequency {
            Some(f) => Voice::Tone(Periodic::new(waveform, f)),
            None => Voice::Rest(Silence),
        }
    }
}

impl Sound for Voice {
    fn sample(&self, t: Time) -> Sample {
        match self {
            Voice::Rest(s) => s.sample(t),
            Voice::Tone(s) => s.sample(t),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn silence_is_zero() {
        for i in 0..100 {
            assert_eq!(Silence.sample(i as f64 * 0.37), 0.0);
        }
        assert_eq!(Voice::new(Waveform::Saw, None).sample(0.5), 0.0);
    }

    #[test]
    fn periodic_repeats() {
        for &shape in [Waveform::Sine, Waveform::Saw].iter() {
            let s = Periodic::new(shape, 440.0);
            let period = 1.0 / 440.0;
            for i in 0..200 {
                let t = 0.0001 + i as f64 * 0.0123;
                let delta = (s.sample(t) - s.sample(t + period)).abs();
                assert!(delta < 1e-6, "{:?} at {}: {}", shape, t, delta);
            }
        }

        // square jumps at phase 0 and 0.5, so only look at the middle of each half
        let s = Periodic::new(Waveform::Square, 440.0);
        let period = 1.0 / s.frequency();
        for i in 0..200 {
            for &offset in [0.2, 0.3, 0.7, 0.8].iter() {
                let t = (i as f64 * 7.0 + offset) * period;
                assert_eq!(s.sample(t), s.sample(t + period), "square at {}", t);
            }
        }
    }

    #[test]
    fn periodic_phase_matches_waveform() {
        let s = Periodic::new(Waveform::Saw, 4.0);
        assert_eq!(s.sample(0.0), Waveform::Saw.evaluate(0.0));
        assert_eq!(s.sample(0.0625), Waveform::Saw.evaluate(0.25));
        assert_eq!(s.sample(1.125), Waveform::Saw.evaluate(0.5));
    }

    #[test]
    fn boxed_sounds_delegate() {
        let boxed: Box<dyn Sound> = Box::new(Periodic::new(Waveform::Sine, 1.0));
        assert!((boxed.sample(0.25) - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn zero_frequency_is_rejected() {
        Periodic::new(Waveform::Sine, 0.0);
    }
}
