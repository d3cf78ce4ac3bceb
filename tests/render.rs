// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use syn_pcm::envelope::FadeInOut;
use syn_pcm::melody::ParseError;
use syn_pcm::output::{encode, read_samples};
use syn_pcm::play::{play_song, Config, Error};
use syn_pcm::sound::{Periodic, Sound};
use syn_pcm::wave::Waveform;

fn render(song: &str, config: &Config) -> Vec<i16> {
    let mut bytes = Vec::new();
    let summary = play_song(song, config, &mut bytes).unwrap();
    assert_eq!(bytes.len(), 2 * summary.samples);
    read_samples(&bytes)
}

fn unit_speed(waveform: Waveform) -> Config {
    Config {
        waveform,
        speed: 1.0,
        sample_rate: 44100,
        fade_duration: 0.04,
    }
}

#[test]
fn single_saw_note() {
    let samples = render("1xc4", &unit_speed(Waveform::Saw));
    assert_eq!(samples.len(), 44100);
    assert_eq!(samples[0], 0);

    let expected = FadeInOut::new(Periodic::new(Waveform::Saw, 261.63), 1.0, 0.04);
    for (i, &s) in samples.iter().enumerate() {
        assert_eq!(s, encode(expected.sample(i as f64 / 44100.0)), "sample {}", i);
    }

    // the fades bound the amplitude, the middle reaches full scale
    let fade = 1764;
    for (i, &s) in samples[..fade].iter().enumerate() {
        let bound = i as f64 / fade as f64 * 32768.0 + 1.0;
        assert!((s as f64).abs() <= bound, "fade-in sample {} = {}", i, s);
    }
    for (i, &s) in samples[44100 - fade..].iter().enumerate() {
        let bound = (fade - i) as f64 / fade as f64 * 32768.0 + 1.0;
        assert!((s as f64).abs() <= bound, "fade-out sample {} = {}", i, s);
    }
    assert!(samples.last().unwrap().abs() < 32);
    let peak = samples[fade..44100 - fade]
        .iter()
        .map(|s| (*s as i32).abs())
        .max()
        .unwrap();
    assert!(peak > 31000);
}

#[test]
fn rests_are_exact_zero() {
    for &(speed, rate) in [
        (1.0, 44100),
        (7.3, 44100),
        (0.5, 8000),
        (3.0, 11025),
        (25.0, 44100),
        (30.0, 44100),
        (100.0, 8000),
    ].iter() {
        let config = Config {
            speed,
            sample_rate: rate,
            ..Config::default()
        };
        let samples = render("2x-", &config);
        assert_eq!(samples.len(), config.samples(config.seconds(2.0)));
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|&s| s == 0));
    }
}

#[test]
fn short_rests_between_tones() {
    // a rest shorter than two fades is fine, a tone is not
    let config = unit_speed(Waveform::Sine);
    let samples = render("0.5xa4 0.01x- 0.5xa4", &config);
    assert_eq!(samples.len(), 22050 + 441 + 22050);
    assert!(samples[22050..22491].iter().all(|&s| s == 0));

    let mut bytes = Vec::new();
    let err = play_song("0.5xa4 0.01xa4", &config, &mut bytes).unwrap_err();
    assert!(matches!(err, Error::NoteTooShort { index: 1, .. }));
    assert!(bytes.is_empty());
}

#[test]
fn every_waveform_renders() {
    for &waveform in [Waveform::Sine, Waveform::Square, Waveform::Saw].iter() {
        let samples = render("0.5xa4 0.25x- 0.5xa5", &unit_speed(waveform));
        assert_eq!(samples.len(), 22050 + 11025 + 22050);
        assert!(samples[22050..33075].iter().all(|&s| s == 0));
    }
}

#[test]
fn unknown_notes_are_reported() {
    let mut bytes = Vec::new();
    let err = play_song("1xz9", &Config::default(), &mut bytes).unwrap_err();
    match &err {
        Error::Parse {
            source: ParseError::UnknownNote { token, name },
        } => {
            assert_eq!(token, "1xz9");
            assert_eq!(name, "z9");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(err.to_string().contains("1xz9"));
    assert!(bytes.is_empty());
}

#[test]
fn malformed_durations_are_reported() {
    let mut bytes = Vec::new();
    let err = play_song("1xc4 abcxd4", &Config::default(), &mut bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            source: ParseError::InvalidDuration { .. }
        }
    ));
    assert!(bytes.is_empty());
}
