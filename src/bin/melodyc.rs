// syn.pcm -- a tiny synthesizer turning melodies into raw PCM
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `melodyc` renders a melody into a raw stream of signed 16 bit little-endian samples.
//!
//! The output can be played with e.g. `play -t s16 -r 44100 -c 1 indiana_jones.pcm`.

use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use syn_pcm::melody;
use syn_pcm::play::{self, Config};
use syn_pcm::wave::Waveform;

#[derive(Debug, StructOpt)]
#[structopt(name = "melodyc", about = "Rendering melodies into raw PCM")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// File containing the song. The built-in theme is played if not given.
    #[structopt(parse(from_os_str))]
    song: Option<PathBuf>,

    /// Output file, overwritten if it exists.
    #[structopt(short, long, parse(from_os_str), default_value = "indiana_jones.pcm")]
    output: PathBuf,

    /// Wave shape: sine, square or saw.
    #[structopt(short, long, default_value = "saw")]
    wave: Waveform,

    /// Time units per second.
    #[structopt(short, long, default_value = "7.3")]
    speed: f64,

    /// Samples per second.
    #[structopt(short, long, default_value = "44100")]
    rate: u32,

    /// Length of the fade-in and fade-out of every note in seconds.
    #[structopt(long, default_value = "0.04")]
    fade: f64,

    /// Dump the parsed song.
    #[structopt(long)]
    dump_description: Option<Option<PathBuf>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)?;

    let source = match &opt.song {
        Some(path) => std::fs::read_to_string(path)?,
        None => melody::INDIANA_JONES.to_string(),
    };
    let notes = melody::parse_song(source.trim())?;

    let dump_out = opt
        .dump_description
        .map(|path| path.unwrap_or_else(|| "/dev/stdout".into()));
    if let Some(dump_out_path) = dump_out {
        let mut f = File::create(dump_out_path)?;
        writeln!(f, "{}", melody::format_song(&notes))?;
    }

    let config = Config {
        waveform: opt.wave,
        speed: opt.speed,
        sample_rate: opt.rate,
        fade_duration: opt.fade,
    };
    // validate before truncating an existing output file
    play::validate(&notes, &config)?;

    let out = io::BufWriter::new(File::create(&opt.output)?);
    let summary = play::play(&notes, &config, out)?;
    info!(
        "wrote {} samples to {}",
        summary.samples,
        opt.output.display()
    );
    Ok(())
}
