// morse-wav -- render text as Morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `morsewav` renders text from standard input (or a file) as a Morse code wav file.

use std::process;

use log::error;
use structopt::StructOpt;

use morse_wav::morsewav::{self, Opt};

fn main() {
    let opt = Opt::from_args();
    simple_logger::init_with_level(opt.log_level()).unwrap();

    if let Err(err) = morsewav::morsewav_main(&opt) {
        error!("{}", err);
        process::exit(err.exit_code());
    }
}
