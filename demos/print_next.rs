// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Print the first outputs of a generator.
//!
//! Usage: `cargo run --example print_next [ENGINE] [SEED] [COUNT]`
//!
//! `ENGINE` is any name [`Engine`] parses (default `xoroshiro128plus`).
//! Without a `SEED` the generator is seeded from the operating system.

use std::env;
use std::process;

use fakerng::prelude::*;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let engine: Engine = match args.next() {
        Some(name) => name.parse()?,
        None => Engine::default(),
    };
    let mut rng = match args.next() {
        Some(seed) => engine.seed(seed.parse()?),
        None => AnyRng::from_entropy(engine)?,
    };
    let count: usize = match args.next() {
        Some(count) => count.parse()?,
        None => 10,
    };

    println!("# {}", engine);
    for _ in 0..count {
        let bits = rng.next_u64();
        println!("{:#018x}  {}", bits, fakerng::distributions::float::unit_f64(bits));
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
