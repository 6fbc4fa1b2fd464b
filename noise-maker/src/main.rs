mod args;
mod generator;

use args::CliArgs;
use clap::Parser;
use generator::{generate_access_log, generate_malformed_log};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

fn write_logs<W: Write, R: Rng>(
    out: &mut W,
    rng: &mut R,
    lines: usize,
    malformed_ratio: f64,
) -> io::Result<()> {
    for _ in 0..lines {
        let line = if rng.random_bool(malformed_ratio) {
            generate_malformed_log(rng)
        } else {
            generate_access_log(rng)
        };
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    match args.output() {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_logs(&mut out, &mut rng, *args.lines(), *args.malformed_ratio())?;
            eprintln!("Wrote {} log lines to {}", args.lines(), path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_logs(&mut out, &mut rng, *args.lines(), *args.malformed_ratio())?;
        }
    }
    Ok(())
}
