use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;

use rs_nbody::io::{read_points, write_forces};
use rs_nbody::solver::solve;
use rs_nbody::utils::SolverConfig;

/// All-pairs force and potential-energy solver for binary point streams.
///
/// Reads 12-byte position records (x, y, z as little-endian f32) from stdin
/// and writes one force record per point to stdout in the same layout, with
/// an energy/timing summary on stderr.
#[derive(Parser, Debug)]
struct Args {
    /// Max distance
    #[arg(long, default_value_t = 1000.0_f32.sqrt())]
    cut: f32,
    /// Tile side length
    #[arg(long)]
    tile: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Parameters are checked before any input is consumed.
    let config = SolverConfig::new(args.cut, args.tile)?;
    let points = read_points(io::stdin().lock())?;
    let solution = solve(&points, &config)?;
    eprintln!("energy {} time {}ms", solution.energy, solution.elapsed.as_millis());

    let mut writer = BufWriter::new(io::stdout().lock());
    write_forces(&mut writer, &solution.forces)?;
    writer.flush()?;
    Ok(())
}
