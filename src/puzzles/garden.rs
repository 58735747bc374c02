use anyhow::{anyhow, Error};
use geometry::coord2d::Point;
use geometry::grid::{Grid, Map};
use log::info;

use std::io::Read;

const STEPS: usize = 64;

/// Garden plots the elf could be standing on after exactly `steps` steps.
fn plots(garden: &Grid, start: Point, steps: usize) -> usize {
    garden.after_steps(start, steps).len()
}

/// Garden plots the elf could ever reach, given enough steps.
fn reachable_plots(garden: &Grid, start: Point) -> usize {
    garden.region(start).len()
}

pub(crate) fn main(mut input: Box<dyn Read + 'static>) -> ::std::result::Result<(), Error> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;

    let garden: Grid = buffer.parse()?;
    let start = garden.find('S').ok_or(anyhow!("No starting plot"))?;
    info!("Garden is {}x{}", garden.width(), garden.height());

    println!(
        "Part 1: {} plots after {} steps",
        plots(&garden, start, STEPS),
        STEPS
    );
    println!("Part 2: {} plots reachable", reachable_plots(&garden, start));

    Ok(())
}
