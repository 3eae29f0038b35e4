#![deny(clippy::all)]
#![forbid(unsafe_code)]

use console_main_support::{run, stdin_commands};
use conway_life_console::ConwayWorld;
use std::io;
use world_grid::Random;

const ROWS: u32 = 5;
const COLS: u32 = 4;

fn main() -> io::Result<()> {
    env_logger::init();
    let mut world = ConwayWorld::new(COLS, ROWS, Random::new());
    run(&mut world, stdin_commands(), &mut io::stdout().lock())?;
    Ok(())
}
