#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::debug;
use std::io::{self, BufRead, Write};
use world_grid::{GridCell, StepOutcome, World};

pub const QUIT_PROMPT: &str = "Type q to quit [any other to continue]: ";
pub const STILL_LIFE_NOTICE: &str = "Still life - No more generational changes";

/// One answer to the quit prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Continue,
    Quit,
}

/// Why the generation loop ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StopReason {
    /// The board reached a fixed point.
    Settled,
    /// The user answered the prompt with a quit.
    Quit,
}

/// Drives the world until the user quits or the board settles. The seeded
/// board is shown as generation 1, then each step renders the next
/// generation and asks for a command. A quit answer wins even when that
/// step settled the board.
pub fn run<W, C, O>(world: &mut W, mut next_command: C, out: &mut O) -> io::Result<StopReason>
where
    W: World,
    C: FnMut() -> io::Result<Command>,
    O: Write,
{
    let mut generation: u64 = 1;
    write_frame(out, world, generation)?;

    loop {
        let outcome = world.update();
        generation += 1;
        writeln!(out)?;
        write_frame(out, world, generation)?;

        writeln!(out)?;
        write!(out, "{QUIT_PROMPT}")?;
        out.flush()?;
        if next_command()? == Command::Quit {
            debug!("user quit after generation {generation}");
            return Ok(StopReason::Quit);
        }

        if outcome == StepOutcome::Settled {
            writeln!(out, "{STILL_LIFE_NOTICE}")?;
            debug!("board settled at generation {generation}");
            return Ok(StopReason::Settled);
        }
    }
}

/// Writes one board frame: a caption line, then one line per grid row.
pub fn write_frame<W, O>(out: &mut O, world: &W, generation: u64) -> io::Result<()>
where
    W: World,
    O: Write,
{
    writeln!(out, "Generation {generation}")?;
    let width = world.width() as usize;
    for (index, cell) in world.cells_iter().enumerate() {
        if index % width == 0 {
            write!(out, " ")?;
        }
        write!(out, "  {}   ", cell.glyph())?;
        if (index + 1) % width == 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn stdin_commands() -> impl FnMut() -> io::Result<Command> {
    reader_commands(io::stdin().lock())
}

/// Adapts a line-oriented reader into a command source: one line per
/// prompt, a line starting with `q` or `Q` quits, end of input quits.
pub fn reader_commands<R>(reader: R) -> impl FnMut() -> io::Result<Command>
where
    R: BufRead,
{
    let mut lines = reader.lines();
    move || match lines.next() {
        Some(line) => Ok(parse_command(&line?)),
        None => Ok(Command::Quit),
    }
}

fn parse_command(line: &str) -> Command {
    match line.chars().next() {
        Some('q' | 'Q') => Command::Quit,
        _ => Command::Continue,
    }
}
