use console_main_support::{
    reader_commands, run, write_frame, StopReason, QUIT_PROMPT, STILL_LIFE_NOTICE,
};
use conway_life_console::ConwayWorld;
use world_grid::{Loc, Random};

fn block_world() -> ConwayWorld {
    let mut world = ConwayWorld::new_empty(4, 5);
    for &(row, col) in &[(1, 1), (1, 2), (2, 1), (2, 2)] {
        world.set_alive(Loc::new(row, col));
    }
    world
}

#[test]
fn session_ends_on_still_life() {
    let mut world = block_world();
    let mut out = Vec::new();

    let reason = run(&mut world, reader_commands(&b"\n"[..]), &mut out).unwrap();

    assert_eq!(reason, StopReason::Settled);
    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.starts_with("Generation 1\n"));
    assert!(transcript.contains("Generation 2\n"));
    assert!(transcript.ends_with("Still life - No more generational changes\n"));
}

#[test]
fn session_ends_when_the_user_types_q() {
    let mut world = ConwayWorld::new(4, 5, Random::from_seed(3));
    let mut out = Vec::new();

    let reason = run(&mut world, reader_commands(&b"q\n"[..]), &mut out).unwrap();

    assert_eq!(reason, StopReason::Quit);
    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(transcript.matches(QUIT_PROMPT).count(), 1);
    assert!(!transcript.contains(STILL_LIFE_NOTICE));
}

#[test]
fn session_continues_until_quit_on_an_oscillator() {
    let mut world = ConwayWorld::new_empty(5, 5);
    for &(row, col) in &[(2, 1), (2, 2), (2, 3)] {
        world.set_alive(Loc::new(row, col));
    }
    let mut out = Vec::new();

    let reason = run(&mut world, reader_commands(&b"\n\nq\n"[..]), &mut out).unwrap();

    assert_eq!(reason, StopReason::Quit);
    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(transcript.matches("Generation").count(), 4);
    assert!(!transcript.contains(STILL_LIFE_NOTICE));
}

#[test]
fn end_of_input_acts_as_quit() {
    let mut world = ConwayWorld::new(4, 5, Random::from_seed(3));
    let mut out = Vec::new();

    let reason = run(&mut world, reader_commands(&b""[..]), &mut out).unwrap();

    assert_eq!(reason, StopReason::Quit);
}

#[test]
fn frames_show_ones_and_zeros_padded_into_columns() {
    let world = block_world();
    let mut out = Vec::new();

    write_frame(&mut out, &world, 1).unwrap();

    let transcript = String::from_utf8(out).unwrap();
    let mut lines = transcript.lines();
    assert_eq!(lines.next(), Some("Generation 1"));
    assert_eq!(lines.next(), Some("   0     0     0     0   "));
    assert_eq!(lines.next(), Some("   0     1     1     0   "));
    assert_eq!(lines.next(), Some("   0     1     1     0   "));
    assert_eq!(lines.next(), Some("   0     0     0     0   "));
    assert_eq!(lines.next(), Some("   0     0     0     0   "));
    assert_eq!(lines.next(), None);
}
