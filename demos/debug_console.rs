//! Reads debug commands from stdin, running a second of race between each one.
//!
//! Try `give star`, `difficulty hard`, `state` or `restart`.

use std::io::{self, BufRead};

use kartsim::{Key, Race, logging};

const FRAMES_PER_COMMAND: usize = 60;

fn main() -> io::Result<()> {
    let _ = logging::try_init();

    let mut race = Race::new();
    race.input_mut().press(Key::Forward);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match race.run_debug_line(&line) {
            Ok(reply) => println!("{reply}"),
            Err(e) => eprintln!("error: {e}"),
        }

        for _ in 0..FRAMES_PER_COMMAND {
            race.step(1.0 / 60.0);
        }
    }

    Ok(())
}
