//! Polls the keyboard the way a text-mode game would:
//!
//! 1. Check [poll](conio::Console::poll) for a pressed key
//! 2. Sleep a frame if there is none
//! 3. Read and react, one byte at a time
//!
//! Press `q` to quit.

use conio::Console;
use std::{error::Error, thread, time::Duration};

fn main() -> Result<(), Box<dyn Error>> {
    let mut con = Console::stdin();
    let mut keys = con.raw()?;
    println!("press some keys (q quits)");
    loop {
        if keys.poll()? == 0 {
            thread::sleep(Duration::from_millis(16));
            continue;
        }
        match keys.read_byte()? {
            b'q' => break,
            key => println!("key {key:#04x}"),
        }
    }
    Ok(())
}
