//! Single-keystroke console input for Unix terminals
//!
//! The polled "was a key pressed" check, the blocking one-byte read, and the
//! input flush of a Windows console, rebuilt on POSIX termios.

mod raw;

pub mod console;
pub mod error;

pub use console::Console;
pub use error::Error;
pub use raw::RawScope;
