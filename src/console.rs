//! Reads the keys as they are pressed. Not much more to it than that.
//!
//! This module is in charge of the termios transitions: capturing the cooked
//! configuration once, switching to non-canonical mode, and writing the
//! capture back on [disable](Console::disable).

use crate::error::*;
use std::{
    io::{self, Stdin},
    os::fd::{AsRawFd, RawFd},
};

/// Single-keystroke input over a terminal descriptor.
///
/// Owns the saved terminal configuration: the attribute set is captured on
/// the first [enable](Self::enable) of this instance's lifetime and written
/// back by every [disable](Self::disable). One `Console` is one raw-mode
/// session — if something else rewrites the terminal attributes behind your
/// back and you want a fresh capture, construct a new `Console`.
///
/// Restoration only ever happens through [disable](Self::disable) (or a
/// [RawScope](crate::RawScope) drop). A process that dies in raw mode leaves
/// the terminal raw, and cleaning that up is the caller's problem.
pub struct Console<F: AsRawFd> {
    input: F,
    saved: Option<libc::termios>,
}

impl Console<Stdin> {
    /// Constructs a [Console] over standard input.
    pub fn stdin() -> Self {
        Self::with_input(io::stdin())
    }
}

impl<F: AsRawFd> Console<F> {
    /// Constructs a [Console] over the given input descriptor.
    pub fn with_input(input: F) -> Self {
        Self { input, saved: None }
    }

    /// Switches the terminal into non-canonical, no-echo mode.
    ///
    /// The first call captures the current attribute set for
    /// [disable](Self::disable) to restore. Later calls reapply raw mode
    /// without recapturing, so an enable/disable pair always lands back on
    /// the configuration that was active before the *first* enable.
    pub fn enable(&mut self) -> ConioResult<()> {
        let fd = self.as_raw_fd();
        if unsafe { libc::isatty(fd) } == 0 {
            return Err(Error::NotATty);
        }
        if self.saved.is_none() {
            self.saved = Some(query_attributes(fd)?);
        }
        let mut term = self.saved.expect("should have just been captured");
        term.c_lflag &= !(libc::ICANON | libc::ECHO);
        // The canonical-mode VEOF/VEOL bytes share these slots and would
        // otherwise be inherited as a 4-byte read minimum.
        term.c_cc[libc::VMIN] = 1;
        term.c_cc[libc::VTIME] = 0;
        apply_attributes(fd, &term)
    }

    /// Restores the configuration captured by the first [enable](Self::enable).
    ///
    /// Echo, canonical mode, and every other flag go back to their pre-enable
    /// values. Without a prior enable there is nothing to restore and this is
    /// a no-op; while already cooked it rewrites the same attributes.
    pub fn disable(&mut self) -> ConioResult<()> {
        match &self.saved {
            Some(term) => apply_attributes(self.as_raw_fd(), term),
            None => Ok(()),
        }
    }

    /// Whether this instance has engaged raw mode and holds a restore point.
    pub fn is_enabled(&self) -> bool {
        self.saved.is_some()
    }

    /// Number of bytes ready to read without blocking.
    ///
    /// In raw mode, nonzero means a key has been pressed since the last read.
    /// It still works as a plain bytes-available query in any mode.
    pub fn poll(&self) -> ConioResult<usize> {
        let mut pending: libc::c_int = 0;
        if unsafe { libc::ioctl(self.as_raw_fd(), libc::FIONREAD, &mut pending) } != 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(pending as usize)
    }

    /// Reads exactly one byte, blocking until one arrives.
    ///
    /// The byte comes back unmodified and, in raw mode, unechoed. The
    /// interrupt combination never reaches this function — the terminal
    /// driver eats it first. Arrow and function keys arrive as multi-byte
    /// escape sequences, one byte per call; reassembly is the caller's job.
    pub fn read_byte(&mut self) -> ConioResult<u8> {
        let fd = self.as_raw_fd();
        let mut buf = [0u8; 1];
        loop {
            match unsafe { libc::read(fd, buf.as_mut_ptr().cast(), 1) } {
                1.. => return Ok(buf[0]),
                0 => return Err(Error::EndOfInput),
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() != io::ErrorKind::Interrupted {
                        return Err(err.into());
                    }
                }
            }
        }
    }

    /// Reads one character, blocking for as many bytes as it needs.
    ///
    /// Keystrokes outside ASCII arrive as short UTF-8 sequences; this
    /// reassembles them. Escape sequences are *not* decoded here — pressing
    /// an arrow key yields `'\x1b'` first.
    pub fn read_char(&mut self) -> ConioResult<char> {
        let start = self.read_byte()? as u32;
        let (mut out, count) = match start {
            start if start & 0x80 == 0x00 => (start, 0), // ASCII valid range
            start if start & 0xe0 == 0xc0 => (start & 0x1f, 1), // 1 continuation byte
            start if start & 0xf0 == 0xe0 => (start & 0x0f, 2), // 2 continuation bytes
            start if start & 0xf8 == 0xf0 => (start & 0x07, 3), // 3 continuation bytes
            _ => return Err(Error::BadUnicode(start)),
        };
        for _ in 0..count {
            let cont = self.read_byte()? as u32;
            if cont & 0xc0 != 0x80 {
                return Err(Error::BadUnicode(cont));
            }
            out = out << 6 | (cont & 0x3f);
        }
        char::from_u32(out).ok_or(Error::BadUnicode(out))
    }

    /// Throws away anything typed but not yet read, so the next poll or read
    /// starts from an empty queue.
    pub fn flush(&mut self) -> ConioResult<()> {
        if unsafe { libc::tcflush(self.as_raw_fd(), libc::TCIFLUSH) } != 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(())
    }
}

impl<F: AsRawFd> AsRawFd for Console<F> {
    fn as_raw_fd(&self) -> RawFd {
        self.input.as_raw_fd()
    }
}

fn query_attributes(fd: RawFd) -> ConioResult<libc::termios> {
    let mut term: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut term) } != 0 {
        return Err(io::Error::last_os_error().into());
    }
    Ok(term)
}

// TCSANOW: apply immediately, without draining output or dropping pending input.
fn apply_attributes(fd: RawFd, term: &libc::termios) -> ConioResult<()> {
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, term) } != 0 {
        return Err(io::Error::last_os_error().into());
    }
    Ok(())
}
