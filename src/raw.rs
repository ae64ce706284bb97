//! Holds the terminal in raw mode for the duration of the returned guard's lifetime.

use crate::{console::Console, error::ConioResult};
use std::{
    ops::{Deref, DerefMut},
    os::fd::AsRawFd,
};

impl<F: AsRawFd> Console<F> {
    /// Enables raw mode for the duration of the returned [RawScope].
    pub fn raw(&mut self) -> ConioResult<RawScope<'_, F>> {
        self.enable()?;
        Ok(RawScope(self))
    }
}

/// Holds the terminal in raw mode until dropped.
///
/// Dereferences to the borrowed [Console], so polling and reading work
/// through the guard. The drop handler restores the cooked configuration and
/// swallows any restore failure — call [Console::disable] directly if you
/// care about the outcome.
pub struct RawScope<'c, F: AsRawFd>(&'c mut Console<F>);

impl<F: AsRawFd> Deref for RawScope<'_, F> {
    type Target = Console<F>;
    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<F: AsRawFd> DerefMut for RawScope<'_, F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<F: AsRawFd> Drop for RawScope<'_, F> {
    fn drop(&mut self) {
        let _ = self.0.disable();
    }
}
