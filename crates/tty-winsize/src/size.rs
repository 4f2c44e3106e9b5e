#![forbid(unsafe_code)]

//! Synchronous terminal size probing.
//!
//! [`query_size`] reads the winsize of the terminal attached to standard
//! input. [`query_size_of`] does the same for an arbitrary descriptor,
//! which is what the PTY-based integration tests use.
//!
//! Both are read-only and safe to call from multiple threads. Absent an
//! intervening resize, repeated calls return identical values.

use std::io;
use std::os::fd::AsFd;

use rustix::io::Errno;
use rustix::termios::tcgetwinsize;

use crate::error::Error;

/// Dimensions of a terminal device at a single point in time.
///
/// A plain value: created fresh on each query, compared by equality,
/// never mutated. Pixel dimensions of 0 mean the terminal did not report
/// them, not that the window is zero-sized; [`TerminalSize::pixel_size`]
/// encodes that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalSize {
    /// Character cells per row.
    pub columns: u16,
    /// Character rows.
    pub rows: u16,
    /// Width in pixels; 0 when the terminal does not report pixel sizes.
    pub pixel_width: u16,
    /// Height in pixels; 0 when the terminal does not report pixel sizes.
    pub pixel_height: u16,
}

impl TerminalSize {
    /// Pixel dimensions, or `None` when the terminal reported none.
    ///
    /// Kernels leave `ws_xpixel`/`ws_ypixel` at 0 for terminals that do
    /// not track pixel sizes, so a zero on either axis reads as unknown.
    #[must_use]
    pub const fn pixel_size(&self) -> Option<(u16, u16)> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            None
        } else {
            Some((self.pixel_width, self.pixel_height))
        }
    }
}

/// Query the size of the terminal attached to standard input.
///
/// # Errors
///
/// [`Error::NoControllingTerminal`] when standard input is not a terminal
/// device; [`Error::SyscallFailure`] for any other OS-level rejection.
pub fn query_size() -> Result<TerminalSize, Error> {
    query_size_of(io::stdin())
}

/// Query the size of the terminal behind an arbitrary descriptor.
///
/// An interrupted syscall (`EINTR`) is retried exactly once before the
/// failure is surfaced.
///
/// # Errors
///
/// Same contract as [`query_size`].
pub fn query_size_of<Fd: AsFd>(fd: Fd) -> Result<TerminalSize, Error> {
    let fd = fd.as_fd();
    let mut result = tcgetwinsize(fd);
    if result.as_ref().err() == Some(&Errno::INTR) {
        result = tcgetwinsize(fd);
    }
    let ws = result.map_err(|errno| {
        if errno == Errno::NOTTY {
            Error::NoControllingTerminal
        } else {
            Error::SyscallFailure(errno)
        }
    })?;

    Ok(TerminalSize {
        columns: ws.ws_col,
        rows: ws.ws_row,
        pixel_width: ws.ws_xpixel,
        pixel_height: ws.ws_ypixel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_null_is_not_a_terminal() {
        let file = std::fs::File::open("/dev/null").expect("open /dev/null");
        assert!(matches!(
            query_size_of(&file),
            Err(Error::NoControllingTerminal)
        ));
    }

    #[test]
    fn zero_pixels_read_as_unknown() {
        let size = TerminalSize {
            columns: 80,
            rows: 24,
            pixel_width: 0,
            pixel_height: 0,
        };
        assert_eq!(size.pixel_size(), None);
    }

    #[test]
    fn one_sided_pixel_report_reads_as_unknown() {
        let size = TerminalSize {
            columns: 80,
            rows: 24,
            pixel_width: 640,
            pixel_height: 0,
        };
        assert_eq!(size.pixel_size(), None);
    }

    #[test]
    fn reported_pixels_read_back() {
        let size = TerminalSize {
            columns: 80,
            rows: 24,
            pixel_width: 640,
            pixel_height: 384,
        };
        assert_eq!(size.pixel_size(), Some((640, 384)));
    }
}
