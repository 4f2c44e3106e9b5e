#![forbid(unsafe_code)]

//! Terminal dimensions and resize notification for Unix.
//!
//! Two small capabilities:
//!
//! - [`query_size`] reads the current dimensions of the terminal attached
//!   to standard input: character columns and rows, plus pixel width and
//!   height where the terminal reports them.
//! - [`ResizeNotifier`] registers a process-wide callback fired when the
//!   controlling terminal is resized (`SIGWINCH`).
//!
//! # Design
//!
//! Both surfaces are fallible: a missing terminal or a rejected syscall is
//! always a typed [`Error`], never a silently zeroed size. The resize
//! callback never executes inside the signal handler itself. The low-level
//! handler only records that a resize occurred; a dedicated watcher thread
//! invokes the callback from ordinary execution context, where heap
//! allocation, locking, and I/O are all safe.
//!
//! Rapid successive resizes may be coalesced into a single notification.
//! Consumers should re-query the size on every notification rather than
//! count deliveries.
//!
//! # Usage
//!
//! ```no_run
//! use tty_winsize::{ResizeNotifier, query_size};
//!
//! let notifier = ResizeNotifier::new();
//! let events = notifier.resize_events()?;
//!
//! let size = query_size()?;
//! eprintln!("starting at {}x{} cells", size.columns, size.rows);
//! while events.recv().is_ok() {
//!     let size = query_size()?;
//!     eprintln!("now {}x{} cells", size.columns, size.rows);
//! }
//! # Ok::<(), tty_winsize::Error>(())
//! ```

#[cfg(not(unix))]
compile_error!("tty-winsize queries POSIX terminal devices and requires a Unix target");

pub mod error;
pub mod notifier;
pub mod size;

pub use error::Error;
pub use notifier::{ResizeCallback, ResizeNotifier};
pub use size::{TerminalSize, query_size, query_size_of};
