#![forbid(unsafe_code)]

//! Process-wide resize notification.
//!
//! The OS signal disposition for `SIGWINCH` is a single, process-global
//! resource. [`ResizeNotifier`] makes that ownership explicit: it is an
//! owned registry object with exactly two states, unregistered and
//! registered, and a mutex serializing every transition.
//!
//! # Design
//!
//! User callbacks never run inside the signal handler. `signal-hook`'s
//! low-level handler does nothing but write a byte to a self-pipe; a
//! dedicated watcher thread drains the signal iterator and invokes the
//! callback from ordinary execution context. Replacing a callback shuts
//! the previous watcher down completely (iterator closed, thread joined)
//! before the new one is installed, so a replaced callback can never fire
//! after the replacing call returns.
//!
//! # Contract
//!
//! At most one callback is active at a time, and at most one
//! `ResizeNotifier` should be live per process. Creating several would
//! multiplex the same signal to several callbacks, defeating the
//! single-slot registration model.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError, mpsc};
use std::thread;

use rustix::io::Errno;
use signal_hook::consts::signal::SIGWINCH;
use signal_hook::iterator::Signals;

use crate::error::Error;

/// A resize callback.
///
/// Runs on a dedicated watcher thread, not in the signal handler, so it
/// may allocate, lock, and perform I/O. It takes no arguments and returns
/// nothing: its only job is to record that a resize occurred, after which
/// the application re-queries [`query_size`](crate::size::query_size).
pub type ResizeCallback = Box<dyn Fn() + Send + 'static>;

/// Process-wide `SIGWINCH` registration slot.
///
/// Starts unregistered. [`set_handler`](Self::set_handler) with `Some`
/// installs or replaces the callback; with `None` it removes it. Both
/// states are revisitable indefinitely. Dropping the notifier unregisters.
#[derive(Debug, Default)]
pub struct ResizeNotifier {
    watcher: Mutex<Option<Watcher>>,
}

impl ResizeNotifier {
    /// Create an unregistered notifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            watcher: Mutex::new(None),
        }
    }

    /// Install, replace, or remove the process-wide resize callback.
    ///
    /// The previous watcher, if any, is fully shut down before a new one
    /// is installed: once this call returns, the old callback will never
    /// fire again. Concurrent callers are serialized by the internal
    /// mutex.
    ///
    /// # Errors
    ///
    /// [`Error::RegistrationFailure`] when the OS refuses the signal
    /// registration.
    pub fn set_handler(&self, callback: Option<ResizeCallback>) -> Result<(), Error> {
        let mut slot = self.lock_slot();

        // Old watcher first: its shutdown joins the thread, so the old
        // callback cannot fire once we return.
        if let Some(old) = slot.take() {
            drop(old);
            #[cfg(feature = "tracing")]
            tracing::debug!("resize watcher removed");
        }

        if let Some(callback) = callback {
            *slot = Some(Watcher::spawn(callback)?);
            #[cfg(feature = "tracing")]
            tracing::debug!("resize watcher installed");
        }

        Ok(())
    }

    /// Whether a callback is currently registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.lock_slot().is_some()
    }

    /// Subscribe to coalesced resize notifications.
    ///
    /// Replaces any previously registered callback with one that feeds a
    /// bounded channel holding at most one pending notification. Storms
    /// of rapid resizes collapse into a single wakeup; consumers should
    /// re-query the terminal size on every received unit rather than
    /// count deliveries.
    ///
    /// # Errors
    ///
    /// Same contract as [`set_handler`](Self::set_handler).
    pub fn resize_events(&self) -> Result<mpsc::Receiver<()>, Error> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.set_handler(Some(Box::new(move || {
            // A pending notification already wakes the consumer once;
            // extra deliveries carry no information.
            let _ = tx.try_send(());
        })))?;
        Ok(rx)
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Watcher>> {
        self.watcher.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owns the `SIGWINCH` iterator thread for one registered callback.
///
/// Dropping the watcher closes the signal iterator and joins the thread,
/// guaranteeing the callback does not run afterwards.
#[derive(Debug)]
struct Watcher {
    handle: signal_hook::iterator::Handle,
    thread: Option<thread::JoinHandle<()>>,
}

impl Watcher {
    fn spawn(callback: ResizeCallback) -> Result<Self, Error> {
        let mut signals = Signals::new([SIGWINCH]).map_err(registration_error)?;
        let handle = signals.handle();
        let thread = thread::spawn(move || {
            for _ in signals.forever() {
                callback();
            }
        });

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn registration_error(err: io::Error) -> Error {
    let errno = err
        .raw_os_error()
        .map_or(Errno::INVAL, Errno::from_raw_os_error);
    Error::RegistrationFailure(errno)
}
