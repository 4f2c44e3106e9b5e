#![forbid(unsafe_code)]

//! Typed failures for size probes and resize registration.
//!
//! Every error is reported synchronously to the caller of the failing
//! operation. Nothing here is treated as process-fatal: callers decide
//! whether a missing terminal means a default layout or an abort.

use rustix::io::Errno;
use thiserror::Error;

/// Errors surfaced by [`query_size`](crate::size::query_size) and
/// [`ResizeNotifier`](crate::notifier::ResizeNotifier).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The probed descriptor is not a terminal device.
    ///
    /// Typical when standard input has been redirected from a file or
    /// pipe.
    #[error("descriptor is not attached to a terminal")]
    NoControllingTerminal,

    /// The winsize query was rejected by the OS for a reason other than
    /// "not a terminal".
    #[error("terminal size query failed: {0}")]
    SyscallFailure(Errno),

    /// The OS refused to install the resize signal handler.
    #[error("resize handler registration failed: {0}")]
    RegistrationFailure(Errno),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syscall_failure_names_the_errno() {
        let err = Error::SyscallFailure(Errno::BADF);
        assert!(err.to_string().contains("size query"));
    }

    #[test]
    fn no_terminal_is_not_an_errno_error() {
        let err = Error::NoControllingTerminal;
        assert_eq!(err.to_string(), "descriptor is not attached to a terminal");
    }
}
