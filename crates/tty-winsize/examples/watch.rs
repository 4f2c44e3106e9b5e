//! Print the terminal size, then again after every resize.
//!
//! Run inside a terminal and drag the window edge:
//! `cargo run --example watch`

use tty_winsize::{ResizeNotifier, query_size};

fn print_size(size: tty_winsize::TerminalSize) {
    match size.pixel_size() {
        Some((w, h)) => println!("{}x{} cells, {w}x{h} px", size.columns, size.rows),
        None => println!("{}x{} cells", size.columns, size.rows),
    }
}

fn main() -> Result<(), tty_winsize::Error> {
    let notifier = ResizeNotifier::new();
    let events = notifier.resize_events()?;

    print_size(query_size()?);
    while events.recv().is_ok() {
        print_size(query_size()?);
    }
    Ok(())
}
