//! Internal error handling for `skeleton`
//!
//! A panic in `skeleton` or in `paramtab` is always a bug (a broken
//! descriptor table or a value stored in the wrong field). The panic hook
//! installed here prints the version screen and the command line before the
//! default panic message, so that a report carries what is needed to
//! reproduce it.

use std::{env, panic::PanicHookInfo};

/// Prefix every line of `text` with `note: `
fn as_notes(text: &str) -> String {
    text.lines()
        .map(|line| format!("note: {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handles panics and generates the internal error screen
fn ice_hook(
    default_panic_hook: &'static (dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo,
) {
    eprintln!("error: internal error encountered: thread panicked");
    eprintln!("note: this is not your fault! this is ALWAYS a bug in skeleton or paramtab.");
    eprintln!();
    eprintln!("{}", as_notes(&super::build_info::version()));
    eprintln!();
    eprintln!(
        "note: command line arguments: {}",
        env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    );
    eprintln!();
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal error.");
}

/// Configures the global panic hook
///
/// Also sets `RUST_BACKTRACE` to `1` unless it is already `full`.
pub fn setup_panic_hook() {
    let default_panic_hook: &'static _ = Box::leak(std::panic::take_hook());

    std::panic::set_hook(Box::new(|panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));

    if env::var("RUST_BACKTRACE").ok().as_deref() != Some("full") {
        // SAFETY: called first thing in `main`, before any other thread exists
        unsafe {
            env::set_var("RUST_BACKTRACE", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_becomes_a_note() {
        assert_eq!(as_notes("a\nb"), "note: a\nnote: b");
        assert_eq!(as_notes(""), "");
    }
}
