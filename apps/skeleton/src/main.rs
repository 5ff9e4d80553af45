#![doc=include_str!("../README.md")]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::else_if_without_else,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::redundant_type_annotations,
    clippy::same_name_method,
    clippy::todo,
    clippy::unimplemented,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod build_info;
mod ice;
mod params;

use params::{Params, APPLICATION_DESCRIPTION, APPL_NAME};

/// Environment variable holding the log filter
const LOG_ENV: &str = "SKELETON_LOG";

/// What the command line asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Print the help screen
    Help,
    /// Print the version screen
    Version,
    /// Nothing was requested
    Nothing,
}

impl Action {
    /// Pick the action for parsed parameters. Help wins over version.
    const fn select(params: &Params) -> Self {
        if params.display_help {
            Self::Help
        } else if params.display_version {
            Self::Version
        } else {
            Self::Nothing
        }
    }
}

/// Install the log subscriber, filtered by [`LOG_ENV`] (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();
}

/// Parse `args` and write what they ask for to `out`
///
/// # Errors
/// Fails when the arguments can not be parsed or `out` can not be written.
fn run<I>(args: I, out: &mut impl Write) -> anyhow::Result<()>
where
    I: IntoIterator<Item = OsString>,
{
    let parser = params::parser().context("invalid parameter table")?;
    let args = paramtab::collect_args(args).context("invalid parameter parsing")?;
    let parsed = parser.parse(args.as_slice()).context("invalid parameter parsing")?;

    if !parsed.operands.is_empty() {
        tracing::warn!(operands = ?parsed.operands, "ignoring operands");
    }

    let action = Action::select(&parsed.params);
    tracing::debug!(?action, "parameters parsed");

    match action {
        Action::Help => write!(
            out,
            "{}",
            parser.help(APPL_NAME, APPLICATION_DESCRIPTION)?
        ),
        Action::Version => writeln!(out, "{}", build_info::version()),
        Action::Nothing => writeln!(out, "Nothing to do."),
    }
    .context("unable to write the output")?;

    Ok(())
}

fn main() -> ExitCode {
    ice::setup_panic_hook();
    init_logging();

    match run(std::env::args_os(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error {err:#}");
            ExitCode::FAILURE
        }
    }
}
