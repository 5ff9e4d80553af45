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
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

mod convert;
mod descriptor;
mod error;
mod help;
mod kind;
pub mod option_spec;
mod parser;
pub mod scanner;
mod table;
mod value;
mod writer;

pub use convert::convert;
pub use descriptor::{Field, Location, ParameterDescriptor};
pub use error::{ConversionError, InvocationError, ParseError};
pub use help::HelpText;
pub use kind::ParameterKind;
pub use option_spec::OptionSpec;
pub use parser::{collect_args, ParameterParser, Parsed};
pub use table::{DescriptorTable, TableError};
pub use value::Value;
pub use writer::apply;
