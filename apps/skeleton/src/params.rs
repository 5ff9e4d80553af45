//! The parameters `skeleton` understands

use paramtab::{DescriptorTable, ParameterDescriptor, ParameterParser, TableError};

/// The application's name, as shown in the help and version screens
pub const APPL_NAME: &str = "skeleton";

/// The first line of the help screen
pub const APPLICATION_DESCRIPTION: &str = "Skeleton test application.";

/// Everything the command line can set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Print the help screen and exit
    pub display_help: bool,
    /// Print the version screen and exit
    pub display_version: bool,
}

/// What a parse starts from
pub const DEFAULT_PARAMETERS: Params = Params {
    display_help: false,
    display_version: false,
};

/// The recognized flags
static PARAMETERS_DESCRIPTION: [ParameterDescriptor<Params>; 3] = [
    ParameterDescriptor::flag('h', "help", "Display help.", |params: &mut Params| {
        &mut params.display_help
    }),
    ParameterDescriptor::flag('v', "version", "Display version.", |params: &mut Params| {
        &mut params.display_version
    }),
    ParameterDescriptor::sentinel(),
];

/// The parser for `skeleton`'s command line
///
/// # Errors
/// Only if the descriptor table above is malformed.
pub fn parser() -> Result<ParameterParser<'static, Params>, TableError> {
    let table = DescriptorTable::new(&PARAMETERS_DESCRIPTION)?;
    Ok(ParameterParser::new(table, DEFAULT_PARAMETERS))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use paramtab::ParseError;

    use super::*;

    fn parse(args: &[&str]) -> Result<Params, ParseError> {
        parser()
            .expect("table should be valid")
            .parse(args)
            .map(|parsed| parsed.params)
    }

    #[test]
    fn table_is_valid() {
        let parser = parser().expect("table should be valid");
        assert_eq!(parser.table().len(), 2);
        assert_eq!(parser.defaults(), &DEFAULT_PARAMETERS);
    }

    #[test]
    fn flags_are_recognized() {
        assert_eq!(parse(&["skeleton"]), Ok(DEFAULT_PARAMETERS));
        assert_eq!(
            parse(&["skeleton", "-h"]),
            Ok(Params {
                display_help: true,
                ..DEFAULT_PARAMETERS
            })
        );
        assert_eq!(
            parse(&["skeleton", "--version"]),
            Ok(Params {
                display_version: true,
                ..DEFAULT_PARAMETERS
            })
        );
        assert_eq!(
            parse(&["skeleton", "-hv"]),
            Ok(Params {
                display_help: true,
                display_version: true,
            })
        );
    }

    #[test]
    fn unknown_flags_are_errors() {
        assert_eq!(
            parse(&["skeleton", "-z"]),
            Err(ParseError::UnknownFlag("-z".into()))
        );
    }

    #[test]
    fn help_screen() {
        let help = parser()
            .expect("table should be valid")
            .help(APPL_NAME, APPLICATION_DESCRIPTION)
            .expect("help should build");
        assert_eq!(
            help.to_string(),
            indoc! {"
                skeleton - Skeleton test application.
                Usage : skeleton [hv]
                 - h/help\tDisplay help.
                 - v/version\tDisplay version.
            "}
        );
    }
}
