//! The help screen derived from a descriptor table

use std::{collections::TryReserveError, fmt};

use crate::{DescriptorTable, OptionSpec};

/// An application's help screen, ready to be printed
///
/// ```text
/// skeleton - Skeleton test application.
/// Usage : skeleton [hv]
///  - h/help	Display help.
///  - v/version	Display version.
/// ```
pub struct HelpText<'t, 'a, R> {
    /// Shown on the first and usage lines
    app_name: &'t str,
    /// Shown on the first line
    description: &'t str,
    /// Provides the usage line
    spec: OptionSpec<'a>,
    /// Provides one line per flag
    table: DescriptorTable<'a, R>,
}

impl<'t, 'a, R> HelpText<'t, 'a, R> {
    /// Prepare the help screen of `app_name` for `table`
    ///
    /// # Errors
    /// Fails when the usage line's option string can not be allocated.
    pub fn new(
        app_name: &'t str,
        description: &'t str,
        table: DescriptorTable<'a, R>,
    ) -> Result<Self, TryReserveError> {
        Ok(Self {
            app_name,
            description,
            spec: OptionSpec::build(table)?,
            table,
        })
    }
}

impl<R> fmt::Display for HelpText<'_, '_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.app_name, self.description)?;
        writeln!(f, "Usage : {} [{}]", self.app_name, self.spec.short_options())?;
        for descriptor in self.table.iter() {
            writeln!(
                f,
                " - {}/{}\t{}",
                descriptor.short_flag(),
                descriptor.long_flag(),
                descriptor.help()
            )?;
        }
        Ok(())
    }
}

impl<R> fmt::Debug for HelpText<'_, '_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpText")
            .field("app_name", &self.app_name)
            .field("description", &self.description)
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}
