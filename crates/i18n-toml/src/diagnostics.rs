//! Non-fatal diagnostics raised while constructing an accessor

use std::fmt;
use std::path::PathBuf;

/// A condition worth surfacing to the caller that does not prevent the
/// accessor from being used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleWarning {
    /// The locale directory exists but contains no `.toml` resource files
    EmptyLocale {
        /// Locale name as given to the accessor
        locale: String,
        /// The empty locale directory
        path: PathBuf,
    },
}

impl fmt::Display for LocaleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLocale { locale, path } => write!(
                f,
                "Locale '{}' has no translations: {} contains no .toml files",
                locale,
                path.display()
            ),
        }
    }
}
