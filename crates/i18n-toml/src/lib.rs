//! # i18n-toml
//!
//! Dotted-path access to per-locale TOML translation files.
//!
//! Resources live in one directory per locale:
//!
//! ```text
//! locales/
//!   ru/
//!     buttons.toml
//!     messages.toml
//! ```
//!
//! A path such as `messages.info.welcome` selects `messages.toml` and then
//! walks the `info` table to the `welcome` key. Each file is parsed on first
//! use and cached for the lifetime of the accessor.
//!
//! # Example
//!
//! ```rust,no_run
//! use i18n_toml::{interpolate, I18nToml};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let i18n = I18nToml::new("locales", "ru")?;
//!
//! let login = i18n.get_str("buttons.login_btn")?;
//! let welcome = i18n.format("messages.info.welcome", &[("username", "Рудольфо")])?;
//!
//! println!("{login} / {welcome}");
//!
//! let raw = i18n.t("messages.info.version.stable")?;
//! if let Some(template) = raw.as_str() {
//!     println!("{}", interpolate(template, &[("version", "1.0.1")]));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod accessor;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interpolate;
pub mod path;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use accessor::I18nToml;
pub use config::I18nConfig;
pub use diagnostics::LocaleWarning;
pub use error::{I18nError, I18nResult};
pub use interpolate::interpolate;
pub use path::LookupPath;

// Re-export the value types returned by lookups
pub use toml::{Table, Value};
