//! Per-locale TOML resource accessor with lazy per-file caching

use crate::config::I18nConfig;
use crate::diagnostics::LocaleWarning;
use crate::error::{I18nError, I18nResult};
use crate::interpolate::interpolate;
use crate::path::{type_name, walk, LookupPath};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use toml::{Table, Value};
use tracing::{debug, error, info, warn};

/// Extension of resource files inside a locale directory
const RESOURCE_EXTENSION: &str = "toml";

/// Resolves dotted paths like `messages.info.welcome` against
/// `<root_dir>/<locale>/messages.toml`.
///
/// Files are parsed on first access and kept for the lifetime of the
/// accessor. Entries are never replaced or evicted.
///
/// Each file gets its own slot in the cache. The map lock is only held to
/// find or create a slot, so a slow parse never blocks lookups into other
/// files.
#[derive(Debug)]
pub struct I18nToml {
    root_dir: PathBuf,
    locale: String,
    locale_dir: PathBuf,
    warnings: Vec<LocaleWarning>,
    cache: RwLock<HashMap<String, Arc<OnceCell<Arc<Table>>>>>,
}

impl I18nToml {
    /// Create an accessor for `locale` under `root_dir`.
    ///
    /// Fails with [`I18nError::LocaleDirectoryMissing`] when
    /// `root_dir/locale` is not a directory. A locale directory without any
    /// `.toml` files is accepted but recorded as
    /// [`LocaleWarning::EmptyLocale`].
    pub fn new<P: AsRef<Path>>(root_dir: P, locale: &str) -> I18nResult<Self> {
        let root_dir = root_dir.as_ref().to_path_buf();
        let locale_dir = root_dir.join(locale);

        if !locale_dir.is_dir() {
            return Err(I18nError::LocaleDirectoryMissing { path: locale_dir });
        }

        let mut warnings = Vec::new();
        if !has_resource_files(&locale_dir)? {
            let warning = LocaleWarning::EmptyLocale {
                locale: locale.to_string(),
                path: locale_dir.clone(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        info!("I18nToml initialized for locale '{}' at {:?}", locale, locale_dir);

        Ok(Self {
            root_dir,
            locale: locale.to_string(),
            locale_dir,
            warnings,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Create an accessor from an [`I18nConfig`]
    pub fn from_config(config: &I18nConfig) -> I18nResult<Self> {
        Self::new(&config.root_dir, &config.locale)
    }

    /// Look up a dotted path and return the value exactly as parsed.
    ///
    /// The first segment names the file, the rest walk into its tables.
    /// A path with only a file segment returns the whole file as a table.
    pub fn get(&self, path: &str) -> I18nResult<Value> {
        let lookup = LookupPath::parse(path);
        if !lookup.has_valid_file() {
            return Err(I18nError::ResourceFileMissing {
                path: self.resource_path(lookup.file),
            });
        }
        let table = self.load(lookup.file)?;

        match walk(&table, lookup.file, &lookup.keys)? {
            Some(value) => Ok(value.clone()),
            None => Ok(Value::Table(table.as_ref().clone())),
        }
    }

    /// Shorthand for [`I18nToml::get`]
    pub fn t(&self, path: &str) -> I18nResult<Value> {
        self.get(path)
    }

    /// Look up a path whose value must be a string
    pub fn get_str(&self, path: &str) -> I18nResult<String> {
        match self.get(path)? {
            Value::String(text) => Ok(text),
            other => Err(I18nError::TypeMismatch {
                path: path.to_string(),
                expected: "string",
                found: type_name(&other),
            }),
        }
    }

    /// Look up a string and fill its `{name}` placeholders from `args`
    pub fn format(&self, path: &str, args: &[(&str, &str)]) -> I18nResult<String> {
        let template = self.get_str(path)?;
        Ok(interpolate(&template, args))
    }

    /// Resources root directory
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Locale name
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// `<root_dir>/<locale>`
    pub fn locale_dir(&self) -> &Path {
        &self.locale_dir
    }

    /// Diagnostics raised at construction
    pub fn warnings(&self) -> &[LocaleWarning] {
        &self.warnings
    }

    /// Whether `file` has already been parsed and cached
    pub fn is_cached(&self, file: &str) -> bool {
        self.cache
            .read()
            .get(file)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Names of all cached files, sorted
    pub fn cached_files(&self) -> Vec<String> {
        let mut files: Vec<String> = self
            .cache
            .read()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(file, _)| file.clone())
            .collect();
        files.sort();
        files
    }

    /// Return the parsed table for `file`, reading it on first access
    fn load(&self, file: &str) -> I18nResult<Arc<Table>> {
        let existing = self.cache.read().get(file).map(Arc::clone);
        let slot = match existing {
            Some(slot) => slot,
            None => Arc::clone(self.cache.write().entry(file.to_string()).or_default()),
        };

        if let Some(table) = slot.get() {
            debug!("Cache hit for resource '{}'", file);
            return Ok(Arc::clone(table));
        }

        // concurrent callers on the same slot wait here; only one parses
        match slot.get_or_try_init(|| self.parse_file(file).map(Arc::new)) {
            Ok(table) => Ok(Arc::clone(table)),
            Err(err) => {
                self.discard_empty_slot(file);
                Err(err)
            }
        }
    }

    /// Drop the slot for `file` if it never got a parsed table
    fn discard_empty_slot(&self, file: &str) {
        let mut cache = self.cache.write();
        if cache.get(file).is_some_and(|slot| slot.get().is_none()) {
            cache.remove(file);
        }
    }

    fn resource_path(&self, file: &str) -> PathBuf {
        self.locale_dir.join(format!("{file}.{RESOURCE_EXTENSION}"))
    }

    /// Read and parse `<locale_dir>/<file>.toml`
    fn parse_file(&self, file: &str) -> I18nResult<Table> {
        let resource_path = self.resource_path(file);

        if !resource_path.is_file() {
            warn!("Resource file does not exist: {:?}", resource_path);
            return Err(I18nError::ResourceFileMissing {
                path: resource_path,
            });
        }

        debug!("Loading resource file: {:?}", resource_path);
        let content = fs::read_to_string(&resource_path).map_err(|source| {
            error!("Failed to read resource file {:?}: {}", resource_path, source);
            I18nError::Io {
                path: resource_path.clone(),
                source,
            }
        })?;

        let table = content.parse::<Table>().map_err(|source| {
            error!("Failed to parse resource file {:?}: {}", resource_path, source);
            I18nError::Parse {
                path: resource_path.clone(),
                source,
            }
        })?;

        info!("Loaded resource '{}' for locale '{}'", file, self.locale);
        Ok(table)
    }
}

/// Whether `dir` directly contains at least one `.toml` file
fn has_resource_files(dir: &Path) -> I18nResult<bool> {
    let io_error = |source| I18nError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == RESOURCE_EXTENSION) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_locales, init_test_logging, write_resource};

    #[test]
    fn test_construction_reads_no_resources() {
        init_test_logging();
        let temp_dir = create_test_locales();
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();

        assert!(i18n.cached_files().is_empty());
        assert!(i18n.warnings().is_empty());
        assert_eq!(i18n.locale(), "ru");
        assert_eq!(i18n.locale_dir(), temp_dir.path().join("ru"));
    }

    #[test]
    fn test_lookup_populates_cache_once_per_file() {
        let temp_dir = create_test_locales();
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();

        i18n.get("buttons.login_btn").unwrap();
        i18n.get("buttons.logout_btn").unwrap();
        assert_eq!(i18n.cached_files(), vec!["buttons".to_string()]);

        i18n.get("messages.info.welcome").unwrap();
        assert_eq!(
            i18n.cached_files(),
            vec!["buttons".to_string(), "messages".to_string()]
        );
    }

    #[test]
    fn test_failed_lookups_leave_cache_untouched() {
        let temp_dir = create_test_locales();
        write_resource(temp_dir.path(), "ru", "broken", "key = ");
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();

        assert!(matches!(
            i18n.get("broken.key"),
            Err(I18nError::Parse { .. })
        ));
        assert!(matches!(
            i18n.get("missing.key"),
            Err(I18nError::ResourceFileMissing { .. })
        ));
        assert!(i18n.cached_files().is_empty());
        assert!(i18n.cache.read().is_empty());
    }

    #[test]
    fn test_unreadable_file_names_path_and_is_not_cached() {
        let temp_dir = create_test_locales();
        let bad = temp_dir.path().join("ru").join("bad.toml");
        fs::write(&bad, [0xff, 0xfe, b'a']).unwrap();
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();

        let err = i18n.get("bad.a").unwrap_err();
        match &err {
            I18nError::Io { path, source } => {
                assert_eq!(path, &bad);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("bad.toml"));
        assert!(!i18n.is_cached("bad"));
        assert!(i18n.cache.read().is_empty());
    }

    #[test]
    fn test_has_resource_files_names_unreadable_dir() {
        let temp_dir = create_test_locales();
        let dir = temp_dir.path().join("absent");

        match has_resource_files(&dir) {
            Err(I18nError::Io { path, .. }) => assert_eq!(path, dir),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_slow_file_does_not_hold_map_lock() {
        let temp_dir = create_test_locales();
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();
        i18n.get("buttons.login_btn").unwrap();

        // Simulate a parse in flight: an empty slot for `messages` exists
        // while another file is still served from the cache.
        let slot = Arc::clone(i18n.cache.write().entry("messages".to_string()).or_default());
        assert!(i18n.cache.try_write().is_some());
        assert_eq!(i18n.get_str("buttons.cancel_btn").unwrap(), "Отмена");
        assert!(!i18n.is_cached("messages"));
        assert_eq!(i18n.cached_files(), vec!["buttons".to_string()]);

        assert_eq!(
            i18n.get_str("messages.info.welcome").unwrap(),
            "Добро пожаловать, {username}!"
        );
        assert!(slot.get().is_some());
    }

    #[test]
    fn test_missing_key_keeps_parsed_file_cached() {
        let temp_dir = create_test_locales();
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();

        assert!(i18n.get("buttons.nope").is_err());
        assert!(i18n.is_cached("buttons"));
    }

    #[test]
    fn test_file_segment_outside_locale_dir_is_missing() {
        let temp_dir = create_test_locales();
        let i18n = I18nToml::new(temp_dir.path(), "ru").unwrap();

        assert!(matches!(
            i18n.get(""),
            Err(I18nError::ResourceFileMissing { .. })
        ));
        assert!(matches!(
            i18n.get("../ru/buttons.login_btn"),
            Err(I18nError::ResourceFileMissing { .. })
        ));
    }

    #[test]
    fn test_has_resource_files_ignores_other_entries() {
        let temp_dir = create_test_locales();
        let dir = temp_dir.path().join("empty");
        fs::write(dir.join("README.md"), "notes").unwrap();
        fs::create_dir_all(dir.join("nested.toml")).unwrap();

        assert!(!has_resource_files(&dir).unwrap());
        assert!(has_resource_files(&temp_dir.path().join("ru")).unwrap());
    }
}
