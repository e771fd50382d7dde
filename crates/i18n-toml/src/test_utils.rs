//! Test utilities and shared fixtures for i18n-toml.
//!
//! Available to the crate's own unit tests and, through the `testing`
//! feature, to downstream crates that want to build locale trees on disk.

use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `<root>/<locale>/<file>.toml` with the given content, creating
/// directories as needed.
pub fn write_resource(root: &Path, locale: &str, file: &str, content: &str) {
    let dir = root.join(locale);
    fs::create_dir_all(&dir).expect("Failed to create locale directory");
    fs::write(dir.join(format!("{file}.toml")), content).expect("Failed to write resource file");
}

/// Build a locale tree matching the bundled `ru` fixtures plus an empty
/// locale directory.
pub fn create_test_locales() -> TempDir {
    let temp_dir = create_temp_dir();
    let root = temp_dir.path();

    write_resource(
        root,
        "ru",
        "buttons",
        r#"login_btn = "Войти"
logout_btn = "Выйти"
cancel_btn = "Отмена"
"#,
    );
    write_resource(
        root,
        "ru",
        "messages",
        r#"[info]
welcome = "Добро пожаловать, {username}!"

[info.version]
stable = "Стабильная версия приложения: {version}"
"#,
    );
    fs::create_dir_all(root.join("empty")).expect("Failed to create empty locale");

    temp_dir
}
