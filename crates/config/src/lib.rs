//! Runtime configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults,
//! 2. an optional config file (TOML, YAML or JSON, chosen by extension),
//! 3. `BOOKSHELF_`-prefixed environment variables, with `__` separating
//!    nested keys (`BOOKSHELF_LOOKUP__CACHE_TTL_SECS=60`).

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "BOOKSHELF_";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub images: ImageConfig,
    pub search: SearchConfig,
}

/// Metadata lookup over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// How long a successful ISBN lookup is served from memory.
    pub cache_ttl_secs: u64,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub open_library_url: String,
    pub open_library_covers_url: String,
    pub google_books_url: String,
}
impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
            http_timeout_secs: 15,
            user_agent: concat!("bookshelf/", env!("CARGO_PKG_VERSION")).to_string(),
            open_library_url: "https://openlibrary.org".to_string(),
            open_library_covers_url: "https://covers.openlibrary.org".to_string(),
            google_books_url: "https://www.googleapis.com/books/v1".to_string(),
        }
    }
}
impl LookupConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// In-memory cover image cache bounds. Both apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub max_entries: usize,
    /// Total encoded size of all cached images.
    pub max_bytes: usize,
}
impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            max_bytes: 50 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before typed search text is applied.
    pub debounce_ms: u64,
}
impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}
impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Config {
    /// Loads configuration from defaults, a file, and the environment.
    ///
    /// With `path` set the file must exist. Without it, the platform config
    /// directory is checked and silently skipped if nothing is there.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        match path {
            Some(path) => {
                exn::ensure!(path.is_file(), ErrorKind::NotFound(path.to_path_buf()));
                figment = merge_file(figment, path)?;
            },
            None => {
                if let Some(path) = default_path().filter(|path| path.is_file()) {
                    tracing::debug!(path = %path.display(), "using default config file");
                    figment = merge_file(figment, &path)?;
                }
            },
        }
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extracts and validates a config from an already-assembled figment.
    pub fn extract(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would disable a component outright.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field| ErrorKind::Invalid {
            field,
            reason: "must be greater than zero",
        };
        exn::ensure!(self.lookup.cache_ttl_secs > 0, invalid("lookup.cache_ttl_secs"));
        exn::ensure!(self.lookup.http_timeout_secs > 0, invalid("lookup.http_timeout_secs"));
        exn::ensure!(self.images.max_entries > 0, invalid("images.max_entries"));
        exn::ensure!(self.images.max_bytes > 0, invalid("images.max_bytes"));
        exn::ensure!(self.search.debounce_ms > 0, invalid("search.debounce_ms"));
        Ok(())
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    Ok(match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file_exact(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    })
}

/// Platform config location, e.g. `~/.config/bookshelf/config.toml` on Linux.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bookshelf").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn write_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(&format!(".{extension}")).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.lookup.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.images.max_entries, 100);
        assert_eq!(config.images.max_bytes, 52_428_800);
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
    }

    #[rstest]
    #[case("toml", "[lookup]\ncache_ttl_secs = 60\n\n[images]\nmax_entries = 5\n")]
    #[case("yaml", "lookup:\n  cache_ttl_secs: 60\nimages:\n  max_entries: 5\n")]
    #[case("json", r#"{"lookup": {"cache_ttl_secs": 60}, "images": {"max_entries": 5}}"#)]
    fn test_file_overrides_defaults(#[case] extension: &str, #[case] contents: &str) {
        let file = write_config(extension, contents);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.lookup.cache_ttl_secs, 60);
        assert_eq!(config.images.max_entries, 5);
        // Untouched values keep their defaults.
        assert_eq!(config.images.max_bytes, ImageConfig::default().max_bytes);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config("ini", "cache_ttl_secs=1");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("toml", "[lookup\ncache_ttl_secs = ");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(*err, ErrorKind::Parse);
    }

    #[rstest]
    #[case("[lookup]\ncache_ttl_secs = 0", "lookup.cache_ttl_secs")]
    #[case("[lookup]\nhttp_timeout_secs = 0", "lookup.http_timeout_secs")]
    #[case("[images]\nmax_entries = 0", "images.max_entries")]
    #[case("[images]\nmax_bytes = 0", "images.max_bytes")]
    #[case("[search]\ndebounce_ms = 0", "search.debounce_ms")]
    fn test_zero_values_rejected(#[case] toml: &str, #[case] expected: &str) {
        let figment = Figment::new().merge(Serialized::defaults(Config::default())).merge(Toml::string(toml));
        let err = Config::extract(figment).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Invalid { field, .. } if *field == expected));
    }

    #[test]
    fn test_default_path_is_toml() {
        if let Some(path) = default_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
