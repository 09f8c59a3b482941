use std::str::FromStr;

use super::sanitize;
use crate::error::{Error, ErrorKind};
use crate::sort::{SortDirection, SortKey};

/// Fixed key of the one-and-only [`AppSettings`] record.
pub const SETTINGS_ID: &str = "app-settings";

/// Library layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Where records are kept. Only `Local` does anything today.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StorageMode {
    #[default]
    Local,
    Cloud,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Appearance {
    #[default]
    System,
    Light,
    Dark,
}

/// Persisted user preferences.
///
/// There is exactly one of these, stored under [`SETTINGS_ID`]. It is not
/// written until something changes; until then readers get the defaults.
///
/// With the `serde` feature, decoding goes through [`AppSettings::from_raw`]:
/// a stored value that no longer parses resets that one field, not the record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSettings"))]
pub struct AppSettings {
    pub id: String,
    pub view_mode: ViewMode,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub storage_mode: StorageMode,
    pub appearance: Appearance,
}
impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: SETTINGS_ID.to_string(),
            view_mode: ViewMode::default(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            storage_mode: StorageMode::default(),
            appearance: Appearance::default(),
        }
    }
}
impl AppSettings {
    /// Rebuilds settings from raw stored strings. Values that no longer parse
    /// (renamed variants, hand-edited rows) fall back to their defaults
    /// rather than failing the whole record.
    pub fn from_raw(view_mode: &str, sort_key: &str, sort_direction: &str, storage_mode: &str, appearance: &str) -> Self {
        Self {
            id: SETTINGS_ID.to_string(),
            view_mode: or_default(view_mode),
            sort_key: or_default(sort_key),
            sort_direction: or_default(sort_direction),
            storage_mode: or_default(storage_mode),
            appearance: or_default(appearance),
        }
    }
}

/// Stored settings as plain strings, before parsing.
#[cfg(feature = "serde")]
#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct RawSettings {
    view_mode: String,
    sort_key: String,
    sort_direction: String,
    storage_mode: String,
    appearance: String,
}
#[cfg(feature = "serde")]
impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        Self::from_raw(&raw.view_mode, &raw.sort_key, &raw.sort_direction, &raw.storage_mode, &raw.appearance)
    }
}

fn or_default<T: FromStr + Default>(raw: &str) -> T {
    raw.parse().unwrap_or_else(|_| {
        tracing::debug!(raw, "unrecognised stored setting; using default");
        T::default()
    })
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}
impl FromStr for ViewMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "grid" => Self::Grid,
            "list" => Self::List,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "view_mode",
                value: s.to_string(),
            }),
        })
    }
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Cloud => "cloud",
        }
    }
}
impl FromStr for StorageMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "local" => Self::Local,
            "cloud" => Self::Cloud,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "storage_mode",
                value: s.to_string(),
            }),
        })
    }
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}
impl FromStr for Appearance {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "system" => Self::System,
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "appearance",
                value: s.to_string(),
            }),
        })
    }
}
