mod book;
mod cover;
mod filter;
mod genre;
mod location;
mod settings;
mod sync;
mod tag;

pub use self::book::Book;
pub use self::cover::Cover;
pub use self::filter::FilterState;
pub use self::genre::Genre;
pub use self::location::{BookLocation, PredefinedLocation};
pub use self::settings::{AppSettings, Appearance, SETTINGS_ID, StorageMode, ViewMode};
pub use self::sync::SyncStatus;
pub use self::tag::{TAG_COLORS, TagPalette, UserTag};

pub(crate) fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace(['-', '_', ' '], "")
}
