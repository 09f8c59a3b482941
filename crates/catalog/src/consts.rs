/// Shown in place of an empty author list.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Shown when a book points at a predefined location that no longer exists.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Longest title (in characters) accepted by [`BookForm::validate`](crate::BookForm::validate).
pub const MAX_TITLE_LENGTH: usize = 500;
/// Longest notes field (in characters) accepted by [`BookForm::validate`](crate::BookForm::validate).
pub const MAX_NOTES_LENGTH: usize = 5000;
