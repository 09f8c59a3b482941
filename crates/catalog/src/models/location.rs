use super::SyncStatus;
use crate::consts::UNKNOWN_LOCATION;
use time::UtcDateTime;
use uuid::Uuid;

/// A saved, reusable place label (e.g. "Living Room - Shelf A").
///
/// Names are unique by convention only; nothing stops two locations sharing a
/// name, and books always reference them by [`id`](Self::id).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredefinedLocation {
    pub id: Uuid,
    pub name: String,
    pub created_at: UtcDateTime,
    pub sync_status: SyncStatus,
}
impl PredefinedLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: UtcDateTime::now(),
            sync_status: SyncStatus::default(),
        }
    }
}

/// Where a book physically lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum BookLocation {
    /// Reference to a [`PredefinedLocation`] by id.
    Predefined { id: Uuid },
    /// One-off free text.
    Custom { text: String },
}
impl BookLocation {
    pub fn predefined(id: Uuid) -> Self {
        Self::Predefined { id }
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self::Custom { text: text.into() }
    }

    /// The predefined location id, if this is a reference.
    pub fn predefined_id(&self) -> Option<Uuid> {
        match self {
            Self::Predefined { id } => Some(*id),
            Self::Custom { .. } => None,
        }
    }

    /// Resolves the text shown for this location.
    ///
    /// A predefined reference whose id is missing from `locations` (deleted
    /// since the book was saved) falls back to [`UNKNOWN_LOCATION`].
    pub fn display_text<'a>(&'a self, locations: &'a [PredefinedLocation]) -> &'a str {
        match self {
            Self::Predefined { id } => locations
                .iter()
                .find(|location| location.id == *id)
                .map(|location| location.name.as_str())
                .unwrap_or(UNKNOWN_LOCATION),
            Self::Custom { text } => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_resolves_predefined() {
        let shelf = PredefinedLocation::new("Shelf A");
        let location = BookLocation::predefined(shelf.id);
        assert_eq!(location.display_text(std::slice::from_ref(&shelf)), "Shelf A");
    }

    #[test]
    fn test_display_text_unresolved_predefined() {
        let location = BookLocation::predefined(Uuid::new_v4());
        assert_eq!(location.display_text(&[PredefinedLocation::new("Shelf A")]), UNKNOWN_LOCATION);
    }

    #[test]
    fn test_display_text_custom() {
        let location = BookLocation::custom("Under the bed");
        assert_eq!(location.display_text(&[]), "Under the bed");
        assert_eq!(location.predefined_id(), None);
    }
}
