use super::SyncStatus;
use time::UtcDateTime;
use uuid::Uuid;

/// Tag colour palette, in rotation order.
pub const TAG_COLORS: [&str; 8] = [
    "#3B82F6", // Blue
    "#10B981", // Green
    "#F59E0B", // Amber
    "#EF4444", // Red
    "#8B5CF6", // Purple
    "#EC4899", // Pink
    "#06B6D4", // Cyan
    "#F97316", // Orange
];

/// A user-created tag.
///
/// Books reference tags by [`name`](Self::name), not by id. Renaming or
/// deleting a tag leaves existing books pointing at the old name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserTag {
    pub id: Uuid,
    pub name: String,
    pub color_hex: String,
    pub created_at: UtcDateTime,
    pub sync_status: SyncStatus,
}
impl UserTag {
    /// Creates a tag, taking the next palette colour unless one is given.
    ///
    /// An explicit colour does not advance the palette.
    pub fn new(name: impl Into<String>, color_hex: Option<String>, palette: &mut TagPalette) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color_hex: color_hex.unwrap_or_else(|| palette.next_color().to_string()),
            created_at: UtcDateTime::now(),
            sync_status: SyncStatus::default(),
        }
    }
}

/// Rotating colour assignment for new tags.
///
/// The position is explicit state owned by whoever creates tags. Seed it with
/// [`TagPalette::starting_at`] (typically the number of tags that already
/// exist) so colours carry on where they left off after a restart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TagPalette {
    position: usize,
}
impl TagPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the colour at the current position and advances.
    pub fn next_color(&mut self) -> &'static str {
        let color = TAG_COLORS[self.position % TAG_COLORS.len()];
        self.position = self.position.wrapping_add(1);
        color
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}
