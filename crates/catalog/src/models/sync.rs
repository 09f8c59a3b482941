use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Remote sync state of a record.
///
/// Nothing syncs yet; every record is created as [`SyncStatus::Synced`] and
/// stays that way. The field exists so stored records don't need migrating
/// once a remote backend appears.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SyncStatus {
    #[default]
    Synced,
    PendingUpload,
    PendingDelete,
    Conflict,
}
impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synced => "synced",
            Self::PendingUpload => "pendingUpload",
            Self::PendingDelete => "pendingDelete",
            Self::Conflict => "conflict",
        }
    }
}
impl FromStr for SyncStatus {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "synced" => Self::Synced,
            "pendingupload" => Self::PendingUpload,
            "pendingdelete" => Self::PendingDelete,
            "conflict" => Self::Conflict,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "sync_status",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for SyncStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
