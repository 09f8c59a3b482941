use std::fmt::{Debug, Display};
use std::hash::Hash;

use bookshelf_catalog::models::{AppSettings, Book, PredefinedLocation, UserTag};
use uuid::Uuid;

/// Anything a [`Store`](crate::Store) can hold: cloneable, sendable, and
/// identified by a stable key.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Debug + Display + Send + Sync;

    fn id(&self) -> Self::Id;
}

impl Record for Book {
    type Id = Uuid;
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for PredefinedLocation {
    type Id = Uuid;
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for UserTag {
    type Id = Uuid;
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for AppSettings {
    type Id = String;
    fn id(&self) -> String {
        self.id.clone()
    }
}
