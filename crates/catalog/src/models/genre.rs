use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Suggested genres.
///
/// [`Book::genre`](super::Book::genre) is a free-text field; these are the
/// values offered in pickers and produced by metadata lookups. Anything else
/// the user types is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Fiction,
    NonFiction,
    Mystery,
    ScienceFiction,
    Fantasy,
    Romance,
    Thriller,
    Horror,
    Biography,
    History,
    Science,
    SelfHelp,
    Business,
    Children,
    YoungAdult,
    Poetry,
    Art,
    Cooking,
    Travel,
    Religion,
    Philosophy,
    Other,
}
impl Genre {
    /// Every suggested genre, in picker order.
    pub const ALL: [Genre; 22] = [
        Self::Fiction,
        Self::NonFiction,
        Self::Mystery,
        Self::ScienceFiction,
        Self::Fantasy,
        Self::Romance,
        Self::Thriller,
        Self::Horror,
        Self::Biography,
        Self::History,
        Self::Science,
        Self::SelfHelp,
        Self::Business,
        Self::Children,
        Self::YoungAdult,
        Self::Poetry,
        Self::Art,
        Self::Cooking,
        Self::Travel,
        Self::Religion,
        Self::Philosophy,
        Self::Other,
    ];

    /// Returns the display string, which is also the value stored on a book.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::Mystery => "Mystery",
            Self::ScienceFiction => "Science Fiction",
            Self::Fantasy => "Fantasy",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
            Self::Horror => "Horror",
            Self::Biography => "Biography",
            Self::History => "History",
            Self::Science => "Science",
            Self::SelfHelp => "Self-Help",
            Self::Business => "Business",
            Self::Children => "Children",
            Self::YoungAdult => "Young Adult",
            Self::Poetry => "Poetry",
            Self::Art => "Art",
            Self::Cooking => "Cooking",
            Self::Travel => "Travel",
            Self::Religion => "Religion",
            Self::Philosophy => "Philosophy",
            Self::Other => "Other",
        }
    }
}
impl FromStr for Genre {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = sanitize(s);
        Self::ALL
            .into_iter()
            .find(|genre| sanitize(genre.as_str()) == sanitized)
            .ok_or_else(|| {
                exn::Exn::from(ErrorKind::ParseError {
                    field: "genre",
                    value: s.to_string(),
                })
            })
    }
}
impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}
