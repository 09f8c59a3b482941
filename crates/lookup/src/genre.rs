//! Provider category → [`Genre`] mapping.

use bookshelf_catalog::models::Genre;

/// Keyword rows, checked top to bottom. The first row with any keyword
/// contained in the lowercased category wins, so broad keywords shadow
/// narrower rows further down ("science fiction" contains "fiction").
const GENRE_KEYWORDS: [(&[&str], Genre); 21] = [
    (&["fiction"], Genre::Fiction),
    (&["non-fiction", "nonfiction"], Genre::NonFiction),
    (&["mystery", "detective", "crime"], Genre::Mystery),
    (&["science fiction", "sci-fi", "scifi"], Genre::ScienceFiction),
    (&["fantasy"], Genre::Fantasy),
    (&["romance"], Genre::Romance),
    (&["thriller", "suspense"], Genre::Thriller),
    (&["horror"], Genre::Horror),
    (&["biography", "autobiography", "memoir"], Genre::Biography),
    (&["history", "historical"], Genre::History),
    (&["science", "physics", "chemistry", "biology"], Genre::Science),
    (&["self-help", "self help", "personal development"], Genre::SelfHelp),
    (&["business", "economics", "finance"], Genre::Business),
    (&["children", "juvenile", "kids"], Genre::Children),
    (&["young adult", "ya", "teen"], Genre::YoungAdult),
    (&["poetry", "poems"], Genre::Poetry),
    (&["art", "photography"], Genre::Art),
    (&["cooking", "cookbook", "food", "recipes"], Genre::Cooking),
    (&["travel", "adventure"], Genre::Travel),
    (&["religion", "spirituality", "faith"], Genre::Religion),
    (&["philosophy"], Genre::Philosophy),
];

/// Maps a provider's free-form category to a suggested genre.
///
/// No category means no genre. A category that matches nothing is
/// [`Genre::Other`].
pub fn map_category(category: Option<&str>) -> Option<Genre> {
    let category = category?.to_lowercase();
    let genre = GENRE_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| category.contains(keyword)))
        .map_or(Genre::Other, |(_, genre)| *genre);
    Some(genre)
}
