//! The catalog record type and the keys it can be sorted by.

use std::fmt;
use std::str::FromStr;

// ── Entry ───────────────────────────────────────────────────────────────────

/// One book in the catalog.
///
/// `title` doubles as the removal key. `year` and `rating` are kept as the raw
/// tokens the user typed; nothing here validates them numerically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: String,
    pub rating: Option<String>,
    pub review: Option<String>,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year: year.into(),
            rating: None,
            review: None,
        }
    }

    /// Set the rating. An empty token clears it, since that is how an absent
    /// rating is persisted.
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = non_empty(rating.into());
        self
    }

    /// Set the review. An empty string clears it.
    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.review = non_empty(review.into());
        self
    }

    pub fn rating_str(&self) -> &str {
        self.rating.as_deref().unwrap_or("")
    }

    pub fn review_str(&self) -> &str {
        self.review.as_deref().unwrap_or("")
    }

    /// The six fields in persisted order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.title,
            &self.author,
            &self.genre,
            &self.year,
            self.rating_str(),
            self.review_str(),
        ]
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

// ── SortKey ─────────────────────────────────────────────────────────────────

/// Field the catalog can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    Genre,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }

    /// The field of `entry` this key compares on.
    pub fn field<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            Self::Title => &entry.title,
            Self::Author => &entry.author,
            Self::Genre => &entry.genre,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected title, author or genre)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "genre" => Ok(Self::Genre),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optionals_are_absent() {
        let e = Entry::new("Dune", "Herbert", "Sci-Fi", "1965")
            .with_rating("")
            .with_review("");
        assert_eq!(e.rating, None);
        assert_eq!(e.review, None);
        assert_eq!(e.fields(), ["Dune", "Herbert", "Sci-Fi", "1965", "", ""]);
    }

    #[test]
    fn test_fields_order() {
        let e = Entry::new("Dune", "Herbert", "Sci-Fi", "1965")
            .with_rating("5")
            .with_review("spice");
        assert_eq!(e.fields(), ["Dune", "Herbert", "Sci-Fi", "1965", "5", "spice"]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
        assert_eq!("Author".parse::<SortKey>(), Ok(SortKey::Author));
        assert_eq!(" GENRE ".parse::<SortKey>(), Ok(SortKey::Genre));
        assert!("year".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_field() {
        let e = Entry::new("T", "A", "G", "1999");
        assert_eq!(SortKey::Title.field(&e), "T");
        assert_eq!(SortKey::Author.field(&e), "A");
        assert_eq!(SortKey::Genre.field(&e), "G");
    }
}
