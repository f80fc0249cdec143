//! Display-ready enrichment built from raw [`MovieDetails`].
//!
//! Missing fields never fail: each one degrades to a fixed default so a
//! card can always be rendered.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::MovieDetails;

/// Overviews longer than this many characters are cut
pub const OVERVIEW_MAX_CHARS: usize = 150;

/// Marker appended to a cut overview
pub const ELLIPSIS: &str = "...";

/// Shown when the service has no overview for a movie
pub const DEFAULT_OVERVIEW: &str = "No description available.";

/// Average vote, or the "unavailable" sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f32),
    Unavailable,
}

/// Scores serialize as numbers, the sentinel as `"N/A"`
impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f32(*score),
            Rating::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{:.1}", score),
            Rating::Unavailable => f.write_str("N/A"),
        }
    }
}

/// Poster, rating and overview for one recommended movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrichment {
    /// Empty when the movie has no poster
    pub poster_url: String,
    pub rating: Rating,
    pub overview: String,
}

impl Enrichment {
    /// Build from fetched details.
    ///
    /// `image_base_url` is the poster size root, e.g.
    /// `https://image.tmdb.org/t/p/w500`.
    pub fn from_details(details: &MovieDetails, image_base_url: &str) -> Self {
        let poster_url = details
            .poster_path
            .as_deref()
            .map(|path| path.trim().trim_start_matches('/'))
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/{}", image_base_url.trim_end_matches('/'), path))
            .unwrap_or_default();

        let rating = details
            .vote_average
            .filter(|v| v.is_finite())
            .map(Rating::Score)
            .unwrap_or(Rating::Unavailable);

        let overview = details
            .overview
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .map(truncate_overview)
            .unwrap_or_else(|| DEFAULT_OVERVIEW.to_string());

        Self {
            poster_url,
            rating,
            overview,
        }
    }

    /// Fallback used when the lookup failed outright
    pub fn unavailable() -> Self {
        Self {
            poster_url: String::new(),
            rating: Rating::Unavailable,
            overview: DEFAULT_OVERVIEW.to_string(),
        }
    }
}

/// Cut an overview to [`OVERVIEW_MAX_CHARS`] characters plus [`ELLIPSIS`].
///
/// Counts Unicode scalar values, never splits a character. Text at or under
/// the limit is returned unchanged.
pub fn truncate_overview(overview: &str) -> String {
    match overview.char_indices().nth(OVERVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &overview[..cut], ELLIPSIS),
        None => overview.to_string(),
    }
}
