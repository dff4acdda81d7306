/// Data structures and traits for movie and TV series metadata lookup.
///
/// This module provides structures to represent search hits and fully
/// populated title records with their associated metadata (titles, genres,
/// companies, etc.), as well as a trait for implementing database providers.
mod tmdb;
mod tmdb_types;

pub use tmdb::TmdbClient;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during metadata lookup operations.
#[derive(Debug, Error)]
pub enum MetadataLookupError {
    /// Request to the database provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseFailed(String),

    /// The requested title was not found
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    /// The API returned invalid or unexpected data
    #[error("API returned invalid data: {0}")]
    InvalidData(String),

    /// No API key was provided for a provider that requires one
    #[error("Missing API key: {0}")]
    MissingApiKey(String),
}

/// The kind of title an identifier refers to.
///
/// The database namespaces movies and series separately, so an identifier
/// is only meaningful together with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleKind {
    Movie,
    Series,
}

/// An opaque identifier for a movie or series, as produced by a search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleId {
    /// Whether this identifies a movie or a series
    pub kind: TitleKind,
    /// The provider-assigned numeric identifier
    pub id: u64,
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TitleKind::Movie => write!(f, "movie/{}", self.id),
            TitleKind::Series => write!(f, "tv/{}", self.id),
        }
    }
}

/// A single entry of a search result.
///
/// Carries only what is needed to fetch the full record and to name the
/// entry in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Identifier used for the detail lookup
    pub id: TitleId,
    /// Display title of the hit
    pub title: String,
}

/// A company associated with a title, such as a distributor or a
/// production company. The name may be absent in the provider's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// The company name, if the provider supplied one
    pub name: Option<String>,
}

/// A fully populated record for one movie or series.
///
/// Fields that the provider does not guarantee are optional; list fields
/// are empty rather than absent when the provider supplied nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// The identifier this record was fetched for
    pub id: TitleId,
    /// The canonical (original-language) title
    pub title: String,
    /// The title in the request language, when it differs from canonical
    pub localized_title: Option<String>,
    /// URL of the cover/poster image
    pub cover_url: Option<String>,
    /// Genre names
    pub genres: Vec<String>,
    /// Release year (movies)
    pub year: Option<u16>,
    /// Broadcast year span such as "2008-2013" or "2008-" (series)
    pub series_years: Option<String>,
    /// Distributing companies or networks
    pub distributors: Vec<Company>,
    /// Production companies
    pub production_companies: Vec<Company>,
}

/// Trait for database providers that can search for and fetch title
/// metadata.
///
/// Implementors of this trait can retrieve movie and series information
/// from various sources such as TMDB or other title databases. The driver
/// in the crate root is generic over this trait so tests can inject a fake
/// provider.
pub trait MovieDatabase {
    /// Searches the database for titles matching a free-text query.
    ///
    /// # Arguments
    ///
    /// * `query` - The title to search for
    /// * `limit` - The maximum number of hits to return
    ///
    /// # Returns
    ///
    /// A Result containing at most `limit` hits in the provider's ranking
    /// order, or a MetadataLookupError
    fn search_titles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, MetadataLookupError>;

    /// Fetches the fully populated record for one title.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the title, as produced by a search hit
    ///
    /// # Returns
    ///
    /// A Result containing the TitleRecord, or a MetadataLookupError
    fn title_details(&self, id: &TitleId) -> Result<TitleRecord, MetadataLookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_id_display() {
        let movie = TitleId {
            kind: TitleKind::Movie,
            id: 603,
        };
        let series = TitleId {
            kind: TitleKind::Series,
            id: 1396,
        };
        assert_eq!(movie.to_string(), "movie/603");
        assert_eq!(series.to_string(), "tv/1396");
    }
}
